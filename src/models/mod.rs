//! Core data models for the contribution calculator.
//!
//! This module contains all the domain models used throughout the crate.

mod calculation_input;
mod calculation_result;
mod reference_data;
mod regime;

pub use calculation_input::CalculationInput;
pub use calculation_result::{CalculationResult, ContributionLineItem};
pub use reference_data::{CONTRIBUTION_BASE_RATIO, ReferenceData};
pub use regime::TaxRegime;
