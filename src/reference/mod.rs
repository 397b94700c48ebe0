//! Reference data provider.
//!
//! This module fetches the page announcing the projected average salary for
//! the contribution year, extracts the figure, derives the contribution base,
//! and caches successful results for a fixed time window.

mod cache;
mod parser;
mod provider;
mod source;

pub use cache::{Clock, ManualClock, ReferenceCache, SystemClock};
pub use parser::{SalaryPattern, parse_polish_amount};
pub use provider::ReferenceDataProvider;
pub use source::{HttpReferenceSource, ReferenceSource};
