//! Reference data model.
//!
//! This module defines [`ReferenceData`], the yearly projected average salary
//! and the social contribution base derived from it.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Share of the projected average salary used as the contribution base.
pub const CONTRIBUTION_BASE_RATIO: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Reference figures for one contribution year.
///
/// The contribution base is present exactly when the average salary is, and
/// the error message is present exactly when the fetch or parse failed. The
/// fields are private and the type is serialize-only, so [`fetched`] and
/// [`unavailable`] are the only way to build a value and both hold.
///
/// [`fetched`]: ReferenceData::fetched
/// [`unavailable`]: ReferenceData::unavailable
///
/// # Example
///
/// ```
/// use b2b_contributions::models::ReferenceData;
/// use rust_decimal::Decimal;
///
/// let data = ReferenceData::fetched(2025, Decimal::new(8673, 0));
/// assert_eq!(data.contribution_base(), Some(Decimal::new(52038, 1)));
/// assert!(data.error_message().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceData {
    year: i32,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    avg_salary: Option<Decimal>,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    zus_base: Option<Decimal>,
    error_message: Option<String>,
}

impl ReferenceData {
    /// Builds reference data from a successfully parsed average salary.
    pub fn fetched(year: i32, avg_salary: Decimal) -> Self {
        let zus_base = (avg_salary * CONTRIBUTION_BASE_RATIO)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            year,
            avg_salary: Some(avg_salary),
            zus_base: Some(zus_base),
            error_message: None,
        }
    }

    /// Builds reference data for a failed fetch or parse.
    pub fn unavailable(year: i32, error_message: impl Into<String>) -> Self {
        Self {
            year,
            avg_salary: None,
            zus_base: None,
            error_message: Some(error_message.into()),
        }
    }

    /// The year the figures apply to.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The projected average salary, if it was found.
    pub fn avg_salary(&self) -> Option<Decimal> {
        self.avg_salary
    }

    /// The social contribution base (60% of the average salary).
    pub fn contribution_base(&self) -> Option<Decimal> {
        self.zus_base
    }

    /// Why the figures are missing, if they are.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
