//! Social contribution calculation.
//!
//! This module computes the ZUS social contribution rows (pension, disability,
//! accident, labour fund and the optional sickness contribution) against the
//! contribution base derived from the projected average salary.

use rust_decimal::Decimal;

use crate::models::ContributionLineItem;

use super::round_money;

/// Warning appended when no contribution base could be obtained.
pub const MISSING_BASE_WARNING: &str =
    "Nie udało się pobrać aktualnej podstawy ZUS. Użyto wartości domyślnych/zerowych.";

/// Name of the voluntary sickness contribution row.
pub const SICKNESS_CONTRIBUTION_NAME: &str = "Chorobowe (dobrowolne)";

/// Returns the mandatory contribution rates in line item order.
///
/// Pension 19.52%, disability 8.00%, accident 1.67%, labour fund 2.45%.
pub fn mandatory_contribution_rates() -> [(&'static str, Decimal); 4] {
    [
        ("Emerytalne", Decimal::new(1952, 4)),
        ("Rentowe", Decimal::new(800, 4)),
        ("Wypadkowe", Decimal::new(167, 4)),
        ("Fundusz Pracy/Solidarnościowy", Decimal::new(245, 4)),
    ]
}

/// Returns the voluntary sickness contribution rate (2.45%).
pub fn sickness_contribution_rate() -> Decimal {
    Decimal::new(245, 4)
}

/// The social contribution rows and their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialContributionsResult {
    /// One row per contribution category, in table order.
    pub line_items: Vec<ContributionLineItem>,
    /// Sum of the row amounts, rounded to 2 decimals.
    pub total: Decimal,
}

/// Calculates social contributions for the given base.
///
/// Each row is `base × rate` rounded to 2 decimals. A base of zero or less
/// produces no rows and a zero total.
///
/// # Example
///
/// ```
/// use b2b_contributions::calculation::calculate_social_contributions;
/// use rust_decimal::Decimal;
///
/// let result = calculate_social_contributions(Decimal::new(5000, 0), true);
/// assert_eq!(result.line_items.len(), 5);
/// assert_eq!(result.total, Decimal::new(170450, 2));
/// ```
pub fn calculate_social_contributions(
    base: Decimal,
    pays_sickness_contribution: bool,
) -> SocialContributionsResult {
    if base <= Decimal::ZERO {
        return SocialContributionsResult {
            line_items: Vec::new(),
            total: Decimal::ZERO,
        };
    }

    let mut rates = mandatory_contribution_rates().to_vec();
    if pays_sickness_contribution {
        rates.push((SICKNESS_CONTRIBUTION_NAME, sickness_contribution_rate()));
    }

    let line_items: Vec<ContributionLineItem> = rates
        .into_iter()
        .map(|(name, rate)| ContributionLineItem {
            name: name.to_string(),
            rate_percent: (rate * Decimal::ONE_HUNDRED).normalize(),
            base,
            amount: round_money(base * rate),
        })
        .collect();

    let total = round_money(line_items.iter().map(|item| item.amount).sum());

    SocialContributionsResult { line_items, total }
}
