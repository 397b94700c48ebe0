//! Calculation input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxRegime;

/// Monthly figures and options for a single contribution calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Monthly revenue in PLN.
    pub income: Decimal,
    /// Monthly deductible costs in PLN.
    pub costs: Decimal,
    /// The chosen taxation form.
    pub regime: TaxRegime,
    /// VAT rate as a percentage (e.g. 23 for 23%).
    pub vat_rate_percent: Decimal,
    /// Whether the simplified 50% income tax discount applies.
    pub has_discount: bool,
    /// Whether the voluntary sickness contribution is paid.
    pub pays_sickness_contribution: bool,
}

impl CalculationInput {
    /// Creates an input with no costs, no VAT, no discount and sickness
    /// contribution paid.
    ///
    /// # Example
    ///
    /// ```
    /// use b2b_contributions::models::{CalculationInput, TaxRegime};
    /// use rust_decimal::Decimal;
    ///
    /// let input = CalculationInput::new(Decimal::new(10000, 0), TaxRegime::LinearTax19);
    /// assert!(input.costs.is_zero());
    /// assert!(input.pays_sickness_contribution);
    /// ```
    pub fn new(income: Decimal, regime: TaxRegime) -> Self {
        Self {
            income,
            costs: Decimal::ZERO,
            regime,
            vat_rate_percent: Decimal::ZERO,
            has_discount: false,
            pays_sickness_contribution: true,
        }
    }
}
