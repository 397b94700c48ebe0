//! Income tax (PIT) calculation.
//!
//! This module applies the per-regime income tax rules. Lump-sum regimes tax
//! revenue less social contributions; linear and scale regimes tax income
//! (revenue less costs and social contributions). The scale calculation is
//! simplified: monthly income is annualised to pick the bracket and a flat
//! monthly tax-reducing amount is applied in the first bracket only.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::TaxRegime;

use super::round_money;

/// Warning for both lump-sum rates.
pub const LUMP_SUM_TAX_WARNING: &str =
    "PIT (ryczałt) obliczony od przychodu pomniejszonego tylko o ZUS społeczny (uproszczenie).";

/// Warning for the linear regime.
pub const LINEAR_TAX_WARNING: &str = "PIT (liniowy) obliczony od dochodu (przychód - koszty - ZUS społ.) bez odliczenia składki zdrowotnej (uproszczenie).";

/// Warning for the progressive scale.
pub const SCALE_TAX_WARNING: &str = "PIT (skala) obliczony w sposób uproszczony (bez pełnego uwzględnienia kwoty wolnej/zmniejszającej i progów rocznych).";

/// Warning when the 50% discount was applied.
pub const DISCOUNT_WARNING: &str = "Zastosowano uproszczoną zniżkę PIT 50% na kwotę podatku.";

/// Annual income at or below which the first scale bracket applies.
pub const SCALE_FIRST_BRACKET_LIMIT: Decimal = Decimal::from_parts(120_000, 0, 0, false, 0);

/// Returns the monthly tax-reducing amount for the first scale bracket.
pub fn monthly_tax_reduction() -> Decimal {
    Decimal::new(3000, 1)
}

/// The income tax and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeTaxResult {
    /// The monthly amount the rate was applied to.
    pub tax_base: Decimal,
    /// The tax due, rounded to 2 decimals and halved when discounted.
    pub amount: Decimal,
    /// Warnings in the order they were generated.
    pub warnings: Vec<&'static str>,
}

/// Calculates the monthly income tax.
///
/// # Errors
///
/// Returns [`EngineError::UnknownRegime`] for [`TaxRegime::Unrecognized`]. This
/// is stricter than the health contribution, which only warns.
///
/// # Example
///
/// ```
/// use b2b_contributions::calculation::calculate_income_tax;
/// use b2b_contributions::models::TaxRegime;
/// use rust_decimal::Decimal;
///
/// let result = calculate_income_tax(
///     &TaxRegime::LinearTax19,
///     Decimal::new(10000, 0),
///     Decimal::new(2000, 0),
///     Decimal::new(170450, 2),
///     false,
/// )?;
/// assert_eq!(result.amount, Decimal::new(119615, 2));
/// # Ok::<(), b2b_contributions::error::EngineError>(())
/// ```
pub fn calculate_income_tax(
    regime: &TaxRegime,
    income: Decimal,
    costs: Decimal,
    social_contributions_total: Decimal,
    has_discount: bool,
) -> EngineResult<IncomeTaxResult> {
    let revenue_base = (income - social_contributions_total).max(Decimal::ZERO);
    let income_base = (income - costs - social_contributions_total).max(Decimal::ZERO);
    let mut warnings = Vec::new();

    let (tax_base, tax) = match regime {
        TaxRegime::FlatRate15 => {
            warnings.push(LUMP_SUM_TAX_WARNING);
            (revenue_base, revenue_base * Decimal::new(15, 2))
        }
        TaxRegime::FlatRate12 => {
            warnings.push(LUMP_SUM_TAX_WARNING);
            (revenue_base, revenue_base * Decimal::new(12, 2))
        }
        TaxRegime::LinearTax19 => {
            warnings.push(LINEAR_TAX_WARNING);
            (income_base, income_base * Decimal::new(19, 2))
        }
        TaxRegime::ProgressiveScale => {
            // An annual figure past the Decimal range is past the limit too
            let in_first_bracket = income_base
                .checked_mul(Decimal::from(12))
                .is_some_and(|annualized| annualized <= SCALE_FIRST_BRACKET_LIMIT);
            let tax = if in_first_bracket {
                (income_base * Decimal::new(12, 2) - monthly_tax_reduction()).max(Decimal::ZERO)
            } else {
                income_base * Decimal::new(32, 2)
            };
            warnings.push(SCALE_TAX_WARNING);
            (income_base, tax)
        }
        TaxRegime::Unrecognized(value) => {
            return Err(EngineError::UnknownRegime {
                value: value.clone(),
            });
        }
    };

    let mut amount = round_money(tax.max(Decimal::ZERO));
    if has_discount {
        amount *= Decimal::new(5, 1);
        warnings.push(DISCOUNT_WARNING);
    }

    Ok(IncomeTaxResult {
        tax_base,
        amount,
        warnings,
    })
}
