//! Top-level contribution and tax calculation.
//!
//! [`calculate`] validates the input, then runs social contributions, the
//! health contribution, income tax and VAT in that order, collecting the
//! warnings each stage produces.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, CalculationResult, ReferenceData};

use super::{
    MISSING_BASE_WARNING, calculate_health_contribution, calculate_income_tax,
    calculate_social_contributions, round_money,
};

/// Message for a negative income.
pub const NEGATIVE_INCOME_MESSAGE: &str = "Dochód (przychód) nie może być ujemny";

/// Message for negative costs.
pub const NEGATIVE_COSTS_MESSAGE: &str = "Koszty nie mogą być ujemne";

/// Message for a negative VAT rate.
pub const NEGATIVE_VAT_RATE_MESSAGE: &str = "Stawka VAT nie może być ujemna";

/// Message for an income or costs figure above [`MAX_MONTHLY_AMOUNT`].
pub const AMOUNT_OUT_OF_RANGE_MESSAGE: &str = "Kwota przekracza obsługiwany zakres";

/// Message for a VAT rate above 100%.
pub const VAT_RATE_OUT_OF_RANGE_MESSAGE: &str = "Stawka VAT nie może przekraczać 100%";

/// Largest monthly income or costs figure accepted (10^15 PLN).
///
/// Keeps every intermediate product well inside the `Decimal` range.
pub const MAX_MONTHLY_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Rejects inputs outside their allowed ranges.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for an income, costs or VAT rate that
/// is negative or above its upper bound. Income is checked first, then costs,
/// then the VAT rate.
pub fn validate_input(input: &CalculationInput) -> EngineResult<()> {
    if input.income < Decimal::ZERO {
        return Err(invalid("income", NEGATIVE_INCOME_MESSAGE));
    }
    if input.income > MAX_MONTHLY_AMOUNT {
        return Err(invalid("income", AMOUNT_OUT_OF_RANGE_MESSAGE));
    }
    if input.costs < Decimal::ZERO {
        return Err(invalid("costs", NEGATIVE_COSTS_MESSAGE));
    }
    if input.costs > MAX_MONTHLY_AMOUNT {
        return Err(invalid("costs", AMOUNT_OUT_OF_RANGE_MESSAGE));
    }
    if input.vat_rate_percent < Decimal::ZERO {
        return Err(invalid("stawka_vat", NEGATIVE_VAT_RATE_MESSAGE));
    }
    if input.vat_rate_percent > Decimal::ONE_HUNDRED {
        return Err(invalid("stawka_vat", VAT_RATE_OUT_OF_RANGE_MESSAGE));
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Calculates VAT due on the income, rounded to 2 decimals.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for `income` when the product does
/// not fit in a `Decimal`.
pub fn calculate_vat(income: Decimal, vat_rate_percent: Decimal) -> EngineResult<Decimal> {
    income
        .checked_mul(vat_rate_percent)
        .and_then(|gross| gross.checked_div(Decimal::ONE_HUNDRED))
        .map(round_money)
        .ok_or_else(|| invalid("income", AMOUNT_OUT_OF_RANGE_MESSAGE))
}

/// Calculates the full contribution and tax breakdown.
///
/// The calculation has no side effects. A missing contribution base in the
/// reference data is treated as zero with a warning; the reference data's
/// own base, year and error message are reported unchanged.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] when [`validate_input`] fails.
/// - [`EngineError::UnknownRegime`] when the regime is unrecognized.
///
/// # Example
///
/// ```
/// use b2b_contributions::calculation::calculate;
/// use b2b_contributions::models::{CalculationInput, ReferenceData, TaxRegime};
/// use rust_decimal::Decimal;
///
/// let reference = ReferenceData::fetched(2025, Decimal::new(8673, 0));
/// let input = CalculationInput::new(Decimal::new(15000, 0), TaxRegime::LinearTax19);
///
/// let result = calculate(&input, &reference)?;
/// assert_eq!(
///     result.total_burden,
///     result.social_contributions_total + result.health_contribution + result.income_tax
/// );
/// # Ok::<(), b2b_contributions::error::EngineError>(())
/// ```
pub fn calculate(
    input: &CalculationInput,
    reference: &ReferenceData,
) -> EngineResult<CalculationResult> {
    validate_input(input)?;

    let mut warnings: Vec<String> = Vec::new();

    let base = match reference.contribution_base() {
        Some(base) => base,
        None => {
            warnings.push(MISSING_BASE_WARNING.to_string());
            Decimal::ZERO
        }
    };

    let social = calculate_social_contributions(base, input.pays_sickness_contribution);

    let health = calculate_health_contribution(
        &input.regime,
        input.income,
        input.costs,
        social.total,
    );
    warnings.push(health.warning.to_string());

    let income_tax = calculate_income_tax(
        &input.regime,
        input.income,
        input.costs,
        social.total,
        input.has_discount,
    )?;
    warnings.extend(income_tax.warnings.iter().map(|w| w.to_string()));

    let vat_amount = calculate_vat(input.income, input.vat_rate_percent)?;

    let total_burden = round_money(social.total + health.amount + income_tax.amount);
    let net_income = round_money(input.income - input.costs - total_burden);

    Ok(CalculationResult {
        data_year: reference.year(),
        contribution_base_used: reference.contribution_base(),
        line_items: social.line_items,
        social_contributions_total: social.total,
        health_contribution: health.amount,
        income_tax: income_tax.amount,
        vat_amount,
        total_burden,
        net_income,
        warnings,
        data_error: reference.error_message().map(str::to_string),
    })
}
