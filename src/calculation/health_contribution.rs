//! Health contribution calculation.
//!
//! The rules here are deliberately approximate: a flat share of income for
//! the scale and linear regimes, and a fixed placeholder for lump-sum
//! regimes until income thresholds are modelled.

use rust_decimal::Decimal;

use crate::models::TaxRegime;

use super::round_money;

/// Warning for the progressive scale approximation.
pub const SCALE_HEALTH_WARNING: &str = "Składka zdrowotna (skala) obliczona wg uproszczonej stawki 9% od dochodu (przychód - koszty - ZUS społ.).";

/// Warning for the linear tax approximation.
pub const LINEAR_HEALTH_WARNING: &str = "Składka zdrowotna (liniowy) obliczona wg uproszczonej stawki 4.9% od dochodu (przychód - koszty - ZUS społ.).";

/// Warning for the lump-sum placeholder.
pub const LUMP_SUM_HEALTH_WARNING: &str = "Składka zdrowotna (ryczałt) jest wartością tymczasową. Wymaga implementacji progów dochodowych.";

/// Warning when the regime is not recognised.
pub const UNKNOWN_REGIME_HEALTH_WARNING: &str =
    "Nieznana forma opodatkowania dla składki zdrowotnej.";

/// Returns the placeholder health contribution used for lump-sum regimes.
pub fn lump_sum_health_placeholder() -> Decimal {
    Decimal::new(3000, 1)
}

/// The health contribution and the warning explaining how it was derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthContributionResult {
    /// The health contribution amount, never negative.
    pub amount: Decimal,
    /// The explanatory warning for the branch taken.
    pub warning: &'static str,
}

/// Calculates the health contribution.
///
/// The income it is based on is `max(0, income − costs − social_total)`.
/// An unrecognized regime does not fail here: it yields zero and a warning.
/// Income tax treats the same value as an error, see
/// [`super::calculate_income_tax`].
///
/// # Example
///
/// ```
/// use b2b_contributions::calculation::calculate_health_contribution;
/// use b2b_contributions::models::TaxRegime;
/// use rust_decimal::Decimal;
///
/// let result = calculate_health_contribution(
///     &TaxRegime::ProgressiveScale,
///     Decimal::new(10000, 0),
///     Decimal::new(2000, 0),
///     Decimal::ZERO,
/// );
/// assert_eq!(result.amount, Decimal::new(72000, 2));
/// ```
pub fn calculate_health_contribution(
    regime: &TaxRegime,
    income: Decimal,
    costs: Decimal,
    social_contributions_total: Decimal,
) -> HealthContributionResult {
    let taxable_for_health = (income - costs - social_contributions_total).max(Decimal::ZERO);

    let (amount, warning) = match regime {
        TaxRegime::ProgressiveScale => (
            round_money(taxable_for_health * Decimal::new(9, 2)),
            SCALE_HEALTH_WARNING,
        ),
        TaxRegime::LinearTax19 => (
            round_money(taxable_for_health * Decimal::new(49, 3)),
            LINEAR_HEALTH_WARNING,
        ),
        TaxRegime::FlatRate15 | TaxRegime::FlatRate12 => {
            (lump_sum_health_placeholder(), LUMP_SUM_HEALTH_WARNING)
        }
        TaxRegime::Unrecognized(_) if regime.is_lump_sum() => {
            (lump_sum_health_placeholder(), LUMP_SUM_HEALTH_WARNING)
        }
        TaxRegime::Unrecognized(_) => (Decimal::ZERO, UNKNOWN_REGIME_HEALTH_WARNING),
    };

    HealthContributionResult {
        amount: amount.max(Decimal::ZERO),
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_linear_uses_4_9_percent_of_income() {
        let result = calculate_health_contribution(
            &TaxRegime::LinearTax19,
            dec!(10000),
            dec!(2000),
            dec!(1704.50),
        );
        // 6295.50 * 0.049 = 308.4795
        assert_eq!(result.amount, dec!(308.48));
        assert_eq!(result.warning, LINEAR_HEALTH_WARNING);
    }

    #[test]
    fn test_scale_uses_9_percent_of_income() {
        let result = calculate_health_contribution(
            &TaxRegime::ProgressiveScale,
            dec!(10000),
            dec!(2000),
            dec!(1704.50),
        );
        // 6295.50 * 0.09 = 566.595
        assert_eq!(result.amount, dec!(566.60));
        assert_eq!(result.warning, SCALE_HEALTH_WARNING);
    }

    #[test]
    fn test_lump_sum_uses_placeholder_regardless_of_income() {
        for regime in [TaxRegime::FlatRate15, TaxRegime::FlatRate12] {
            let result = calculate_health_contribution(&regime, dec!(0), dec!(0), dec!(0));
            assert_eq!(result.amount, dec!(300.0));
            assert_eq!(result.warning, LUMP_SUM_HEALTH_WARNING);
        }
    }

    #[test]
    fn test_unrecognized_lump_sum_variant_gets_placeholder() {
        let regime = TaxRegime::from("ryczalt_8_5");
        let result = calculate_health_contribution(&regime, dec!(10000), dec!(0), dec!(0));
        assert_eq!(result.amount, dec!(300.0));
        assert_eq!(result.warning, LUMP_SUM_HEALTH_WARNING);
    }

    #[test]
    fn test_unrecognized_regime_degrades_to_zero() {
        let regime = TaxRegime::from("karta_podatkowa");
        let result = calculate_health_contribution(&regime, dec!(10000), dec!(0), dec!(0));
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.warning, UNKNOWN_REGIME_HEALTH_WARNING);
    }

    #[test]
    fn test_costs_exceeding_income_clamp_to_zero() {
        let result = calculate_health_contribution(
            &TaxRegime::ProgressiveScale,
            dec!(3000),
            dec!(5000),
            dec!(1582.00),
        );
        assert_eq!(result.amount, Decimal::ZERO);
    }
}
