//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole grosze (2 decimal places), halves away from zero.
///
/// # Example
///
/// ```
/// use b2b_contributions::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = Decimal::from_str("1196.145").unwrap();
/// assert_eq!(round_money(tax), Decimal::from_str("1196.15").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_money(dec!(0.125)), dec!(0.13));
        assert_eq!(round_money(dec!(308.4795)), dec!(308.48));
        assert_eq!(round_money(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn test_already_rounded_amount_is_unchanged() {
        assert_eq!(round_money(dec!(976.00)), dec!(976.00));
        assert_eq!(round_money(dec!(83.5)), dec!(83.50));
    }
}
