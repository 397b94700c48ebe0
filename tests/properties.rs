//! Property-based tests for the contribution calculator.
//!
//! Amounts are generated in whole grosze so every input is an exact
//! two-decimal figure.

use proptest::prelude::*;
use rust_decimal::Decimal;

use b2b_contributions::calculation::{calculate, round_money};
use b2b_contributions::error::EngineError;
use b2b_contributions::models::{CalculationInput, ReferenceData, TaxRegime};

fn grosze(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

fn regime_strategy() -> impl Strategy<Value = TaxRegime> {
    prop_oneof![
        Just(TaxRegime::FlatRate15),
        Just(TaxRegime::FlatRate12),
        Just(TaxRegime::LinearTax19),
        Just(TaxRegime::ProgressiveScale),
    ]
}

fn reference_strategy() -> impl Strategy<Value = ReferenceData> {
    prop_oneof![
        (500_000i64..1_500_000).prop_map(|avg| ReferenceData::fetched(2025, grosze(avg))),
        Just(ReferenceData::unavailable(2025, "connection refused".to_string())),
    ]
}

prop_compose! {
    fn input_strategy()(
        income in 0i64..10_000_000,
        costs in 0i64..5_000_000,
        regime in regime_strategy(),
        vat in prop_oneof![Just(0i64), Just(5), Just(8), Just(23)],
        has_discount in any::<bool>(),
        pays_sickness in any::<bool>(),
    ) -> CalculationInput {
        CalculationInput {
            income: grosze(income),
            costs: grosze(costs),
            regime,
            vat_rate_percent: Decimal::from(vat),
            has_discount,
            pays_sickness_contribution: pays_sickness,
        }
    }
}

proptest! {
    #[test]
    fn test_total_burden_is_sum_of_components(
        input in input_strategy(),
        reference in reference_strategy(),
    ) {
        let result = calculate(&input, &reference).unwrap();

        // The discounted tax may carry a third decimal; only the total is rounded.
        prop_assert_eq!(
            result.total_burden,
            round_money(
                result.social_contributions_total + result.health_contribution + result.income_tax
            )
        );
    }

    #[test]
    fn test_net_income_excludes_vat(
        input in input_strategy(),
        reference in reference_strategy(),
    ) {
        let result = calculate(&input, &reference).unwrap();

        prop_assert_eq!(result.net_income, input.income - input.costs - result.total_burden);
    }

    #[test]
    fn test_social_total_matches_line_items(
        input in input_strategy(),
        reference in reference_strategy(),
    ) {
        let result = calculate(&input, &reference).unwrap();
        let sum: Decimal = result.line_items.iter().map(|item| item.amount).sum();

        prop_assert_eq!(result.social_contributions_total, sum);
        let expected_rows = match (reference.contribution_base(), input.pays_sickness_contribution) {
            (None, _) => 0,
            (Some(_), true) => 5,
            (Some(_), false) => 4,
        };
        prop_assert_eq!(result.line_items.len(), expected_rows);
    }

    #[test]
    fn test_amounts_are_never_negative(
        input in input_strategy(),
        reference in reference_strategy(),
    ) {
        let result = calculate(&input, &reference).unwrap();

        prop_assert!(result.health_contribution >= Decimal::ZERO);
        prop_assert!(result.income_tax >= Decimal::ZERO);
        prop_assert!(result.vat_amount >= Decimal::ZERO);
    }

    #[test]
    fn test_reference_fields_are_reported_unchanged(
        input in input_strategy(),
        reference in reference_strategy(),
    ) {
        let result = calculate(&input, &reference).unwrap();

        prop_assert_eq!(result.data_year, reference.year());
        prop_assert_eq!(result.contribution_base_used, reference.contribution_base());
        prop_assert_eq!(result.data_error.as_deref(), reference.error_message());
    }

    #[test]
    fn test_negative_income_is_always_rejected(
        income in -10_000_000i64..0,
        regime in regime_strategy(),
        reference in reference_strategy(),
    ) {
        let input = CalculationInput::new(grosze(income), regime);

        let result = calculate(&input, &reference);

        prop_assert!(
            matches!(result, Err(EngineError::InvalidInput { ref field, .. }) if field == "income"),
            "expected InvalidInput error for field income, got {:?}",
            result
        );
    }

    #[test]
    fn test_negative_costs_are_always_rejected(
        income in 0i64..10_000_000,
        costs in -5_000_000i64..0,
        regime in regime_strategy(),
    ) {
        let mut input = CalculationInput::new(grosze(income), regime);
        input.costs = grosze(costs);

        let result = calculate(&input, &ReferenceData::fetched(2025, grosze(867_300)));

        prop_assert!(
            matches!(result, Err(EngineError::InvalidInput { ref field, .. }) if field == "costs"),
            "expected InvalidInput error for field costs, got {:?}",
            result
        );
    }
}
