//! Calculation result models.
//!
//! This module contains the [`CalculationResult`] type and the
//! [`ContributionLineItem`] rows it carries. Field names on the wire are the
//! Polish names the calculator frontend consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One social contribution category in a calculation.
///
/// # Example
///
/// ```
/// use b2b_contributions::models::ContributionLineItem;
/// use rust_decimal::Decimal;
///
/// let item = ContributionLineItem {
///     name: "Rentowe".to_string(),
///     rate_percent: Decimal::new(800, 2),
///     base: Decimal::new(5000, 0),
///     amount: Decimal::new(40000, 2),
/// };
/// let json = serde_json::to_value(&item).unwrap();
/// assert_eq!(json["nazwa"], "Rentowe");
/// assert_eq!(json["kwota"], 400.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLineItem {
    /// The contribution name (e.g. "Emerytalne").
    #[serde(rename = "nazwa")]
    pub name: String,
    /// The contribution rate as a percentage.
    #[serde(rename = "procent", with = "rust_decimal::serde::float")]
    pub rate_percent: Decimal,
    /// The base the rate was applied to.
    #[serde(rename = "podstawa", with = "rust_decimal::serde::float")]
    pub base: Decimal,
    /// The contribution amount, rounded to 2 decimals.
    #[serde(rename = "kwota", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// The full breakdown returned for one calculation request.
///
/// `total_burden` is social contributions plus health contribution plus
/// income tax; VAT is reported but excluded from both the burden and the net
/// income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The year of the reference data used.
    #[serde(rename = "rok_danych_zus")]
    pub data_year: i32,
    /// The contribution base from the reference data, absent when the fetch
    /// failed even though zero was used internally.
    #[serde(
        rename = "podstawa_wymiaru_skladek_zus",
        with = "rust_decimal::serde::float_option"
    )]
    pub contribution_base_used: Option<Decimal>,
    /// Social contribution rows in calculation order.
    #[serde(rename = "zus_spoleczne_details")]
    pub line_items: Vec<ContributionLineItem>,
    /// Sum of the social contribution rows.
    #[serde(rename = "zus_spoleczne_total", with = "rust_decimal::serde::float")]
    pub social_contributions_total: Decimal,
    /// The health contribution.
    #[serde(rename = "skladka_zdrowotna", with = "rust_decimal::serde::float")]
    pub health_contribution: Decimal,
    /// The personal income tax.
    #[serde(rename = "podatek_pit", with = "rust_decimal::serde::float")]
    pub income_tax: Decimal,
    /// VAT due on the income.
    #[serde(rename = "vat", with = "rust_decimal::serde::float")]
    pub vat_amount: Decimal,
    /// Social + health + income tax.
    #[serde(rename = "calkowite_obciazenie", with = "rust_decimal::serde::float")]
    pub total_burden: Decimal,
    /// Income minus costs minus the total burden.
    #[serde(rename = "dochod_netto", with = "rust_decimal::serde::float")]
    pub net_income: Decimal,
    /// Advisory messages in the order they were generated.
    #[serde(rename = "ostrzezenia", default)]
    pub warnings: Vec<String>,
    /// The reference data error message, passed through unchanged.
    #[serde(rename = "blad_danych_zus", default)]
    pub data_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_result() -> CalculationResult {
        CalculationResult {
            data_year: 2025,
            contribution_base_used: None,
            line_items: vec![],
            social_contributions_total: dec!(0),
            health_contribution: dec!(300.0),
            income_tax: dec!(1455.00),
            vat_amount: dec!(2300.00),
            total_burden: dec!(1755.00),
            net_income: dec!(8245.00),
            warnings: vec!["ostrzezenie".to_string()],
            data_error: Some("brak danych".to_string()),
        }
    }

    #[test]
    fn test_result_uses_polish_field_names() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(json["rok_danych_zus"], 2025);
        assert!(json["podstawa_wymiaru_skladek_zus"].is_null());
        assert_eq!(json["zus_spoleczne_total"], 0.0);
        assert_eq!(json["skladka_zdrowotna"], 300.0);
        assert_eq!(json["podatek_pit"], 1455.0);
        assert_eq!(json["vat"], 2300.0);
        assert_eq!(json["calkowite_obciazenie"], 1755.0);
        assert_eq!(json["dochod_netto"], 8245.0);
        assert_eq!(json["ostrzezenia"][0], "ostrzezenie");
        assert_eq!(json["blad_danych_zus"], "brak danych");
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.data_year, 2025);
        assert_eq!(parsed.income_tax, dec!(1455));
        assert_eq!(parsed.data_error.as_deref(), Some("brak danych"));
    }
}
