//! Request types for the calculator API.
//!
//! This module defines the JSON body of `POST /oblicz` and the query string of
//! `GET /aktualne_dane_zus`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, TaxRegime};

/// Request body for the `/oblicz` endpoint.
///
/// Only `income` and `forma_opodatkowania` are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly revenue in PLN.
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    /// Monthly costs in PLN.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub costs: Decimal,
    /// Taxation form: `ryczalt_15`, `ryczalt_12`, `liniowy_19` or `skala`.
    pub forma_opodatkowania: TaxRegime,
    /// VAT rate in percent.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub stawka_vat: Decimal,
    /// Whether the 50% income tax discount applies.
    #[serde(default)]
    pub has_tax_discount: bool,
    /// Whether the voluntary sickness contribution is paid.
    #[serde(default = "default_pays_sickness")]
    pub platnik_chorobowe: bool,
}

fn default_pays_sickness() -> bool {
    true
}

impl From<CalculationRequest> for CalculationInput {
    fn from(req: CalculationRequest) -> Self {
        CalculationInput {
            income: req.income,
            costs: req.costs,
            regime: req.forma_opodatkowania,
            vat_rate_percent: req.stawka_vat,
            has_discount: req.has_tax_discount,
            pays_sickness_contribution: req.platnik_chorobowe,
        }
    }
}

/// Query string for the `/aktualne_dane_zus` endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReferenceDataQuery {
    /// Ignore the cache and fetch the page again.
    #[serde(default)]
    pub force_refresh: bool,
}
