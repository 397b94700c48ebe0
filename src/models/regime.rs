//! Tax regime selection.
//!
//! This module defines the [`TaxRegime`] enum used to pick the health
//! contribution and income tax rules for a calculation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The taxation form chosen by the self-employed person.
///
/// Wire values are `ryczalt_15`, `ryczalt_12`, `liniowy_19` and `skala`.
/// Any other string is kept as [`TaxRegime::Unrecognized`] so that each
/// calculation stage can decide for itself how to treat it.
///
/// # Example
///
/// ```
/// use b2b_contributions::models::TaxRegime;
///
/// assert_eq!(TaxRegime::from("liniowy_19"), TaxRegime::LinearTax19);
/// assert_eq!(
///     TaxRegime::from("karta"),
///     TaxRegime::Unrecognized("karta".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaxRegime {
    /// Lump-sum tax on revenue at 15%.
    FlatRate15,
    /// Lump-sum tax on revenue at 12%.
    FlatRate12,
    /// Flat 19% tax on income.
    LinearTax19,
    /// Progressive tax scale (12% / 32%).
    ProgressiveScale,
    /// A regime string that none of the rules recognise.
    Unrecognized(String),
}

impl TaxRegime {
    /// Returns the wire name of this regime.
    pub fn as_str(&self) -> &str {
        match self {
            TaxRegime::FlatRate15 => "ryczalt_15",
            TaxRegime::FlatRate12 => "ryczalt_12",
            TaxRegime::LinearTax19 => "liniowy_19",
            TaxRegime::ProgressiveScale => "skala",
            TaxRegime::Unrecognized(value) => value,
        }
    }

    /// Returns true for any lump-sum ("ryczalt") selection, including
    /// unrecognized values carrying the `ryczalt` prefix.
    pub fn is_lump_sum(&self) -> bool {
        match self {
            TaxRegime::FlatRate15 | TaxRegime::FlatRate12 => true,
            TaxRegime::LinearTax19 | TaxRegime::ProgressiveScale => false,
            TaxRegime::Unrecognized(value) => value.starts_with("ryczalt"),
        }
    }
}

impl From<&str> for TaxRegime {
    fn from(value: &str) -> Self {
        match value {
            "ryczalt_15" => TaxRegime::FlatRate15,
            "ryczalt_12" => TaxRegime::FlatRate12,
            "liniowy_19" => TaxRegime::LinearTax19,
            "skala" => TaxRegime::ProgressiveScale,
            other => TaxRegime::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for TaxRegime {
    fn from(value: String) -> Self {
        TaxRegime::from(value.as_str())
    }
}

impl From<TaxRegime> for String {
    fn from(regime: TaxRegime) -> Self {
        regime.as_str().to_string()
    }
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_wire_values_parse() {
        assert_eq!(TaxRegime::from("ryczalt_15"), TaxRegime::FlatRate15);
        assert_eq!(TaxRegime::from("ryczalt_12"), TaxRegime::FlatRate12);
        assert_eq!(TaxRegime::from("liniowy_19"), TaxRegime::LinearTax19);
        assert_eq!(TaxRegime::from("skala"), TaxRegime::ProgressiveScale);
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let regime = TaxRegime::from("Skala");
        assert_eq!(regime, TaxRegime::Unrecognized("Skala".to_string()));
        assert_eq!(regime.as_str(), "Skala");
    }

    #[test]
    fn test_lump_sum_prefix_covers_unrecognized_variants() {
        assert!(TaxRegime::FlatRate12.is_lump_sum());
        assert!(TaxRegime::from("ryczalt_8_5").is_lump_sum());
        assert!(!TaxRegime::LinearTax19.is_lump_sum());
        assert!(!TaxRegime::from("karta").is_lump_sum());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let regime: TaxRegime = serde_json::from_str("\"skala\"").unwrap();
        assert_eq!(regime, TaxRegime::ProgressiveScale);
        assert_eq!(
            serde_json::to_string(&TaxRegime::FlatRate15).unwrap(),
            "\"ryczalt_15\""
        );
    }
}
