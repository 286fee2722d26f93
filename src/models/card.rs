// ============================================================================
// CARD - Tarjetas de pago guardadas
// ============================================================================

use serde::Deserialize;
use crate::models::common::{RawId, RawNumber};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCard {
    #[serde(default)]
    pub id: RawId,
    #[serde(default)]
    pub brand: String,
    #[serde(default, alias = "last_four", alias = "lastFour")]
    pub last4: String,
    #[serde(default, alias = "expMonth")]
    pub exp_month: RawNumber,
    #[serde(default, alias = "expYear")]
    pub exp_year: RawNumber,
    #[serde(default, alias = "isDefault", alias = "default")]
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedCard {
    pub id: String,
    pub brand: String,
    pub last4: String,
    pub exp_month: i64,
    pub exp_year: i64,
    pub is_default: bool,
}

impl SavedCard {
    pub fn from_raw(raw: &RawCard) -> SavedCard {
        SavedCard {
            id: raw.id.canonical(),
            brand: raw.brand.trim().to_string(),
            last4: raw.last4.trim().to_string(),
            exp_month: raw.exp_month.as_i64(),
            exp_year: raw.exp_year.as_i64(),
            is_default: raw.is_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_accepts_number_or_string() {
        let nums: RawCard = serde_json::from_str(
            r#"{"id":1,"brand":"Visa","last4":"4242","exp_month":4,"exp_year":2027}"#,
        )
        .unwrap();
        let texts: RawCard = serde_json::from_str(
            r#"{"id":"1","brand":"Visa","lastFour":"4242","expMonth":"4","expYear":"2027"}"#,
        )
        .unwrap();
        assert_eq!(SavedCard::from_raw(&nums), SavedCard::from_raw(&texts));
    }
}
