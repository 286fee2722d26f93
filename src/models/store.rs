// ============================================================================
// STORE - Tiendas físicas (store locator)
// ============================================================================

use serde::Deserialize;
use crate::models::common::{RawId, RawNumber, RawStringList};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStore {
    #[serde(default)]
    pub id: RawId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: String,
    /// Horarios: array de strings o string JSON-encoded
    #[serde(default, alias = "openingHours", alias = "opening_hours")]
    pub hours: RawStringList,
    #[serde(default, alias = "latitude")]
    pub lat: RawNumber,
    #[serde(default, alias = "longitude")]
    pub lng: RawNumber,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub hours: Vec<String>,
    pub lat: f64,
    pub lng: f64,
}

impl Store {
    pub fn from_raw(raw: &RawStore) -> Store {
        Store {
            id: raw.id.canonical(),
            name: raw.name.trim().to_string(),
            address: raw.address.trim().to_string(),
            city: raw.city.trim().to_string(),
            phone: raw.phone.trim().to_string(),
            hours: raw.hours.items(),
            lat: raw.lat.as_f64(),
            lng: raw.lng.as_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_parse_from_json_encoded_string_with_fallback_to_empty() {
        let raw: RawStore = serde_json::from_str(
            r#"{"id":1,"name":"Veluria Le Marais","hours":"[\"Mon–Fri 10–19\",\"Sat 10–20\"]"}"#,
        )
        .unwrap();
        assert_eq!(
            Store::from_raw(&raw).hours,
            vec!["Mon–Fri 10–19", "Sat 10–20"]
        );

        let broken: RawStore =
            serde_json::from_str(r#"{"id":2,"name":"X","hours":"not json"}"#).unwrap();
        assert!(Store::from_raw(&broken).hours.is_empty());
    }

    #[test]
    fn coordinates_accept_number_or_string() {
        let raw: RawStore = serde_json::from_str(
            r#"{"id":1,"name":"Y","latitude":"48.86","longitude":2.35}"#,
        )
        .unwrap();
        let store = Store::from_raw(&raw);
        assert!((store.lat - 48.86).abs() < 1e-9);
        assert!((store.lng - 2.35).abs() < 1e-9);
    }
}
