// ============================================================================
// COMMON - Tipos compartidos de normalización de respuestas
// ============================================================================
// El backend mezcla formas: ids como número o string, precios como número o
// string numérica, listas como array o string JSON-encoded, envelopes
// {success, data} o arrays pelados. Todo el manejo de formas vive aquí:
// cada variante de entrada mapea determinísticamente a un valor de salida.
// ============================================================================

use serde::Deserialize;
use crate::config::CONFIG;

/// Id que puede llegar como número o como string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(i64),
    Text(String),
}

impl Default for RawId {
    fn default() -> Self {
        RawId::Text(String::new())
    }
}

impl RawId {
    /// Forma canónica: siempre string, sin espacios alrededor
    pub fn canonical(&self) -> String {
        match self {
            RawId::Num(n) => n.to_string(),
            RawId::Text(s) => s.trim().to_string(),
        }
    }
}

/// Valor numérico que puede llegar como entero, flotante o string numérica
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for RawNumber {
    fn default() -> Self {
        RawNumber::Int(0)
    }
}

impl RawNumber {
    pub fn as_i64(&self) -> i64 {
        match self {
            RawNumber::Int(n) => *n,
            RawNumber::Float(f) => f.round() as i64,
            RawNumber::Text(s) => s.trim().parse::<f64>().map(|f| f.round() as i64).unwrap_or(0),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            RawNumber::Int(n) => *n as f64,
            RawNumber::Float(f) => *f,
            RawNumber::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }

    /// Importe monetario en unidades decimales → céntimos.
    /// "24.90", 24.9 y 25 mapean a 2490 / 2490 / 2500; no parseable → 0.
    pub fn as_cents(&self) -> i64 {
        match self {
            RawNumber::Int(n) => n * 100,
            RawNumber::Float(f) => (f * 100.0).round() as i64,
            RawNumber::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(|f| (f * 100.0).round() as i64)
                .unwrap_or(0),
        }
    }
}

/// Lista de strings que puede llegar como array o como string JSON-encoded
/// ("[\"a\",\"b\"]"). Parse defensivo: string malformada → lista vacía.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawStringList {
    List(Vec<String>),
    Encoded(String),
}

impl Default for RawStringList {
    fn default() -> Self {
        RawStringList::List(Vec::new())
    }
}

impl RawStringList {
    pub fn items(&self) -> Vec<String> {
        match self {
            RawStringList::List(items) => items.clone(),
            RawStringList::Encoded(json) => serde_json::from_str(json).unwrap_or_default(),
        }
    }
}

/// Envelope de respuesta: algunas colecciones llegan peladas ([...]) y otras
/// envueltas en {success, data}. {success:false} cuenta como fallo.
/// Sin atributos `default` en los campos Option: un `serde(default)` aquí
/// impondría `T: Default` al derive y los campos Option ausentes ya
/// deserializan a None.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped {
        success: bool,
        data: Option<T>,
        error: Option<String>,
    },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Envelope::Bare(data) => Ok(data),
            Envelope::Wrapped { success: true, data: Some(data), .. } => Ok(data),
            Envelope::Wrapped { success: true, data: None, .. } => {
                Err("Respuesta sin campo data".to_string())
            }
            Envelope::Wrapped { success: false, error, .. } => {
                Err(error.unwrap_or_else(|| "Request failed".to_string()))
            }
        }
    }
}

/// Resolver una URL de asset: paths relativos de uploads se prefijan con la
/// base configurada, URLs absolutas pasan tal cual, vacío queda vacío.
pub fn resolve_asset_url(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", CONFIG.asset_base(), path)
    } else {
        format!("{}/{}", CONFIG.asset_base(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_number_and_string_map_to_the_same_canonical_value() {
        let num: RawId = serde_json::from_str("42").unwrap();
        let text: RawId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(num.canonical(), "42");
        assert_eq!(text.canonical(), "42");
        assert_eq!(RawId::default().canonical(), "");
    }

    #[test]
    fn money_number_and_string_map_to_the_same_cents() {
        let float: RawNumber = serde_json::from_str("24.9").unwrap();
        let text: RawNumber = serde_json::from_str("\"24.90\"").unwrap();
        let int: RawNumber = serde_json::from_str("25").unwrap();
        assert_eq!(float.as_cents(), 2490);
        assert_eq!(text.as_cents(), 2490);
        assert_eq!(int.as_cents(), 2500);
    }

    #[test]
    fn non_numeric_money_string_maps_to_zero() {
        assert_eq!(RawNumber::Text("gratis".to_string()).as_cents(), 0);
        assert_eq!(RawNumber::default().as_cents(), 0);
    }

    #[test]
    fn string_list_accepts_array_and_json_encoded_string() {
        let array: RawStringList = serde_json::from_str(r#"["a.jpg","b.jpg"]"#).unwrap();
        let encoded: RawStringList =
            serde_json::from_str(r#""[\"a.jpg\",\"b.jpg\"]""#).unwrap();
        assert_eq!(array.items(), vec!["a.jpg", "b.jpg"]);
        assert_eq!(encoded.items(), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn malformed_encoded_list_maps_to_empty() {
        let broken = RawStringList::Encoded("[not json".to_string());
        assert!(broken.items().is_empty());
        assert!(RawStringList::default().items().is_empty());
    }

    #[test]
    fn bare_and_wrapped_envelopes_unwrap() {
        let bare: Envelope<Vec<i64>> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(bare.into_result().unwrap(), vec![1, 2, 3]);

        let wrapped: Envelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2]}"#).unwrap();
        assert_eq!(wrapped.into_result().unwrap(), vec![1, 2]);
    }

    #[test]
    fn envelope_deserializes_payloads_without_a_default_impl() {
        // El payload no implementa Default: el envelope no debe exigirlo
        #[derive(Debug, PartialEq, Deserialize)]
        struct Payload {
            name: String,
        }

        let wrapped: Envelope<Vec<Payload>> =
            serde_json::from_str(r#"{"success":true,"data":[{"name":"Serum"}]}"#).unwrap();
        assert_eq!(
            wrapped.into_result().unwrap(),
            vec![Payload { name: "Serum".to_string() }]
        );

        // data y error ausentes siguen deserializando (Option → None)
        let no_data: Envelope<Vec<Payload>> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(no_data.into_result().is_err());
    }

    #[test]
    fn failed_envelope_is_an_error() {
        let failed: Envelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":false,"error":"boom"}"#).unwrap();
        assert_eq!(failed.into_result().unwrap_err(), "boom");

        let no_data: Envelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(no_data.into_result().is_err());
    }

    #[test]
    fn relative_upload_paths_get_the_asset_prefix() {
        let resolved = resolve_asset_url("/uploads/serum.jpg");
        assert!(resolved.ends_with("/uploads/serum.jpg"));
        assert!(resolved.starts_with("http"));
    }

    #[test]
    fn absolute_urls_and_empty_paths_pass_through() {
        assert_eq!(
            resolve_asset_url("https://cdn.veluria.shop/a.jpg"),
            "https://cdn.veluria.shop/a.jpg"
        );
        assert_eq!(resolve_asset_url(""), "");
        assert_eq!(resolve_asset_url("   "), "");
    }
}
