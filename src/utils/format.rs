// ============================================================================
// FORMAT - Formateo de precios y fechas para las vistas
// ============================================================================

/// Formatear céntimos como precio visible ("€24.90")
pub fn format_price_cents(cents: i64) -> String {
    let euros = cents / 100;
    let rest = (cents % 100).abs();
    format!("€{}.{:02}", euros, rest)
}

/// Formatear una fecha RFC3339 del backend como fecha legible ("12 March 2026").
/// Si el valor no parsea, se devuelve tal cual (el backend ya manda strings de display
/// en algunos endpoints antiguos); vacío queda vacío.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%-d %B %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Formatear mes/año de expiración de una tarjeta ("04/27")
pub fn format_card_expiry(month: i64, year: i64) -> String {
    let short_year = if year >= 2000 { year - 2000 } else { year };
    format!("{:02}/{:02}", month, short_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formats_with_two_decimals() {
        assert_eq!(format_price_cents(2490), "€24.90");
        assert_eq!(format_price_cents(500), "€5.00");
        assert_eq!(format_price_cents(0), "€0.00");
        assert_eq!(format_price_cents(9), "€0.09");
    }

    #[test]
    fn rfc3339_dates_format_as_display_dates() {
        assert_eq!(format_date("2026-03-12T10:30:00Z"), "12 March 2026");
        assert_eq!(format_date("2025-01-01T00:00:00+02:00"), "1 January 2025");
    }

    #[test]
    fn non_rfc3339_dates_pass_through() {
        assert_eq!(format_date("March 2026"), "March 2026");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn card_expiry_is_zero_padded() {
        assert_eq!(format_card_expiry(4, 2027), "04/27");
        assert_eq!(format_card_expiry(11, 27), "11/27");
    }
}
