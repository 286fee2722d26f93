// ============================================================================
// PRESS - Menciones de prensa
// ============================================================================

use serde::Deserialize;
use crate::models::common::{resolve_asset_url, RawId};
use crate::utils::format::format_date;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPressItem {
    #[serde(default)]
    pub id: RawId,
    #[serde(default, alias = "source")]
    pub outlet: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default, alias = "logoUrl", alias = "logo")]
    pub logo_url: String,
    #[serde(default, alias = "publishedAt")]
    pub published_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PressItem {
    pub id: String,
    pub outlet: String,
    pub quote: String,
    pub logo_url: String,
    pub published_at: String,
}

impl PressItem {
    pub fn from_raw(raw: &RawPressItem) -> PressItem {
        PressItem {
            id: raw.id.canonical(),
            outlet: raw.outlet.trim().to_string(),
            quote: raw.quote.trim().to_string(),
            logo_url: resolve_asset_url(&raw.logo_url),
            published_at: format_date(&raw.published_at),
        }
    }
}
