// ============================================================================
// CONTENT - Bloques CMS (sustainability, gifting) y gift sets
// ============================================================================

use serde::Deserialize;
use crate::models::common::{RawId, RawStringList};
use crate::models::product::{Product, RawProduct};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContentSection {
    #[serde(default)]
    pub id: RawId,
    #[serde(default, alias = "title")]
    pub heading: String,
    #[serde(default, alias = "text")]
    pub body: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentSection {
    pub id: String,
    pub heading: String,
    pub body: String,
    pub icon: String,
}

impl ContentSection {
    pub fn from_raw(raw: &RawContentSection) -> ContentSection {
        ContentSection {
            id: raw.id.canonical(),
            heading: raw.heading.trim().to_string(),
            body: raw.body.trim().to_string(),
            icon: raw.icon.trim().to_string(),
        }
    }
}

/// Gift set: un producto con la lista de contenidos del cofre
/// (array o string JSON-encoded, como las listas de imágenes)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGiftSet {
    #[serde(flatten)]
    pub product: RawProduct,
    #[serde(default)]
    pub contents: RawStringList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GiftSet {
    pub product: Product,
    pub contents: Vec<String>,
}

impl GiftSet {
    pub fn from_raw(raw: &RawGiftSet) -> GiftSet {
        GiftSet {
            product: Product::from_raw(&raw.product),
            contents: raw.contents.items(),
        }
    }
}

/// Página de gifting: secciones editoriales + gift sets
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGiftingPage {
    #[serde(default)]
    pub sections: Vec<RawContentSection>,
    #[serde(default, alias = "giftSets")]
    pub gift_sets: Vec<RawGiftSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gift_set_contents_parse_from_encoded_string() {
        let raw: RawGiftSet = serde_json::from_str(
            r#"{"id":3,"name":"Ritual Set","price":49,"contents":"[\"Cleanser 100ml\",\"Serum 30ml\"]"}"#,
        )
        .unwrap();
        let set = GiftSet::from_raw(&raw);
        assert_eq!(set.product.name, "Ritual Set");
        assert_eq!(set.product.price_cents, 4900);
        assert_eq!(set.contents, vec!["Cleanser 100ml", "Serum 30ml"]);
    }

    #[test]
    fn section_accepts_title_alias() {
        let raw: RawContentSection =
            serde_json::from_str(r#"{"id":1,"title":"Refill, not landfill","text":"..."}"#)
                .unwrap();
        assert_eq!(ContentSection::from_raw(&raw).heading, "Refill, not landfill");
    }
}
