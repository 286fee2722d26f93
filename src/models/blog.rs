// ============================================================================
// BLOG - Posts del journal
// ============================================================================

use serde::Deserialize;
use crate::models::common::{resolve_asset_url, RawId};
use crate::utils::format::format_date;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBlogPost {
    #[serde(default)]
    pub id: RawId,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "summary")]
    pub excerpt: String,
    #[serde(default, alias = "coverImage", alias = "cover_image", alias = "image")]
    pub cover_url: String,
    #[serde(default, alias = "publishedAt", alias = "date")]
    pub published_at: String,
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub cover_url: String,
    pub published_at: String,
    pub author: String,
}

impl BlogPost {
    pub fn from_raw(raw: &RawBlogPost) -> BlogPost {
        BlogPost {
            id: raw.id.canonical(),
            title: raw.title.trim().to_string(),
            excerpt: raw.excerpt.trim().to_string(),
            cover_url: resolve_asset_url(&raw.cover_url),
            published_at: format_date(&raw.published_at),
            author: raw.author.trim().to_string(),
        }
    }
}
