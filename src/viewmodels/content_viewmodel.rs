// ============================================================================
// CONTENT VIEWMODEL - Blog, tiendas, prensa, gifting, sustainability
// ============================================================================

use crate::models::{BlogPost, ContentSection, GiftSet, PressItem, Store};
use crate::services::ApiClient;

pub struct ContentViewModel {
    api_client: ApiClient,
}

impl ContentViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load_blog_posts(&self) -> Result<Vec<BlogPost>, String> {
        let raw = self.api_client.fetch_blog_posts().await?;
        Ok(raw.iter().map(BlogPost::from_raw).collect())
    }

    pub async fn load_stores(&self) -> Result<Vec<Store>, String> {
        let raw = self.api_client.fetch_stores().await?;
        Ok(raw.iter().map(Store::from_raw).collect())
    }

    pub async fn load_press(&self) -> Result<Vec<PressItem>, String> {
        let raw = self.api_client.fetch_press().await?;
        Ok(raw.iter().map(PressItem::from_raw).collect())
    }

    /// Página de gifting: secciones editoriales + gift sets, un solo endpoint
    pub async fn load_gifting(&self) -> Result<(Vec<ContentSection>, Vec<GiftSet>), String> {
        let raw = self.api_client.fetch_gifting_page().await?;
        let sections = raw.sections.iter().map(ContentSection::from_raw).collect();
        let sets = raw.gift_sets.iter().map(GiftSet::from_raw).collect();
        Ok((sections, sets))
    }

    pub async fn load_sustainability(&self) -> Result<Vec<ContentSection>, String> {
        let raw = self.api_client.fetch_sustainability_sections().await?;
        Ok(raw.iter().map(ContentSection::from_raw).collect())
    }
}

impl Default for ContentViewModel {
    fn default() -> Self {
        Self::new()
    }
}
