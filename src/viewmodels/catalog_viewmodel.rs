// ============================================================================
// CATALOG VIEWMODEL - Best sellers
// ============================================================================
// Fetch + normalización + orden de display. Sin acceso al DOM. La carga
// alimenta el tri-estado `products`; la vista deriva su render de ahí.
// ============================================================================

use crate::models::{sort_best_sellers, Product};
use crate::services::ApiClient;
use crate::state::PageState;

const LOAD_ERROR: &str = "We couldn't load our best sellers right now. Please try again later.";

pub struct CatalogViewModel {
    api_client: ApiClient,
    pub products: PageState<Vec<Product>>,
}

impl CatalogViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
            products: PageState::new(),
        }
    }

    /// Cargar best sellers normalizados y ordenados (order_index asc, id asc)
    pub async fn load_best_sellers(&self) -> Result<Vec<Product>, String> {
        match self.api_client.fetch_best_sellers().await {
            Ok(raw) => {
                let mut products: Vec<Product> = raw.iter().map(Product::from_raw).collect();
                sort_best_sellers(&mut products);
                log::info!("✅ [CATALOG] {} best sellers cargados", products.len());
                self.products.resolve(products.clone());
                Ok(products)
            }
            Err(e) => {
                self.products.fail(LOAD_ERROR);
                Err(e)
            }
        }
    }
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}
