// ============================================================================
// WISHLIST VIEWMODEL - Wishlist protegida por token
// ============================================================================
// Sin token NO se emite ningún request protegido: el plan corta a
// SignedOut y la vista renderiza el estado de invitado.
// ============================================================================

use crate::models::Product;
use crate::services::ApiClient;

/// Plan de carga de la wishlist, decidido antes de tocar la red
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistPlan {
    /// Sin token: vista de invitado, cero requests
    SignedOut,
    /// Con token: fetch protegido con ese bearer
    Fetch(String),
}

/// Decidir el plan a partir del token presente (función pura)
pub fn plan_wishlist(token: Option<String>) -> WishlistPlan {
    match token {
        Some(t) if !t.is_empty() => WishlistPlan::Fetch(t),
        _ => WishlistPlan::SignedOut,
    }
}

pub struct WishlistViewModel {
    api_client: ApiClient,
}

impl WishlistViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load(&self, token: &str) -> Result<Vec<Product>, String> {
        let raw = self.api_client.fetch_wishlist(token).await?;
        let products: Vec<Product> = raw.iter().map(Product::from_raw).collect();
        log::info!("💝 [WISHLIST] {} productos en la wishlist", products.len());
        Ok(products)
    }

    pub async fn remove(&self, token: &str, product_id: &str) -> Result<(), String> {
        self.api_client.remove_wishlist_item(token, product_id).await
    }
}

impl Default for WishlistViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_token_short_circuits_to_signed_out() {
        assert_eq!(plan_wishlist(None), WishlistPlan::SignedOut);
        assert_eq!(plan_wishlist(Some(String::new())), WishlistPlan::SignedOut);
    }

    #[test]
    fn token_present_plans_a_bearer_fetch() {
        assert_eq!(
            plan_wishlist(Some("tok_123".to_string())),
            WishlistPlan::Fetch("tok_123".to_string())
        );
    }
}
