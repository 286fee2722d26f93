// ============================================================================
// ACCOUNT VIEWMODEL - Perfil, stats, pedidos y tarjetas
// ============================================================================
// Los fetches del dashboard (perfil / stats) son independientes: el fallo
// de uno solo afecta a su propia sección.
// ============================================================================

use crate::models::{AccountStats, Order, Profile, SavedCard};
use crate::services::ApiClient;

pub struct AccountViewModel {
    api_client: ApiClient,
}

impl AccountViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load_profile(&self, token: &str) -> Result<Profile, String> {
        let raw = self.api_client.fetch_profile(token).await?;
        Ok(Profile::from_raw(&raw))
    }

    /// Stats de cuenta. Campos ausentes en la respuesta mapean a 0; el
    /// fallback de fallo de red (stats a cero) lo decide la vista.
    pub async fn load_stats(&self, token: &str) -> Result<AccountStats, String> {
        let raw = self.api_client.fetch_account_stats(token).await?;
        Ok(AccountStats::from_raw(&raw))
    }

    pub async fn load_orders(&self, token: &str) -> Result<Vec<Order>, String> {
        let raw = self.api_client.fetch_orders(token).await?;
        let orders: Vec<Order> = raw.iter().map(Order::from_raw).collect();
        log::info!("📦 [ACCOUNT] {} pedidos cargados", orders.len());
        Ok(orders)
    }

    pub async fn load_cards(&self, token: &str) -> Result<Vec<SavedCard>, String> {
        let raw = self.api_client.fetch_saved_cards(token).await?;
        Ok(raw.iter().map(SavedCard::from_raw).collect())
    }
}

impl Default for AccountViewModel {
    fn default() -> Self {
        Self::new()
    }
}
