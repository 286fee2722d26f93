// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP y desenvuelve
// el envelope {success, data} cuando el backend lo usa.
// ============================================================================

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use crate::models::{
    Envelope, RawAccountStats, RawBlogPost, RawCard, RawGiftingPage, RawOrder, RawPressItem,
    RawProduct, RawProfile, RawQuizQuestion, RawStore,
};
use crate::utils::constants::API_BASE;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE.to_string(),
        }
    }

    /// GET genérico: acepta array pelado o envelope {success, data}
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        let envelope = response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        envelope.into_result()
    }

    /// GET con token bearer (endpoints protegidos de cuenta)
    async fn get_json_auth<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        let envelope = response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        envelope.into_result()
    }

    // ------------------------------------------------------------------
    // Catálogo y contenido (público)
    // ------------------------------------------------------------------

    /// Colección curada de best sellers
    pub async fn fetch_best_sellers(&self) -> Result<Vec<RawProduct>, String> {
        log::info!("🛍️ Obteniendo best sellers...");
        self.get_json("/v1/collections/best-sellers").await
    }

    /// Posts del journal
    pub async fn fetch_blog_posts(&self) -> Result<Vec<RawBlogPost>, String> {
        self.get_json("/v1/blog/posts").await
    }

    /// Tiendas físicas
    pub async fn fetch_stores(&self) -> Result<Vec<RawStore>, String> {
        self.get_json("/v1/stores").await
    }

    /// Menciones de prensa
    pub async fn fetch_press(&self) -> Result<Vec<RawPressItem>, String> {
        self.get_json("/v1/press").await
    }

    /// Página de gifting (secciones + gift sets)
    pub async fn fetch_gifting_page(&self) -> Result<RawGiftingPage, String> {
        self.get_json("/v1/pages/gifting").await
    }

    /// Secciones de la página de sustainability
    pub async fn fetch_sustainability_sections(&self) -> Result<Vec<crate::models::RawContentSection>, String> {
        self.get_json("/v1/pages/sustainability").await
    }

    // ------------------------------------------------------------------
    // Quiz
    // ------------------------------------------------------------------

    /// Preguntas del skin quiz
    pub async fn fetch_quiz_questions(&self) -> Result<Vec<RawQuizQuestion>, String> {
        self.get_json("/v1/quiz/skin").await
    }

    /// Enviar respuestas del quiz; el backend devuelve productos recomendados
    pub async fn submit_quiz_answers(
        &self,
        answers: &[String],
    ) -> Result<QuizResultResponse, String> {
        let url = format!("{}/v1/quiz/skin/answers", self.base_url);
        let request = QuizAnswersRequest {
            answers: answers.to_vec(),
            submitted_at: chrono::Utc::now().to_rfc3339(),
        };

        log::info!("🧪 Enviando respuestas del quiz ({} respuestas)", answers.len());

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<QuizResultResponse>().await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    // ------------------------------------------------------------------
    // Cuenta (bearer token)
    // ------------------------------------------------------------------

    pub async fn fetch_profile(&self, token: &str) -> Result<RawProfile, String> {
        self.get_json_auth("/v1/account/profile", token).await
    }

    pub async fn fetch_account_stats(&self, token: &str) -> Result<RawAccountStats, String> {
        self.get_json_auth("/v1/account/stats", token).await
    }

    pub async fn fetch_orders(&self, token: &str) -> Result<Vec<RawOrder>, String> {
        self.get_json_auth("/v1/orders", token).await
    }

    pub async fn fetch_saved_cards(&self, token: &str) -> Result<Vec<RawCard>, String> {
        self.get_json_auth("/v1/account/cards", token).await
    }

    pub async fn fetch_wishlist(&self, token: &str) -> Result<Vec<RawProduct>, String> {
        self.get_json_auth("/v1/wishlist", token).await
    }

    /// Quitar un producto de la wishlist
    pub async fn remove_wishlist_item(&self, token: &str, product_id: &str) -> Result<(), String> {
        let url = format!("{}/v1/wishlist/{}", self.base_url, product_id);

        log::info!("💔 Quitando producto {} de la wishlist", product_id);

        let response = Request::delete(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Login: devuelve el token bearer
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, String> {
        let url = format!("{}/v1/auth/login", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Login para: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<LoginResponse>().await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(serde::Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub error: Option<String>,
}

#[derive(serde::Serialize)]
struct QuizAnswersRequest {
    answers: Vec<String>,
    submitted_at: String,
}

#[derive(serde::Deserialize)]
pub struct QuizResultResponse {
    pub success: bool,
    #[serde(default)]
    pub recommended: Vec<RawProduct>,
    #[serde(default, alias = "skinTag")]
    pub skin_tag: Option<String>,
}
