// ============================================================================
// QUIZ VIEWMODEL - Skin quiz: carga, scoring local y envío best-effort
// ============================================================================
// Las respuestas se puntúan localmente por mayoría de tags y se envían al
// backend. Si el POST responde, las recomendaciones vienen de ahí; si
// falla, se recomiendan localmente los best sellers que matchean el tag
// (UI optimista: el resultado nunca depende de la red).
// ============================================================================

use crate::models::{dominant_tag, Product, QuizQuestion};
use crate::services::ApiClient;

/// Resultado del quiz listo para render
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub skin_tag: Option<String>,
    pub recommended: Vec<Product>,
}

pub struct QuizViewModel {
    api_client: ApiClient,
}

impl QuizViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load_questions(&self) -> Result<Vec<QuizQuestion>, String> {
        let raw = self.api_client.fetch_quiz_questions().await?;
        Ok(raw.iter().map(QuizQuestion::from_raw).collect())
    }

    /// Enviar respuestas y resolver el resultado. `local_products` son los
    /// best sellers ya cargados, usados como fallback de recomendación.
    pub async fn submit(&self, answers: &[String], local_products: &[Product]) -> QuizResult {
        let local_tag = dominant_tag(answers);

        match self.api_client.submit_quiz_answers(answers).await {
            Ok(response) if response.success => {
                let recommended: Vec<Product> =
                    response.recommended.iter().map(Product::from_raw).collect();
                if recommended.is_empty() {
                    // Backend sin recomendaciones: usar el match local
                    QuizResult {
                        skin_tag: response.skin_tag.or(local_tag.clone()),
                        recommended: recommend_local(local_products, local_tag.as_deref()),
                    }
                } else {
                    QuizResult {
                        skin_tag: response.skin_tag.or(local_tag),
                        recommended,
                    }
                }
            }
            Ok(_) | Err(_) => {
                log::warn!("⚠️ [QUIZ] Envío de respuestas falló, usando match local");
                QuizResult {
                    skin_tag: local_tag.clone(),
                    recommended: recommend_local(local_products, local_tag.as_deref()),
                }
            }
        }
    }
}

impl Default for QuizViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Recomendación local: productos cuyo tag coincide con el perfil; sin tag
/// o sin matches, los primeros productos tal cual (función pura)
pub fn recommend_local(products: &[Product], tag: Option<&str>) -> Vec<Product> {
    const MAX_RECOMMENDED: usize = 4;

    if let Some(tag) = tag {
        let matched: Vec<Product> = products
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .take(MAX_RECOMMENDED)
            .cloned()
            .collect();
        if !matched.is_empty() {
            return matched;
        }
    }
    products.iter().take(MAX_RECOMMENDED).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, tags: &[&str]) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            tagline: String::new(),
            price_cents: 1000,
            compare_at_cents: 0,
            image_url: String::new(),
            order_index: 0,
            in_stock: true,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn local_recommendation_filters_by_tag() {
        let products = vec![
            product("a", &["hydration"]),
            product("b", &["balancing"]),
            product("c", &["hydration", "calming"]),
        ];
        let recommended = recommend_local(&products, Some("hydration"));
        let ids: Vec<&str> = recommended.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn no_tag_matches_fall_back_to_leading_products() {
        let products = vec![product("a", &["hydration"]), product("b", &["balancing"])];
        let recommended = recommend_local(&products, Some("firming"));
        assert_eq!(recommended.len(), 2);
        let untagged = recommend_local(&products, None);
        assert_eq!(untagged.len(), 2);
    }

    #[test]
    fn recommendation_is_capped() {
        let products: Vec<Product> = (0..8)
            .map(|i| product(&format!("p{}", i), &["hydration"]))
            .collect();
        assert_eq!(recommend_local(&products, Some("hydration")).len(), 4);
    }
}
