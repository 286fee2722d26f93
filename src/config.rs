use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_development: String,
    pub api_base_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Base para prefijar paths relativos de /uploads/... (imágenes del CMS).
    /// Si no se configura, se usa la URL del API.
    pub asset_base: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_development: "http://localhost:4000".to_string(),
            api_base_production: "https://api.veluria.shop".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            asset_base: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_base_development: option_env!("API_BASE")
                .unwrap_or("http://localhost:4000").to_string(),
            api_base_production: option_env!("API_BASE_PRODUCTION")
                .unwrap_or("https://api.veluria.shop").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            asset_base: option_env!("ASSET_BASE").map(|s| s.to_string()),
        }
    }

    /// Obtiene la URL del API según el entorno actual
    pub fn api_base(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_base_production,
            _ => &self.api_base_development,
        }
    }

    /// Base para assets subidos (imágenes). Por defecto, la misma URL del API.
    pub fn asset_base(&self) -> &str {
        match &self.asset_base {
            Some(base) => base,
            None => self.api_base(),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
