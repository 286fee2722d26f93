/// URL base del backend REST
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:4000 (por defecto)
/// - Producción: via API_BASE env var (ver build.rs / .env)
pub const API_BASE: &str = match option_env!("API_BASE") {
    Some(url) => url,
    None => "http://localhost:4000",
};

/// Clave de localStorage para el token de autenticación
pub const AUTH_TOKEN_KEY: &str = "veluria_auth_token";

/// Clave de localStorage para el email del cliente logueado
pub const AUTH_EMAIL_KEY: &str = "veluria_auth_email";

/// Clave de localStorage para el último perfil de piel calculado por el quiz
pub const SKIN_TAG_KEY: &str = "veluria_skin_tag";
