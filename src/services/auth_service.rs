// ============================================================================
// AUTH SERVICE - Token bearer en localStorage
// ============================================================================
// El token vive en localStorage bajo veluria_auth_token. Las páginas
// protegidas lo leen antes de hacer requests; sin token, la wishlist
// corta a la vista de signed-out sin tocar la red.
// ============================================================================

use wasm_bindgen::JsValue;
use crate::services::api_client::ApiClient;
use crate::utils::constants::{AUTH_EMAIL_KEY, AUTH_TOKEN_KEY};
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Leer el token guardado (None = no autenticado)
pub fn get_token() -> Option<String> {
    load_from_storage(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Leer el email del cliente logueado
pub fn get_email() -> Option<String> {
    load_from_storage(AUTH_EMAIL_KEY).filter(|e| !e.is_empty())
}

/// Login contra el backend; si tiene éxito guarda el token y notifica
/// a la app via el evento global "authChanged".
pub async fn login(email: &str, password: &str) -> Result<(), String> {
    let api = ApiClient::new();
    let response = api.login(email, password).await?;

    if !response.success {
        return Err(response.error.unwrap_or_else(|| "Sign in failed".to_string()));
    }

    let token = match response.token {
        Some(t) if !t.is_empty() => t,
        _ => return Err("No se recibió token en la respuesta".to_string()),
    };

    save_to_storage(AUTH_TOKEN_KEY, &token)?;
    save_to_storage(AUTH_EMAIL_KEY, email)?;
    log::info!("✅ [AUTH] Login exitoso, token guardado");

    dispatch_auth_changed();
    Ok(())
}

/// Logout: limpiar token local y notificar. No hay endpoint de logout,
/// el token simplemente se descarta.
pub fn logout() {
    if let Err(e) = remove_from_storage(AUTH_TOKEN_KEY) {
        log::warn!("⚠️ [AUTH] Error limpiando token: {}", e);
    }
    let _ = remove_from_storage(AUTH_EMAIL_KEY);
    log::info!("👋 [AUTH] Logout, token descartado");
    dispatch_auth_changed();
}

/// Disparar el evento global que re-renderiza la app.
/// Este evento solo lo escucha el listener registrado una vez en init().
fn dispatch_auth_changed() {
    if let Some(window) = web_sys::window() {
        if let Ok(event) = web_sys::Event::new("authChanged") {
            if window.dispatch_event(&event).is_err() {
                web_sys::console::warn_1(&JsValue::from_str(
                    "⚠️ [AUTH] No se pudo despachar authChanged",
                ));
            }
        }
    }
}
