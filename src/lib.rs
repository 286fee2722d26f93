// ============================================================================
// VELURIA STOREFRONT - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod config;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;
use crate::app::App;
use std::cell::RefCell;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging (desactivable via ENABLE_LOGGING)
    if crate::config::CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Veluria Storefront - Rust Puro + MVVM");
    log::info!("🔧 API base: {}", crate::config::CONFIG.api_base());

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listeners globales. Solo se registran UNA VEZ en init(), por lo que
    // es seguro hacer forget() sin riesgo de acumulación.
    register_window_listener("hashchange", |_| {
        log::info!("🔄 [MAIN] hashchange, re-renderizando app...");
        rerender_app();
    })?;
    register_window_listener("authChanged", |_| {
        log::info!("🔄 [MAIN] Evento authChanged recibido, re-renderizando app...");
        rerender_app();
    })?;

    Ok(())
}

fn register_window_listener<F>(event: &str, handler: F) -> Result<(), JsValue>
where
    F: Fn(web_sys::Event) + 'static,
{
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(handler) as Box<dyn Fn(web_sys::Event)>
    );
    win.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Re-renderizar la app (re-render completo)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [MAIN] Error re-renderizando app: {:?}", e);
            }
        }
    });
}
