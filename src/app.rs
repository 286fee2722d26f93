// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::views::render_app;

/// Aplicación principal: posee el estado global y el nodo raíz
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Cambios de estado UI (toggle de nav) re-renderizan en el próximo
        // tick. El flag colapsa ráfagas de notificaciones en un solo render.
        let pending = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if pending.get() {
                return;
            }
            pending.set(true);
            let pending = pending.clone();
            Timeout::new(0, move || {
                pending.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Render completo: sincroniza ruta, limpia el root y monta el shell
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.state.sync_route_from_hash();
        self.state.auth.reload();

        set_inner_html(&self.root, "");
        let shell = render_app(&self.state)?;
        append_child(&self.root, &shell)?;

        log::info!("✅ [APP] Render: {:?}", self.state.get_route());
        Ok(())
    }
}
