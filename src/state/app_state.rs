// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::AuthState;
use crate::utils::routing::{current_route, Route};
use crate::utils::storage::{load_from_storage, save_to_storage};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,

    /// Ruta activa (derivada del hash en cada render)
    pub route: Rc<RefCell<Route>>,

    // UI State
    pub nav_open: Rc<RefCell<bool>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            route: Rc::new(RefCell::new(current_route())),
            nav_open: Rc::new(RefCell::new(false)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Sincronizar la ruta con window.location.hash (tras hashchange)
    pub fn sync_route_from_hash(&self) {
        let route = current_route();
        *self.route.borrow_mut() = route;
        // Navegar cierra el menú móvil
        *self.nav_open.borrow_mut() = false;
    }

    pub fn get_route(&self) -> Route {
        *self.route.borrow()
    }

    /// Suscribirse a cambios de estado crítico
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }

    /// Toggle del menú de navegación móvil
    pub fn toggle_nav(&self) {
        let open = !*self.nav_open.borrow();
        *self.nav_open.borrow_mut() = open;
        self.notify_subscribers();
    }

    /// Guardar preferencia string en localStorage (p.ej. el tag del quiz)
    pub fn save_string_pref(&self, key: &str, value: &str) {
        if let Err(e) = save_to_storage(key, value) {
            log::warn!("⚠️ Error guardando preferencia {}: {}", key, e);
        }
    }

    /// Cargar preferencia string desde localStorage
    pub fn load_string_pref(&self, key: &str) -> Option<String> {
        load_from_storage(key)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
