// ============================================================================
// AUTH STATE - Estado de autenticación (espejo del token en localStorage)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::services::auth_service;

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    pub token: Rc<RefCell<Option<String>>>,
    pub email: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    /// Crear estado leyendo el token guardado en localStorage
    pub fn new() -> Self {
        Self {
            token: Rc::new(RefCell::new(auth_service::get_token())),
            email: Rc::new(RefCell::new(auth_service::get_email())),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn get_email(&self) -> Option<String> {
        self.email.borrow().clone()
    }

    /// Re-leer el token desde storage (tras login/logout)
    pub fn reload(&self) {
        *self.token.borrow_mut() = auth_service::get_token();
        *self.email.borrow_mut() = auth_service::get_email();
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
