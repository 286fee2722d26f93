// ============================================================================
// PAGE STATE - Tri-estado reutilizable (data / loading / error)
// ============================================================================
// Cada página fetch-ea en mount y deriva su render de este triple.
// Mientras loading=true se muestran skeletons; error=Some(msg) muestra el
// banner estático; data=Some(vm) renderiza el contenido.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Estado tri-valuado de una página
pub struct PageState<T> {
    pub data: Rc<RefCell<Option<T>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
}

// Clone manual: clonar los Rc, sin exigir T: Clone
impl<T> Clone for PageState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading.clone(),
            error: self.error.clone(),
        }
    }
}

impl<T> PageState<T> {
    /// Estado inicial: cargando, sin datos ni error
    pub fn new() -> Self {
        Self {
            data: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(true)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    /// Resolución exitosa: datos presentes, loading y error limpios
    pub fn resolve(&self, data: T) {
        *self.data.borrow_mut() = Some(data);
        *self.loading.borrow_mut() = false;
        *self.error.borrow_mut() = None;
    }

    /// Fallo: mensaje estático, sin datos, loading apagado
    pub fn fail(&self, message: impl Into<String>) {
        *self.data.borrow_mut() = None;
        *self.loading.borrow_mut() = false;
        *self.error.borrow_mut() = Some(message.into());
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_without_data_or_error() {
        let state: PageState<Vec<u32>> = PageState::new();
        assert!(state.is_loading());
        assert!(state.data.borrow().is_none());
        assert!(state.get_error().is_none());
    }

    #[test]
    fn resolve_sets_data_and_clears_the_rest() {
        let state: PageState<Vec<u32>> = PageState::new();
        state.resolve(vec![1, 2]);
        assert!(!state.is_loading());
        assert_eq!(state.data.borrow().as_deref(), Some(&[1, 2][..]));
        assert!(state.get_error().is_none());
    }

    #[test]
    fn fail_sets_the_static_message_and_drops_data() {
        let state: PageState<Vec<u32>> = PageState::new();
        state.resolve(vec![1]);
        state.fail("Something went wrong. Please try again.");
        assert!(!state.is_loading());
        assert!(state.data.borrow().is_none());
        assert_eq!(
            state.get_error().as_deref(),
            Some("Something went wrong. Please try again.")
        );
    }
}
