// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod page_state;

pub use app_state::AppState;
pub use auth_state::AuthState;
pub use page_state::PageState;
