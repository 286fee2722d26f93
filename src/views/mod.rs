// ============================================================================
// VIEWS - Renderizado DOM de cada página
// ============================================================================

pub mod account;
pub mod app;
pub mod best_sellers;
pub mod blog;
pub mod cards;
pub mod feedback;
pub mod gifting;
pub mod orders;
pub mod press;
pub mod product_card;
pub mod quiz;
pub mod stores;
pub mod sustainability;
pub mod wishlist;

pub use app::render_app;
