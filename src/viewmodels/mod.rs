pub mod account_viewmodel;
pub mod catalog_viewmodel;
pub mod content_viewmodel;
pub mod quiz_viewmodel;
pub mod wishlist_viewmodel;

pub use account_viewmodel::AccountViewModel;
pub use catalog_viewmodel::CatalogViewModel;
pub use content_viewmodel::ContentViewModel;
pub use quiz_viewmodel::QuizViewModel;
pub use wishlist_viewmodel::{plan_wishlist, WishlistPlan, WishlistViewModel};
