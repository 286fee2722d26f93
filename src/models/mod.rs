pub mod common;
pub mod product;
pub mod order;
pub mod account;
pub mod card;
pub mod blog;
pub mod store;
pub mod quiz;
pub mod press;
pub mod content;

pub use common::Envelope;
pub use product::{sort_best_sellers, Product, RawProduct};
pub use order::{Order, RawOrder};
pub use account::{AccountStats, Profile, RawAccountStats, RawProfile};
pub use card::{RawCard, SavedCard};
pub use blog::{BlogPost, RawBlogPost};
pub use store::{RawStore, Store};
pub use quiz::{dominant_tag, QuizQuestion, RawQuizQuestion};
pub use press::{PressItem, RawPressItem};
pub use content::{ContentSection, GiftSet, RawContentSection, RawGiftingPage};
