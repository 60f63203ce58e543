pub mod document_card;
pub mod filter_sidebar;
pub mod placeholders;
pub mod product_card;
pub mod quick_view_modal;

pub use document_card::DocumentCard;
pub use filter_sidebar::{FilterOption, FilterSection, ResetButton, SearchBox};
pub use placeholders::{LoadErrorMessage, LoadingPlaceholder, NoResults};
pub use product_card::ProductCard;
pub use quick_view_modal::QuickViewModal;
