// Dioxus UI module - catalog widgets for desktop and browser
pub mod app;
pub mod components;
pub mod router;
pub mod scroll_lock;
pub mod views;

pub use app::App;
