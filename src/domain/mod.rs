pub mod catalog;
pub mod product;
pub mod document;
pub mod filter;
pub mod quick_view;
