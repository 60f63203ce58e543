pub mod catalog_service;
pub mod error_handling;

pub use error_handling::{CatalogError, LogHelper};
