mod catalog_config;

pub use catalog_config::{CONFIG_ENV, CatalogConfig, DATA_BASE_ENV};
