pub mod document_library;
pub mod product_catalog;
pub mod product_grid;

pub use document_library::DocumentLibrary;
pub use product_catalog::ProductCatalog;
pub use product_grid::ProductGrid;
