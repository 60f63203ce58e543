use crate::domain::catalog::ProductCategory;
use crate::domain::product::ProductRecord;
use crate::repository::LoadState;
use crate::repository::source::SharedSource;
use crate::services::catalog_service::flatten_products;
use crate::services::{CatalogError, LogHelper};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProductRepository {
    source: SharedSource,
}

impl ProductRepository {
    pub fn new(source: SharedSource) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> String {
        self.source.describe()
    }

    /// Fetches and parses `products.json` without flattening it.
    pub async fn fetch_tree(&self) -> Result<Vec<ProductCategory>, CatalogError> {
        let text = self.source.fetch_text().await?;
        serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
            source_name: self.source.describe(),
            source,
        })
    }

    /// Raw categories for the category grid. Failures are logged, not returned.
    pub async fn load_categories(&self) -> LoadState<ProductCategory> {
        match self.fetch_tree().await {
            Ok(tree) => {
                LogHelper::log_load_success("product categories", &self.source_name(), tree.len());
                LoadState::Ready(tree)
            }
            Err(e) => {
                LogHelper::log_load_failure("product categories", &self.source_name(), &e);
                LoadState::Failed(e.to_string())
            }
        }
    }

    /// Flattened product records. Failures are logged, not returned.
    pub async fn load(&self) -> LoadState<ProductRecord> {
        match self.fetch_tree().await {
            Ok(tree) => {
                let records = flatten_products(&tree);
                LogHelper::log_load_success("products", &self.source_name(), records.len());
                LoadState::Ready(records)
            }
            Err(e) => {
                LogHelper::log_load_failure("products", &self.source_name(), &e);
                LoadState::Failed(e.to_string())
            }
        }
    }
}

// Props comparison: two handles are equal when they share a source
impl PartialEq for ProductRepository {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }
}
