use crate::domain::catalog::DocumentCategory;
use crate::domain::document::{DocStyleTable, DocumentRecord};
use crate::repository::LoadState;
use crate::repository::source::SharedSource;
use crate::services::catalog_service::flatten_documents;
use crate::services::{CatalogError, LogHelper};
use std::rc::Rc;

#[derive(Clone)]
pub struct DocumentRepository {
    source: SharedSource,
    styles: Rc<DocStyleTable>,
}

impl DocumentRepository {
    pub fn new(source: SharedSource, styles: DocStyleTable) -> Self {
        Self {
            source,
            styles: Rc::new(styles),
        }
    }

    pub fn source_name(&self) -> String {
        self.source.describe()
    }

    pub async fn fetch_tree(&self) -> Result<Vec<DocumentCategory>, CatalogError> {
        let text = self.source.fetch_text().await?;
        serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
            source_name: self.source.describe(),
            source,
        })
    }

    /// Flattened, styled document records. Failures are logged, not returned.
    pub async fn load(&self) -> LoadState<DocumentRecord> {
        match self.fetch_tree().await {
            Ok(tree) => {
                let records = flatten_documents(&tree, &self.styles);
                LogHelper::log_load_success("documents", &self.source_name(), records.len());
                LoadState::Ready(records)
            }
            Err(e) => {
                LogHelper::log_load_failure("documents", &self.source_name(), &e);
                LoadState::Failed(e.to_string())
            }
        }
    }
}

// Props comparison: two handles are equal when they share a source
impl PartialEq for DocumentRepository {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }
}
