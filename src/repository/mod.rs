pub mod document_repository;
pub mod product_repository;
pub mod source;

use crate::config::CatalogConfig;
use crate::domain::document::DocStyleTable;
use crate::services::CatalogError;

/// Result of the one load a widget performs on mount.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn records(&self) -> &[T] {
        match self {
            LoadState::Ready(records) => records,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

/// Which of the four grid displays a widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridState {
    Loading,
    Failed,
    Empty,
    Records,
}

impl GridState {
    /// `state` is `None` until the mount-time load resolves. `visible` is the
    /// pipeline output length.
    pub fn of<T>(state: Option<&LoadState<T>>, visible: usize) -> Self {
        match state {
            None | Some(LoadState::Loading) => GridState::Loading,
            Some(LoadState::Failed(_)) => GridState::Failed,
            Some(LoadState::Ready(_)) if visible == 0 => GridState::Empty,
            Some(LoadState::Ready(_)) => GridState::Records,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Repository {
    pub products: product_repository::ProductRepository,
    pub documents: document_repository::DocumentRepository,
}

impl Repository {
    pub fn new(
        products: product_repository::ProductRepository,
        documents: document_repository::DocumentRepository,
    ) -> Self {
        Self {
            products,
            documents,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let products = source::resolve_source(&config.data_base, &config.products_file)?;
        let documents = source::resolve_source(&config.data_base, &config.documents_file)?;

        Ok(Self::new(
            product_repository::ProductRepository::new(products),
            document_repository::DocumentRepository::new(documents, DocStyleTable::default()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_state_before_load() {
        assert_eq!(GridState::of::<u32>(None, 0), GridState::Loading);
        assert_eq!(GridState::of(Some(&LoadState::<u32>::Loading), 0), GridState::Loading);
    }

    #[test]
    fn test_grid_state_failed_load_shows_error() {
        let failed = LoadState::<u32>::Failed("HTTP 404".to_string());
        assert_eq!(GridState::of(Some(&failed), 0), GridState::Failed);
    }

    #[test]
    fn test_grid_state_empty_when_everything_filtered_out() {
        let ready = LoadState::Ready(vec![1u32, 2, 3]);
        assert_eq!(GridState::of(Some(&ready), 0), GridState::Empty);
        assert_eq!(GridState::of(Some(&LoadState::<u32>::Ready(vec![])), 0), GridState::Empty);
    }

    #[test]
    fn test_grid_state_records() {
        let ready = LoadState::Ready(vec![1u32, 2, 3]);
        assert_eq!(GridState::of(Some(&ready), 2), GridState::Records);
    }
}
