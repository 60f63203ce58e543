use crate::services::CatalogError;
use async_trait::async_trait;
use reqwest::Url;
use std::path::PathBuf;
use std::rc::Rc;

#[cfg(test)]
use mockall::automock;

/// Where a catalog JSON document comes from.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Human readable location, used in logs and error messages.
    fn describe(&self) -> String;

    async fn fetch_text(&self) -> Result<String, CatalogError>;
}

pub type SharedSource = Rc<dyn CatalogSource>;

/// Reads the document from the local filesystem (desktop builds).
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait(?Send)]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_text(&self) -> Result<String, CatalogError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.describe(),
                source,
            })
    }
}

/// Fetches the document over HTTP (browser builds, or a remote data host).
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_text(&self) -> Result<String, CatalogError> {
        let http_error = |source| CatalogError::Http {
            url: self.describe(),
            source,
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                source_name: self.describe(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(http_error)
    }
}

/// Picks a source for `file` under `base`: `http(s)://` bases give an
/// [`HttpSource`], anything else is treated as a directory on disk.
pub fn resolve_source(base: &str, file: &str) -> Result<SharedSource, CatalogError> {
    if base.starts_with("http://") || base.starts_with("https://") {
        let base_url = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let url = Url::parse(&base_url)
            .and_then(|b| b.join(file))
            .map_err(|e| CatalogError::InvalidSource {
                location: format!("{}{}", base_url, file),
                reason: e.to_string(),
            })?;
        Ok(Rc::new(HttpSource::new(url)))
    } else {
        Ok(Rc::new(FileSource::new(PathBuf::from(base).join(file))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_base_resolves_relative_to_directory() {
        let with_slash = resolve_source("https://cdn.example.com/catalog/", "products.json").unwrap();
        let without_slash = resolve_source("https://cdn.example.com/catalog", "products.json").unwrap();

        assert_eq!(with_slash.describe(), "https://cdn.example.com/catalog/products.json");
        assert_eq!(without_slash.describe(), with_slash.describe());
    }

    #[test]
    fn test_local_base_joins_path() {
        let source = resolve_source("data", "documents.json").unwrap();
        assert_eq!(
            source.describe(),
            PathBuf::from("data").join("documents.json").display().to_string()
        );
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        let err = resolve_source("http://[::1", "products.json").err().unwrap();
        assert!(matches!(err, CatalogError::InvalidSource { .. }));
    }

    #[tokio::test]
    async fn test_file_source_reads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, "[]").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch_text().await.unwrap(), "[]");
    }
}
