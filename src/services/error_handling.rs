use tracing::{debug, error, info, warn};

/// Failures while loading a catalog JSON document.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch catalog from {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog at {source_name} returned HTTP {status}")]
    HttpStatus { source_name: String, status: u16 },

    #[error("Catalog at {source_name} is not valid catalog JSON")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog source '{location}': {reason}")]
    InvalidSource { location: String, reason: String },
}

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_load_success(kind: &str, source: &str, count: usize) {
        info!(
            kind = %kind,
            source = %source,
            count = count,
            "Catalog loaded"
        );
    }

    pub fn log_load_failure(kind: &str, source: &str, error: &CatalogError) {
        let chain: Vec<String> = std::iter::successors(
            Some(error as &dyn std::error::Error),
            |e| e.source(),
        )
        .map(|e| e.to_string())
        .collect();

        error!(
            kind = %kind,
            source = %source,
            error = %error,
            error_chain = ?chain,
            "Failed to load catalog"
        );
    }

    pub fn log_pipeline_run(kind: &str, total: usize, visible: usize) {
        debug!(
            kind = %kind,
            total = total,
            visible = visible,
            "Filters applied"
        );
    }

    pub fn log_ignored_input(control: &str, value: &str, reason: &str) {
        warn!(
            control = %control,
            value = %value,
            reason = %reason,
            "Ignoring filter input"
        );
    }
}
