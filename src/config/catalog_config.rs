use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "TECHVAULT_CONFIG";
/// Overrides `data_base` regardless of the file contents.
pub const DATA_BASE_ENV: &str = "TECHVAULT_DATA_BASE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory or `http(s)://` URL the catalog files live under
    pub data_base: String,

    pub products_file: String,

    pub documents_file: String,

    /// Target of the "Dev" buttons on product cards and the quick view
    pub portfolio_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_base: default_data_base(),
            products_file: "products.json".to_string(),
            documents_file: "documents.json".to_string(),
            portfolio_url: "https://anthony-zaino-portfolio.vercel.app/".to_string(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_data_base() -> String {
    "data".to_string()
}

/// In the browser the data directory sits next to the hosting page.
#[cfg(target_arch = "wasm32")]
fn default_data_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .and_then(|href| reqwest::Url::parse(&href).ok())
        .and_then(|page| page.join("data/").ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| "data".to_string())
}

impl CatalogConfig {
    /// Load configuration from `$TECHVAULT_CONFIG` or the user config
    /// directory, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = lookup(DATA_BASE_ENV).filter(|b| !b.is_empty()) {
            self.data_base = base;
        }
        self
    }

    /// Get the configuration file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("techvault").join("config.toml"))
    }
}
