use crate::config::CatalogConfig;
use crate::repository::Repository;
use crate::ui_dioxus::router::Route;
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    let config = use_hook(|| match CatalogConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to default configuration");
            CatalogConfig::default()
        }
    });
    use_context_provider(|| config.clone());

    let repository = use_hook(|| {
        Repository::from_config(&config).map_err(|e| {
            tracing::error!(error = %e, "Catalog sources could not be resolved");
            e.to_string()
        })
    });

    match repository {
        Ok(repository) => rsx! { CatalogShell { repository: repository } },
        Err(message) => rsx! {
            div {
                class: "loading-container",
                style: "display: flex; justify-content: center; align-items: center; height: 100vh; font-size: 1.2rem; color: #991b1b;",
                "{message}"
            }
        },
    }
}

/// Provides the repository to every widget below the router.
#[component]
fn CatalogShell(repository: Repository) -> Element {
    use_context_provider(|| repository.clone());

    rsx! { Router::<Route> {} }
}
