use crate::domain::catalog::ProductCategory;
use crate::repository::{LoadState, Repository};
use crate::ui_dioxus::components::{LoadErrorMessage, LoadingPlaceholder};
use dioxus::prelude::*;

/// One tile per product category. Selecting a tile hands the raw category
/// to the host through `on_select` and hides the grid.
#[component]
pub fn ProductGrid(on_select: EventHandler<ProductCategory>) -> Element {
    let repository = use_context::<Repository>();

    let categories = use_resource(move || {
        let repo = repository.products.clone();
        async move { repo.load_categories().await }
    });
    let mut hidden = use_signal(|| false);

    let tiles = match &*categories.read() {
        None | Some(LoadState::Loading) => rsx! { LoadingPlaceholder { noun: "products" } },
        Some(LoadState::Failed(_)) => rsx! { LoadErrorMessage { noun: "products" } },
        Some(LoadState::Ready(list)) => rsx! {
            for category in list.iter().cloned() {
                CategoryTile {
                    key: "{category.id}-{category.name}",
                    category: category.clone(),
                    on_click: move |category: ProductCategory| {
                        tracing::info!(category = %category.name, "Product category selected");
                        on_select.call(category);
                        hidden.set(true);
                    },
                }
            }
        },
    };

    rsx! {
        div {
            class: if hidden() { "product-wrapper hidden" } else { "product-wrapper" },
            style: if hidden() { "display: none;" } else { "background: linear-gradient(135deg, #f5f7fa 0%, #e3e8ef 100%); min-height: 100vh; padding-bottom: 100px;" },
            div {
                class: "product-grid",
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 24px; padding: 24px; max-width: 1200px; margin: 0 auto;",
                {tiles}
            }
        }
    }
}

#[component]
fn CategoryTile(category: ProductCategory, on_click: EventHandler<ProductCategory>) -> Element {
    let image = category.cover_image().unwrap_or_default().to_string();
    let name = category.name.clone();

    rsx! {
        div {
            class: "product-listing",
            style: "cursor: pointer; border-radius: 20px; overflow: hidden; display: flex; flex-direction: column; align-items: center; background: white; box-shadow: 0 4px 16px rgba(37, 99, 235, 0.12);",
            onclick: move |_| on_click.call(category.clone()),
            div {
                class: "product-image-wrapper",
                style: "width: 100%; height: 140px; padding: 16px;",
                div {
                    class: "product-image",
                    style: "width: 100%; height: 100%; background-size: contain; background-position: center; background-repeat: no-repeat; background-image: url('{image}');",
                }
            }
            div {
                class: "product-title",
                style: "padding: 16px 12px; font-size: 15px; font-weight: 600; text-align: center; width: 100%; color: #1e40af;",
                "{name}"
            }
        }
    }
}
