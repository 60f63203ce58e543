use crate::domain::product::{ProductBadge, ProductRecord};
use dioxus::prelude::*;

#[component]
pub fn ProductCard(
    product: ProductRecord,
    portfolio_url: String,
    on_quick_view: EventHandler<u32>,
) -> Element {
    let id = product.id;
    let image = product.image.clone().unwrap_or_default();
    let badge_color = match product.badge() {
        Some(ProductBadge::Premium) => "#7c3aed",
        Some(ProductBadge::BestValue) => "#059669",
        None => "transparent",
    };

    rsx! {
        div {
            class: "product-card",
            "data-product-id": "{id}",
            style: "background: white; border-radius: 16px; overflow: hidden; box-shadow: 0 4px 16px rgba(37, 99, 235, 0.12); display: flex; flex-direction: column;",

            div {
                class: "product-image-container",
                style: "position: relative; height: 180px; padding: 16px; background: #f8fafc;",
                img {
                    class: "product-image",
                    src: "{image}",
                    alt: "{product.name}",
                    style: "width: 100%; height: 100%; object-fit: contain;",
                }
                button {
                    class: "quick-view-btn",
                    style: "position: absolute; bottom: 12px; left: 50%; transform: translateX(-50%); padding: 6px 14px; border: none; border-radius: 999px; background: rgba(15, 23, 42, 0.8); color: white; cursor: pointer;",
                    onclick: move |_| on_quick_view.call(id),
                    "👁️ Quick View"
                }
                if let Some(badge) = product.badge() {
                    span {
                        class: "badge",
                        style: "position: absolute; top: 12px; right: 12px; padding: 4px 10px; border-radius: 999px; font-size: 12px; color: white; background: {badge_color};",
                        "{badge.label()}"
                    }
                }
            }

            div {
                class: "product-info",
                style: "padding: 16px; display: flex; flex-direction: column; gap: 4px; flex: 1;",
                div { class: "product-category", style: "font-size: 12px; color: #2563eb; text-transform: uppercase;", "{product.category}" }
                h3 { class: "product-name", style: "margin: 0; font-size: 16px; color: #0f172a;", "{product.name}" }
                div { class: "product-series", style: "font-size: 13px; color: #64748b;", "{product.series}" }
                div {
                    class: "product-footer",
                    style: "display: flex; justify-content: space-between; align-items: center; margin-top: auto; padding-top: 12px;",
                    div { class: "product-price", style: "font-weight: 700; color: #1e40af;", "{product.price}" }
                    a {
                        class: "view-details-btn",
                        href: "{portfolio_url}",
                        target: "_blank",
                        style: "padding: 6px 12px; border-radius: 8px; background: #eff6ff; color: #1d4ed8; text-decoration: none; font-size: 13px;",
                        onclick: move |e| e.stop_propagation(),
                        "👨‍💻 Dev"
                    }
                }
            }
        }
    }
}
