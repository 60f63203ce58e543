use crate::domain::product::ProductRecord;
use crate::domain::quick_view::{ClickTarget, QuickViewAction};
use dioxus::prelude::*;

#[component]
pub fn QuickViewModal(
    product: ProductRecord,
    portfolio_url: String,
    on_action: EventHandler<QuickViewAction>,
) -> Element {
    let image = product.image.clone().unwrap_or_default();
    let documents: Vec<(String, String)> = product
        .submittals
        .iter()
        .map(|doc| (doc.label().to_string(), doc.url.clone().unwrap_or_default()))
        .collect();

    rsx! {
        // Modal backdrop
        div {
            class: "quick-view-modal active",
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(15, 23, 42, 0.6); z-index: 1000;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_action.call(QuickViewAction::Click(ClickTarget::Backdrop)),

            // Modal content
            div {
                class: "modal-content",
                style: "position: relative; background: white; border-radius: 20px; padding: 32px;
                       width: 90%; max-width: 900px; max-height: 90vh; overflow-y: auto;
                       box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);",
                onclick: move |e| {
                    e.stop_propagation();
                    on_action.call(QuickViewAction::Click(ClickTarget::Content));
                },

                button {
                    class: "modal-close",
                    style: "position: absolute; top: 16px; right: 16px; background: none; border: none; font-size: 28px; cursor: pointer;",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_action.call(QuickViewAction::Close);
                    },
                    "×"
                }

                div {
                    class: "modal-product-layout",
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 32px;",

                    div {
                        class: "modal-product-image",
                        style: "background: #f8fafc; border-radius: 16px; padding: 24px;",
                        img {
                            src: "{image}",
                            alt: "{product.name}",
                            style: "width: 100%; object-fit: contain;",
                        }
                    }

                    div {
                        class: "modal-product-details",
                        div { class: "modal-breadcrumb", style: "font-size: 13px; color: #64748b;", "{product.category} / {product.series}" }
                        h2 { class: "modal-product-name", style: "margin: 8px 0; font-size: 28px;", "{product.name}" }
                        div { class: "modal-product-price", style: "font-size: 22px; font-weight: 700; color: #1e40af;", "{product.price}" }
                        div {
                            class: "modal-product-description",
                            style: "margin: 16px 0; color: #334155; line-height: 1.6;",
                            p { "{product.description}" }
                        }

                        div {
                            class: "modal-actions",
                            style: "display: flex; gap: 12px;",
                            a {
                                class: "modal-btn modal-btn-primary",
                                href: "{portfolio_url}",
                                target: "_blank",
                                style: "padding: 10px 18px; border-radius: 10px; background: #2563eb; color: white; text-decoration: none;",
                                onclick: move |e| e.stop_propagation(),
                                "👨‍💻 View Developer Portfolio"
                            }
                            button {
                                class: "modal-btn modal-btn-secondary",
                                style: "padding: 10px 18px; border-radius: 10px; border: 1px solid #cbd5e1; background: white; cursor: pointer;",
                                onclick: move |e| {
                                    e.stop_propagation();
                                    on_action.call(QuickViewAction::Close);
                                },
                                "Close"
                            }
                        }

                        if !documents.is_empty() {
                            div {
                                class: "modal-documents",
                                style: "margin-top: 24px;",
                                h3 { style: "font-size: 16px;", "Documentation" }
                                ul {
                                    for (label, url) in documents {
                                        li {
                                            a {
                                                href: "{url}",
                                                target: "_blank",
                                                onclick: move |e| e.stop_propagation(),
                                                "📄 {label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
