use crate::domain::document::DocumentRecord;
use dioxus::prelude::*;

#[component]
pub fn DocumentCard(document: DocumentRecord) -> Element {
    let color = document.color.clone();

    rsx! {
        div {
            class: "document-card",
            "data-doc-id": "{document.id}",
            style: "background: white; border-radius: 16px; overflow: hidden; box-shadow: 0 4px 16px rgba(15, 23, 42, 0.08); display: flex; flex-direction: column;",

            div {
                class: "doc-icon-container",
                // 8-digit hex: the type color at ~12% opacity
                style: "position: relative; height: 120px; display: flex; align-items: center; justify-content: center; background: {color}20;",
                div { class: "doc-icon", style: "font-size: 48px;", "{document.icon}" }
                div {
                    class: "doc-type-badge",
                    style: "position: absolute; top: 12px; right: 12px; padding: 4px 10px; border-radius: 999px; color: white; font-size: 12px; background: {color};",
                    "{document.doc_type}"
                }
            }

            div {
                class: "doc-info",
                style: "padding: 16px; display: flex; flex-direction: column; gap: 6px; flex: 1;",
                div { class: "doc-category", style: "font-size: 12px; color: #64748b; text-transform: uppercase;", "{document.category}" }
                h3 { class: "doc-title", style: "margin: 0; font-size: 16px; color: #0f172a;", "{document.title}" }
                p { class: "doc-description", style: "margin: 0; font-size: 14px; color: #475569;", "{document.description}" }

                div {
                    class: "doc-actions",
                    style: "display: flex; gap: 8px; margin-top: auto; padding-top: 12px;",
                    a {
                        class: "view-doc-btn",
                        href: "{document.url}",
                        target: "_blank",
                        style: "flex: 1; text-align: center; padding: 8px; border-radius: 8px; color: white; text-decoration: none; background: linear-gradient(135deg, {color} 0%, {color}dd 100%);",
                        onclick: move |e| e.stop_propagation(),
                        "📄 View Document"
                    }
                    a {
                        class: "download-doc-btn",
                        href: "{document.url}",
                        download: "",
                        style: "padding: 8px 12px; border-radius: 8px; border: 1px solid #cbd5e1; color: #334155; text-decoration: none;",
                        onclick: move |e| e.stop_propagation(),
                        "⬇️ Download"
                    }
                }
            }
        }
    }
}
