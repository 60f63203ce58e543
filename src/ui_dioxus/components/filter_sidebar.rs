use dioxus::prelude::*;

/// One value of a radio group: `(value, label)`.
pub type FilterOption = (String, String);

#[component]
pub fn FilterSection(
    title: String,
    group: String,
    options: Vec<FilterOption>,
    selected: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "filter-section",
            style: "margin-bottom: 24px;",
            h3 {
                class: "filter-title",
                style: "font-size: 14px; font-weight: 600; text-transform: uppercase; color: #475569; margin-bottom: 12px;",
                "{title}"
            }
            div {
                class: "filter-options",
                style: "display: flex; flex-direction: column; gap: 8px;",
                for (value, label) in options {
                    label {
                        key: "{value}",
                        class: "filter-option",
                        style: "display: flex; gap: 8px; align-items: center; cursor: pointer;",
                        input {
                            r#type: "radio",
                            name: "{group}",
                            value: "{value}",
                            checked: selected == value,
                            onchange: {
                                let value = value.clone();
                                move |_| on_change.call(value.clone())
                            },
                        }
                        span { "{label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SearchBox(placeholder: String, query: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-box",
            input {
                r#type: "text",
                class: "search-input",
                style: "padding: 10px 16px; border: 1px solid #e2e8f0; border-radius: 10px; min-width: 260px;",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

#[component]
pub fn ResetButton(on_reset: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "reset-filters-btn",
            style: "width: 100%; padding: 10px; border: 1px solid #cbd5e1; background: white; border-radius: 8px; cursor: pointer;",
            onclick: move |_| on_reset.call(()),
            "Reset Filters"
        }
    }
}
