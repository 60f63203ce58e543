use dioxus::prelude::*;

const FULL_ROW: &str = "grid-column: 1/-1; text-align: center;";

#[component]
pub fn LoadingPlaceholder(noun: String) -> Element {
    rsx! {
        div {
            class: "loading-placeholder",
            style: "{FULL_ROW} padding: 2rem; color: #6b7280;",
            "Loading {noun}..."
        }
    }
}

/// Shown in place of the grid when the catalog could not be loaded.
#[component]
pub fn LoadErrorMessage(noun: String) -> Element {
    rsx! {
        p {
            class: "load-error",
            style: "{FULL_ROW} padding: 2rem;",
            "Error loading {noun}"
        }
    }
}

/// Shown when every record was filtered out.
#[component]
pub fn NoResults(noun: String) -> Element {
    rsx! {
        div {
            class: "no-results",
            style: "{FULL_ROW} padding: 4rem 2rem;",
            p {
                style: "font-size: 1.5rem; color: #64748b; margin-bottom: 1rem;",
                "No {noun} found"
            }
            p {
                style: "color: #94a3b8;",
                "Try adjusting your filters or search term"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_no_results_message() {
        fn app() -> Element {
            rsx! { NoResults { noun: "products" } }
        }

        let html = render(app);
        assert!(html.contains("No products found"));
        assert!(html.contains("Try adjusting your filters or search term"));
        assert!(!html.contains("Error loading"));
    }

    #[test]
    fn test_load_error_message() {
        fn app() -> Element {
            rsx! { LoadErrorMessage { noun: "documents" } }
        }

        let html = render(app);
        assert!(html.contains("Error loading documents"));
        assert!(html.contains("load-error"));
    }

    #[test]
    fn test_loading_placeholder() {
        fn app() -> Element {
            rsx! { LoadingPlaceholder { noun: "products" } }
        }

        assert!(render(app).contains("Loading products..."));
    }
}
