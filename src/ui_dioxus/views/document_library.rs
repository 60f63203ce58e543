use crate::domain::filter::{ALL, DocumentFilter, Facet, FilterEvent, FilterState};
use crate::repository::{GridState, Repository};
use crate::services::catalog_service::{
    apply_document_filters, count_label, unique_doc_types, unique_document_categories,
};
use crate::ui_dioxus::components::*;
use dioxus::prelude::*;
use std::iter;

fn with_all(label: &str, values: &[String]) -> Vec<FilterOption> {
    iter::once((ALL.to_string(), label.to_string()))
        .chain(values.iter().map(|v| (v.clone(), v.clone())))
        .collect()
}

#[component]
pub fn DocumentLibrary() -> Element {
    let repository = use_context::<Repository>();

    let documents = use_resource(move || {
        let repo = repository.documents.clone();
        async move { repo.load().await }
    });
    let mut filter = use_signal(DocumentFilter::default);

    let visible = use_memo(move || match &*documents.read() {
        Some(state) => apply_document_filters(state.records(), &filter.read()),
        None => Vec::new(),
    });
    let facets = use_memo(move || match &*documents.read() {
        Some(state) => (
            unique_document_categories(state.records()),
            unique_doc_types(state.records()),
        ),
        None => (Vec::new(), Vec::new()),
    });

    let mut dispatch = move |event: FilterEvent| {
        let next = filter.peek().clone().reduce(event);
        filter.set(next);
    };

    let current = filter.read().clone();
    let (categories, doc_types) = facets.read().clone();

    let count = if documents.read().is_none() {
        "Loading...".to_string()
    } else {
        count_label(visible.read().len(), "Documents")
    };

    let grid = match GridState::of(documents.read().as_ref(), visible.read().len()) {
        GridState::Loading => rsx! { LoadingPlaceholder { noun: "documents" } },
        GridState::Failed => rsx! { LoadErrorMessage { noun: "documents" } },
        GridState::Empty => rsx! { NoResults { noun: "documents" } },
        GridState::Records => rsx! {
            for record in visible.read().iter().cloned() {
                DocumentCard { key: "{record.id}", document: record.clone() }
            }
        },
    };

    rsx! {
        div {
            class: "library-container",
            style: "max-width: 1400px; margin: 0 auto; padding: 24px;",

            div {
                class: "library-header",
                style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 16px; margin-bottom: 24px;",
                div {
                    class: "header-left",
                    h1 { class: "library-title", style: "margin: 0; font-size: 2rem;", "📚 Document Library" }
                    div { class: "document-count", style: "color: #64748b;", "{count}" }
                }
                div {
                    class: "header-right",
                    SearchBox {
                        placeholder: "🔍 Search documents...",
                        query: current.query.clone(),
                        on_input: move |query| dispatch(FilterEvent::Query(query)),
                    }
                }
            }

            div {
                class: "library-layout",
                style: "display: grid; grid-template-columns: 260px 1fr; gap: 24px;",

                aside {
                    class: "filters-sidebar",
                    style: "background: white; border-radius: 16px; padding: 20px; height: fit-content;",
                    FilterSection {
                        title: "Category",
                        group: "category",
                        options: with_all("All Categories", &categories),
                        selected: current.category.value(),
                        on_change: move |value: String| {
                            dispatch(FilterEvent::Category(Facet::from_value(&value).unwrap_or_default()))
                        },
                    }
                    FilterSection {
                        title: "Document Type",
                        group: "type",
                        options: with_all("All Types", &doc_types),
                        selected: current.doc_type.value(),
                        on_change: move |value: String| {
                            dispatch(FilterEvent::DocType(Facet::from_value(&value).unwrap_or_default()))
                        },
                    }
                    ResetButton { on_reset: move |_| dispatch(FilterEvent::Reset) }
                }

                main {
                    class: "main-content",
                    div {
                        class: "document-grid",
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 24px;",
                        {grid}
                    }
                }
            }
        }
    }
}
