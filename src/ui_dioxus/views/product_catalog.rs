use crate::config::CatalogConfig;
use crate::domain::filter::{
    ALL, Facet, FilterEvent, FilterState, PRICE_BUCKETS, PriceBucket, ProductFilter, SortKey,
};
use crate::domain::quick_view::{QuickView, QuickViewAction, ScrollLock};
use crate::repository::{GridState, Repository};
use crate::services::LogHelper;
use crate::services::catalog_service::{apply_product_filters, count_label, unique_categories};
use crate::ui_dioxus::components::*;
use crate::ui_dioxus::scroll_lock::BodyScrollLock;
use dioxus::prelude::*;
use std::iter;

#[component]
pub fn ProductCatalog(initial_category: Option<String>) -> Element {
    let repository = use_context::<Repository>();
    let config = use_context::<CatalogConfig>();

    // One load per mount; controls stay live over an empty set until it lands
    let products = use_resource(move || {
        let repo = repository.products.clone();
        async move { repo.load().await }
    });

    let mut filter = use_signal(|| match initial_category.clone() {
        Some(category) => ProductFilter::with_category(category),
        None => ProductFilter::default(),
    });
    let mut quick_view = use_signal(QuickView::default);

    let visible = use_memo(move || match &*products.read() {
        Some(state) => apply_product_filters(state.records(), &filter.read()),
        None => Vec::new(),
    });
    let categories = use_memo(move || {
        products
            .read()
            .as_ref()
            .map(|state| unique_categories(state.records()))
            .unwrap_or_default()
    });

    let mut dispatch = move |event: FilterEvent| {
        let next = filter.peek().clone().reduce(event);
        filter.set(next);
    };
    let on_category = move |value: String| {
        dispatch(FilterEvent::Category(Facet::from_value(&value).unwrap_or_default()));
    };
    let on_price = move |value: String| match Facet::<PriceBucket>::from_value(&value) {
        Ok(price) => dispatch(FilterEvent::Price(price)),
        Err(e) => LogHelper::log_ignored_input("price", &value, &e.to_string()),
    };
    let on_sort = move |e: FormEvent| match e.value().parse::<SortKey>() {
        Ok(sort) => dispatch(FilterEvent::Sort(sort)),
        Err(err) => LogHelper::log_ignored_input("sort", &e.value(), &err.to_string()),
    };

    let mut quick_view_action = move |action: QuickViewAction| {
        let (next, effect) = quick_view.peek().transition(action);
        quick_view.set(next);
        if let Some(effect) = effect {
            BodyScrollLock.apply(effect);
        }
    };

    use_drop(move || {
        if let Some(effect) = quick_view.peek().release() {
            BodyScrollLock.apply(effect);
        }
    });

    let current = filter.read().clone();
    let category_options: Vec<FilterOption> =
        iter::once((ALL.to_string(), "All Categories".to_string()))
            .chain(categories.read().iter().map(|c| (c.clone(), c.clone())))
            .collect();
    let price_options: Vec<FilterOption> = iter::once((ALL.to_string(), "All Prices".to_string()))
        .chain(
            PRICE_BUCKETS
                .iter()
                .map(|(label, bucket)| (bucket.to_string(), label.to_string())),
        )
        .collect();

    let count = if products.read().is_none() {
        "Loading...".to_string()
    } else {
        count_label(visible.read().len(), "Products")
    };

    let selected = quick_view.read().record_id().and_then(|id| {
        products
            .read()
            .as_ref()
            .and_then(|state| state.records().iter().find(|r| r.id == id).cloned())
    });

    let grid = match GridState::of(products.read().as_ref(), visible.read().len()) {
        GridState::Loading => rsx! { LoadingPlaceholder { noun: "products" } },
        GridState::Failed => rsx! { LoadErrorMessage { noun: "products" } },
        GridState::Empty => rsx! { NoResults { noun: "products" } },
        GridState::Records => rsx! {
            for record in visible.read().iter().cloned() {
                ProductCard {
                    key: "{record.id}",
                    product: record.clone(),
                    portfolio_url: config.portfolio_url.clone(),
                    on_quick_view: move |id| quick_view_action(QuickViewAction::Open(id)),
                }
            }
        },
    };

    rsx! {
        div {
            class: "catalog-container",
            style: "max-width: 1400px; margin: 0 auto; padding: 24px;",

            // Header
            div {
                class: "catalog-header",
                style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 16px; margin-bottom: 24px;",
                div {
                    class: "header-left",
                    h1 { class: "catalog-title", style: "margin: 0; font-size: 2rem;", "Product Catalog" }
                    div { class: "product-count", style: "color: #64748b;", "{count}" }
                }
                div {
                    class: "header-right",
                    style: "display: flex; gap: 12px; align-items: center;",
                    SearchBox {
                        placeholder: "🔍 Search products...",
                        query: current.query.clone(),
                        on_input: move |query| dispatch(FilterEvent::Query(query)),
                    }
                    select {
                        class: "sort-select",
                        style: "padding: 10px 12px; border: 1px solid #e2e8f0; border-radius: 10px;",
                        value: "{current.sort.value()}",
                        onchange: on_sort,
                        for key in SortKey::ALL {
                            option {
                                value: "{key.value()}",
                                selected: current.sort == key,
                                "{key.label()}"
                            }
                        }
                    }
                }
            }

            div {
                class: "catalog-layout",
                style: "display: grid; grid-template-columns: 260px 1fr; gap: 24px;",

                // Sidebar Filters
                aside {
                    class: "filters-sidebar",
                    style: "background: white; border-radius: 16px; padding: 20px; height: fit-content;",
                    FilterSection {
                        title: "Category",
                        group: "category",
                        options: category_options,
                        selected: current.category.value(),
                        on_change: on_category,
                    }
                    FilterSection {
                        title: "Price Range",
                        group: "price",
                        options: price_options,
                        selected: current.price.value(),
                        on_change: on_price,
                    }
                    ResetButton { on_reset: move |_| dispatch(FilterEvent::Reset) }
                }

                main {
                    class: "main-content",
                    div {
                        class: "product-grid",
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 24px;",
                        {grid}
                    }
                }
            }

            if let Some(product) = selected {
                QuickViewModal {
                    product: product,
                    portfolio_url: config.portfolio_url.clone(),
                    on_action: move |action| quick_view_action(action),
                }
            }
        }
    }
}
