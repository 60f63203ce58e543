use crate::domain::catalog::ProductCategory;
use crate::ui_dioxus::views::*;
use dioxus::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},

        #[route("/products")]
        Products {},

        #[route("/products/:category")]
        ProductsIn { category: String },

        #[route("/library")]
        Library {},
}

#[component]
fn NavBar() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let item_class = |active: bool| if active { "nav-item active" } else { "nav-item" };

    rsx! {
        div {
            class: "app-container",
            nav {
                class: "navbar",
                style: "display: flex; align-items: center; gap: 24px; padding: 12px 24px; background: #1e3a8a; color: white;",
                div { class: "nav-brand", style: "font-weight: 700; font-size: 1.2rem;", "TechVault" }
                div {
                    class: "nav-menu",
                    style: "display: flex; gap: 12px;",
                    button {
                        class: item_class(matches!(route, Route::Home {})),
                        onclick: move |_| {
                            navigator.push(Route::Home {});
                        },
                        "🏠 Home"
                    }
                    button {
                        class: item_class(matches!(route, Route::Products {} | Route::ProductsIn { .. })),
                        onclick: move |_| {
                            navigator.push(Route::Products {});
                        },
                        "🛒 Products"
                    }
                    button {
                        class: item_class(matches!(route, Route::Library {})),
                        onclick: move |_| {
                            navigator.push(Route::Library {});
                        },
                        "📚 Library"
                    }
                }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        ProductGrid {
            on_select: move |category: ProductCategory| {
                navigator.push(Route::ProductsIn { category: category.name });
            },
        }
    }
}

#[component]
fn Products() -> Element {
    rsx! { ProductCatalog {} }
}

#[component]
fn ProductsIn(category: String) -> Element {
    rsx! { ProductCatalog { initial_category: category } }
}

#[component]
fn Library() -> Element {
    rsx! { DocumentLibrary {} }
}
