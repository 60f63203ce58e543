use techvault::ui_dioxus::App;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dioxus_desktop::{Config, WindowBuilder};

    // Initialize logging
    tracing_subscriber::fmt::init();
    tracing::info!("Starting TechVault catalog");

    // Launch the Dioxus desktop app
    dioxus_desktop::launch::launch(
        App,
        vec![],
        Config::new().with_window(WindowBuilder::new().with_title("TechVault Catalog")),
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // tracing events reach the browser console through the `log` bridge
    wasm_logger::init(wasm_logger::Config::default());

    dioxus_web::launch::launch_cfg(App, dioxus_web::Config::new());
}
