use crate::domain::quick_view::ScrollLock;

/// Toggles `overflow` on the page body while the quick view is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        set_body_overflow("hidden");
    }

    fn unlock(&self) {
        set_body_overflow("");
    }
}

#[cfg(target_arch = "wasm32")]
fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        if let Err(e) = body.style().set_property("overflow", value) {
            tracing::warn!(error = ?e, "Could not change page scrolling");
        }
    }
}

// Desktop renders into a webview, so the body is reached through script.
#[cfg(not(target_arch = "wasm32"))]
fn set_body_overflow(value: &str) {
    let _ = dioxus::prelude::eval(&format!("document.body.style.overflow = '{}';", value));
}
