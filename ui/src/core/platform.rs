//! Browser glue: viewport width readings and outbound navigation.
//!
//! On WASM this talks to `window` through `web_sys`. Native builds render into
//! a webview, so the same calls are made by evaluating small scripts through
//! `document::eval`.

use thiserror::Error;

use crate::menu::LinkTarget;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("javascript call failed: {0}")]
    Js(String),
    #[error("failed to encode script argument: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(not(target_arch = "wasm32"))]
pub use webview::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::PlatformError;
    use crate::menu::LinkTarget;

    fn js_error(err: wasm_bindgen::JsValue) -> PlatformError {
        PlatformError::Js(format!("{err:?}"))
    }

    /// Current `window.innerWidth`, if a window exists.
    pub fn current_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    pub fn open_url(url: &str, target: LinkTarget) -> Result<(), PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        window
            .open_with_url_and_target(url, target.window_target())
            .map(|_| ())
            .map_err(js_error)
    }

    /// A `resize` listener attached to `window`. Call [`ResizeListener::remove`]
    /// on teardown; dropping it without removing leaves a dangling callback.
    pub struct ResizeListener {
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl ResizeListener {
        pub fn install(mut on_width: impl FnMut(f64) + 'static) -> Result<Self, PlatformError> {
            let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(width) = current_width() {
                    on_width(width);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .map_err(js_error)?;
            Ok(Self { closure })
        }

        pub fn remove(&self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod webview {
    use dioxus::prelude::document;

    use super::PlatformError;
    use crate::menu::LinkTarget;

    use std::sync::atomic::{AtomicU64, Ordering};

    // Handlers are parked on `window` keyed by bridge id, so a teardown only
    // ever removes the handler its own bridge installed.
    const HANDLERS: &str = "window.__uipediaNavbarResize";

    static NEXT_BRIDGE_ID: AtomicU64 = AtomicU64::new(1);

    /// Fresh id for one navbar instance's resize bridge.
    pub fn next_bridge_id() -> u64 {
        NEXT_BRIDGE_ID.fetch_add(1, Ordering::Relaxed)
    }

    fn bridge_script(id: u64) -> String {
        format!(
            r#"
            const handlers = ({HANDLERS} = {HANDLERS} || {{}});
            const report = () => dioxus.send(window.innerWidth);
            handlers[{id}] = report;
            window.addEventListener("resize", report);
            report();
            await new Promise(() => {{}});
            "#
        )
    }

    fn teardown_script(id: u64) -> String {
        format!(
            r#"
            const handlers = {HANDLERS};
            if (handlers && handlers[{id}]) {{
                window.removeEventListener("resize", handlers[{id}]);
                delete handlers[{id}];
            }}
            "#
        )
    }

    pub fn open_url(url: &str, target: LinkTarget) -> Result<(), PlatformError> {
        let script = format!(
            "window.open({}, {});",
            serde_json::to_string(url)?,
            serde_json::to_string(target.window_target())?
        );
        let _ = document::eval(&script);
        Ok(())
    }

    /// Installs bridge `id` and feeds every reported width to `on_width`.
    /// The first report is the width at install time. Only returns once the
    /// bridge closes, which is always an error.
    pub async fn watch_width(id: u64, mut on_width: impl FnMut(f64)) -> Result<(), PlatformError> {
        let mut bridge = document::eval(&bridge_script(id));
        loop {
            let width = bridge
                .recv::<f64>()
                .await
                .map_err(|err| PlatformError::Js(format!("{err:?}")))?;
            on_width(width);
        }
    }

    pub fn unwatch_width(id: u64) {
        let _ = document::eval(&teardown_script(id));
    }

}

/// Native builds keep router history in memory, so app paths must be pushed
/// onto the router instead of loaded into the webview.
pub const ROUTES_IN_APP: bool = cfg!(not(target_arch = "wasm32"));

/// Opens `url` in the tab `target` selects, logging instead of failing.
pub fn follow_link(url: &str, target: LinkTarget) {
    dioxus::logger::tracing::debug!(url, target = target.window_target(), "opening navbar link");
    if let Err(err) = open_url(url, target) {
        dioxus::logger::tracing::warn!(%err, url, "failed to open navbar link");
    }
}
