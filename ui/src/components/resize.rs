//! Keeps `NavbarState::viewport` in step with the window width.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::navbar::NavbarState;

/// Writes a new classification only when `width` changes it. Returns whether
/// the state was written.
fn record_width(mut state: Signal<NavbarState>, width: f64) -> bool {
    let next = state.peek().viewport.reclassify(width);
    let Some(viewport) = next else {
        return false;
    };
    debug!(width, ?viewport, "navbar viewport reclassified");
    state.write().viewport = viewport;
    true
}

/// Registers a resize listener on mount and removes it on teardown.
#[cfg(target_arch = "wasm32")]
pub fn use_viewport_tracking(state: Signal<NavbarState>) {
    use std::rc::Rc;

    use dioxus::logger::tracing::warn;

    use crate::core::platform::{current_width, ResizeListener};
    use crate::core::viewport::Viewport;

    let listener = use_hook(move || {
        match ResizeListener::install(move |width| {
            record_width(state, width);
        }) {
            Ok(listener) => Some(Rc::new(listener)),
            Err(err) => {
                warn!(%err, "navbar resize listener not installed");
                None
            }
        }
    });

    use_effect(move || {
        if state.peek().viewport == Viewport::Unknown {
            if let Some(width) = current_width() {
                record_width(state, width);
            }
        }
    });

    use_drop(move || {
        if let Some(listener) = &listener {
            listener.remove();
        }
    });
}

/// Registers a resize listener on mount and removes it on teardown.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_viewport_tracking(state: Signal<NavbarState>) {
    use crate::core::platform::{next_bridge_id, unwatch_width, watch_width};

    let bridge = use_hook(next_bridge_id);

    use_future(move || async move {
        let tracked = watch_width(bridge, move |width| {
            record_width(state, width);
        });
        if let Err(err) = tracked.await {
            debug!(%err, bridge, "navbar resize bridge closed");
        }
    });

    use_drop(move || unwatch_width(bridge));
}
