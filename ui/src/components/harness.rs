//! A root component that owns a `NavbarState` signal and counts its renders.

use std::cell::Cell;

use dioxus::prelude::*;

use crate::navbar::NavbarState;

thread_local! {
    static STATE: Cell<Option<Signal<NavbarState>>> = const { Cell::new(None) };
    static RENDERS: Cell<usize> = const { Cell::new(0) };
}

#[component]
fn Observer() -> Element {
    let state = use_signal(NavbarState::default);
    STATE.set(Some(state));
    RENDERS.set(RENDERS.get() + 1);

    let snapshot = state.read().clone();
    rsx! { "{snapshot:?}" }
}

/// Mounts a fresh observer on this thread and hands back its signal.
pub fn mount_observer() -> (VirtualDom, Signal<NavbarState>) {
    RENDERS.set(0);
    let mut dom = VirtualDom::new(Observer);
    dom.rebuild_in_place();
    let state = STATE.get().expect("observer stored its signal");
    (dom, state)
}

pub fn renders() -> usize {
    RENDERS.get()
}
