//! Shared UI crate for UIPedia: the resource navbar, its helpers and the
//! pages the platform crates route to.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod menu;
pub mod navbar;
pub mod views;

pub mod components {
    pub mod app_navbar;
    mod resize;

    #[cfg(test)]
    mod harness;

    pub use app_navbar::{register_nav, NavBuilder, NavbarView, ResourceNavbar};
}

pub use crate::core::assets::svg_asset_url;

/// Shared site theme; platform crates link or inline it.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
