#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, ResourceNavbar};
use ui::views::{About, DesignLibrary, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/?:category")]
    Home { category: String },
    #[route("/about")]
    About {},
    #[route("/design-library")]
    DesignLibrary {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme from ui/; desktop ships no stylesheet of its own.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("UIPedia – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1280.0, 800.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(children: Element) -> Element {
    rsx!(Link { class: "navbar__brand-link", to: Route::Home { category: String::new() }, {children} })
}

fn nav_design_library(children: Element) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::DesignLibrary {}, {children} })
}

/// Pushes an app path such as `/about` onto the router; the desktop history
/// lives in memory, so the webview itself cannot load these paths.
fn nav_navigate(path: &str) -> bool {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
            true
        }
        Err(_) => false,
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    register_nav(NavBuilder {
        home: nav_home,
        design_library: nav_design_library,
        navigate: nav_navigate,
    });

    rsx! {
        // Always inline: packaged desktop builds have no stylesheet on disk.
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout around the shared navbar; resolves `?category=` from the route.
#[component]
fn DesktopNavbar() -> Element {
    let category = match use_route::<Route>() {
        Route::Home { category } if !category.is_empty() => Some(category),
        _ => None,
    };

    rsx! {
        ResourceNavbar { sticky: true, category }

        Outlet::<Route> {}
    }
}
