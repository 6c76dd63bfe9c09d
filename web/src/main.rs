use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, ResourceNavbar};
use ui::views::{About, DesignLibrary, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/?:category")]
    Home { category: String },
    #[route("/about")]
    About {},
    #[route("/design-library")]
    DesignLibrary {},
}

fn nav_home(children: Element) -> Element {
    rsx!(Link {
        class: "navbar__brand-link",
        to: Route::Home { category: String::new() },
        {children}
    })
}

fn nav_design_library(children: Element) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::DesignLibrary {},
        {children}
    })
}

/// Pushes an app path such as `/about` onto the router.
fn nav_navigate(path: &str) -> bool {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
            true
        }
        Err(_) => false,
    }
}

fn main() {
    dioxus::launch(App);
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
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Layout that feeds the current `?category=` value into the shared navbar.
#[component]
fn WebNavbar() -> Element {
    let category = match use_route::<Route>() {
        Route::Home { category } if !category.is_empty() => Some(category),
        _ => None,
    };

    rsx! {
        ResourceNavbar { sticky: true, category }
        Outlet::<Route> {}
    }
}
