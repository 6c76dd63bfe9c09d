use crate::core::assets::svg_asset_url;
use crate::core::platform;
use crate::i18n;
use crate::menu::{LinkAction, MenuItem};
use crate::navbar::{is_category_selected, navbar_class, NavbarState};
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use super::resize::use_viewport_tracking;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));
const CHEVRON_ICON: Asset = asset!("/assets/icons/chevron_right.svg");
const MENU_ICON: Asset = asset!("/assets/icons/menu.svg");

/// Router-aware links supplied by the platform crate.
///
/// `ui` does not know each platform's `Route` enum, so the logo link and the
/// inline "Design Library" link are built by closures the platform registers.
/// Each closure wraps the given children in a `Link` to the matching route.
/// `navigate` pushes an app path (e.g. `/about`) onto the router and returns
/// `false` if the path is not a route; dropdown entries use it wherever the
/// router owns history.
/// Without a registered builder the navbar falls back to plain anchors and
/// `window.open`, which trigger a full page load.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |children| rsx!( Link { class: "navbar__brand-link", to: Route::Home { category: String::new() }, {children} } ),
///     design_library: |children| rsx!( Link { class: "navbar__link", to: Route::DesignLibrary {}, {children} } ),
///     navigate: |path| path.parse::<Route>().map(|route| { navigator().push(route); }).is_ok(),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(children: Element) -> Element,
    pub design_library: fn(children: Element) -> Element,
    pub navigate: fn(path: &str) -> bool,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

fn home_link(children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.home)(children),
        None => rsx! {
            a { class: "navbar__brand-link", href: "/", {children} }
        },
    }
}

fn open_menu_item(item: &MenuItem) {
    match item.action(platform::ROUTES_IN_APP) {
        LinkAction::Route(path) => {
            let routed = NAV_BUILDER.get().is_some_and(|b| (b.navigate)(path));
            if routed {
                debug!(path, "navbar menu routed in app");
            } else {
                platform::follow_link(path, item.target);
            }
        }
        LinkAction::Window(url, target) => platform::follow_link(url, target),
    }
}

/// Writes `category_selected` only when the query value changes it.
fn sync_category(mut state: Signal<NavbarState>, category: Option<&str>) -> bool {
    let selected = is_category_selected(category);
    if state.peek().category_selected == selected {
        return false;
    }
    debug!(selected, "navbar category filter changed");
    state.write().category_selected = selected;
    true
}

fn toggle_menu(mut state: Signal<NavbarState>) {
    state.write().toggle_menu();
}

fn design_library_link(children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.design_library)(children),
        None => rsx! {
            a { class: "navbar__link", href: crate::menu::DESIGN_LIBRARY_PATH, {children} }
        },
    }
}

/// The site navbar: logo, inline desktop links and the dropdown menu.
///
/// `category` is the current `?category=` query value. The search lists and
/// `show_search_bar` are kept in [`NavbarState`] but not rendered here.
///
/// A host that provides a `Signal<NavbarState>` context shares it with the
/// navbar (to render its own search bar from it, say); otherwise the navbar
/// keeps a private one.
#[component]
pub fn ResourceNavbar(
    #[props(default)] featured_searches: Vec<String>,
    #[props(default)] top_searches: Vec<String>,
    #[props(default = true)] show_search_bar: bool,
    #[props(default)] sticky: bool,
    category: ReadOnlySignal<Option<String>>,
) -> Element {
    i18n::init();

    let own_state =
        use_signal(move || NavbarState::new(featured_searches, top_searches, show_search_bar));
    let state = try_use_context::<Signal<NavbarState>>().unwrap_or(own_state);

    use_effect(move || {
        sync_category(state, category.read().as_deref());
    });

    use_viewport_tracking(state);

    let snapshot = state.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        NavbarView {
            state: snapshot,
            sticky,
            on_toggle: move |_| toggle_menu(state),
        }
    }
}

/// Stateless rendering of a [`NavbarState`] snapshot.
#[component]
pub fn NavbarView(
    state: NavbarState,
    #[props(default)] sticky: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    i18n::init();

    let brand = if state.show_home_affordance() {
        rsx! {
            div { class: "navbar__home",
                img { class: "navbar__home-chevron", src: CHEVRON_ICON, alt: "" }
                span { {t!("nav-home")} }
            }
        }
    } else {
        rsx! {
            img {
                class: "navbar__logo",
                src: svg_asset_url("logo"),
                alt: t!("nav-logo-alt"),
                width: "90",
                height: "22",
            }
        }
    };

    let design_library = rsx! {
        span { class: "navbar__link-label",
            span { {t!("nav-design-library")} }
            img {
                class: "navbar__badge",
                src: svg_asset_url("coming_soon"),
                alt: t!("nav-coming-soon"),
            }
        }
    };

    let items = state.menu_items();
    let expanded = state.menu_open;

    rsx! {
        nav { class: navbar_class(sticky),
            div { class: "navbar__brand", {home_link(brand)} }

            div { class: "navbar__links",
                if state.show_desktop_links() {
                    {design_library_link(design_library)}
                    span { class: "navbar__link", {t!("nav-resources")} }
                }

                span { class: "navbar__menu",
                    button {
                        class: "navbar__menu-toggle",
                        r#type: "button",
                        aria_label: t!("nav-menu-toggle"),
                        aria_expanded: "{expanded}",
                        onclick: move |_| on_toggle.call(()),
                        img { src: MENU_ICON, alt: "" }
                    }
                    div { class: state.dropdown_class(),
                        for (index, item) in items.into_iter().enumerate() {
                            MenuEntry { key: "{index}", item }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuEntry(item: MenuItem) -> Element {
    let icon_src = item.icon_url();
    let icon = item.icon;
    let name = item.name.clone();

    rsx! {
        div {
            class: "navbar__item",
            onclick: move |_| open_menu_item(&item),
            img { class: "navbar__item-icon", src: icon_src, alt: icon }
            span { "{name}" }
        }
    }
}
