//! Dropdown menu entries.

use crate::core::assets::svg_asset_url;
use crate::core::viewport::Viewport;
use crate::i18n;
use crate::t;

pub const FEEDBACK_FORM_URL: &str = "https://forms.gle/cnggHzPDGdt8tUAd6";
pub const SUGGEST_RESOURCE_FORM_URL: &str = "https://forms.gle/4zuXqj2sw5quZST17";
pub const ABOUT_PATH: &str = "/about";
pub const DESIGN_LIBRARY_PATH: &str = "/design-library";

/// Where a menu entry opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkTarget {
    #[default]
    NewTab,
    SameTab,
}

impl LinkTarget {
    /// Parses the `target` attribute of a menu entry: `"none"` stays in the
    /// current tab, anything else (including no attribute) opens a new tab.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("none") => Self::SameTab,
            _ => Self::NewTab,
        }
    }

    /// Value for the second argument of `window.open`.
    pub fn window_target(self) -> &'static str {
        match self {
            Self::NewTab => "_blank",
            Self::SameTab => "_self",
        }
    }
}

/// How a menu entry is followed once clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// Push an app path onto the host router.
    Route(&'static str),
    /// Hand the URL to `window.open`.
    Window(&'static str, LinkTarget),
}

/// Paths served by the app itself, as opposed to absolute or
/// protocol-relative URLs.
pub fn is_app_path(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//")
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub icon: &'static str,
    pub url: &'static str,
    pub target: LinkTarget,
}

impl MenuItem {
    fn new(name: String, icon: &'static str, url: &'static str) -> Self {
        Self {
            name,
            icon,
            url,
            target: LinkTarget::default(),
        }
    }

    fn target(mut self, attr: &str) -> Self {
        self.target = LinkTarget::from_attr(Some(attr));
        self
    }

    pub fn icon_url(&self) -> String {
        svg_asset_url(self.icon)
    }

    /// `routes_in_app` is set where the host router owns history; app paths
    /// then skip `window.open` whatever their target.
    pub fn action(&self, routes_in_app: bool) -> LinkAction {
        if routes_in_app && is_app_path(self.url) {
            LinkAction::Route(self.url)
        } else {
            LinkAction::Window(self.url, self.target)
        }
    }
}

/// Entries shown on every viewport.
pub fn default_menu_items() -> Vec<MenuItem> {
    i18n::init();
    vec![
        MenuItem::new(t!("menu-share-feedback"), "message_icon", FEEDBACK_FORM_URL),
        MenuItem::new(
            t!("menu-suggest-resources"),
            "chat",
            SUGGEST_RESOURCE_FORM_URL,
        ),
        MenuItem::new(t!("menu-about"), "about_us", ABOUT_PATH).target("none"),
    ]
}

/// Entries that replace the inline desktop links on narrow screens.
pub fn mobile_extra_items() -> Vec<MenuItem> {
    i18n::init();
    vec![MenuItem::new(
        t!("nav-design-library"),
        "box",
        DESIGN_LIBRARY_PATH,
    )]
}

pub fn menu_items_for(viewport: Viewport) -> Vec<MenuItem> {
    let mut items = default_menu_items();
    if viewport.is_mobile() {
        items.extend(mobile_extra_items());
    }
    items
}
