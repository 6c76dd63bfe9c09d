//! Display state for the resource navbar.

use crate::core::viewport::Viewport;
use crate::i18n;
use crate::menu::{menu_items_for, MenuItem};
use crate::t;

/// Everything the navbar derives from its environment for one mounted view.
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarState {
    pub menu_open: bool,
    pub viewport: Viewport,
    pub category_selected: bool,
    pub search_placeholder: String,
    pub show_search_bar: bool,
    pub featured_searches: Vec<String>,
    pub top_searches: Vec<String>,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), true)
    }
}

impl NavbarState {
    pub fn new(
        featured_searches: Vec<String>,
        top_searches: Vec<String>,
        show_search_bar: bool,
    ) -> Self {
        i18n::init();
        Self {
            menu_open: false,
            viewport: Viewport::Unknown,
            category_selected: false,
            search_placeholder: t!("search-placeholder"),
            show_search_bar,
            featured_searches,
            top_searches,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Narrow screens with an active category swap the logo for a way back home.
    pub fn show_home_affordance(&self) -> bool {
        self.category_selected && self.viewport.is_mobile()
    }

    pub fn show_desktop_links(&self) -> bool {
        self.viewport.is_desktop()
    }

    pub fn menu_items(&self) -> Vec<MenuItem> {
        menu_items_for(self.viewport)
    }

    pub fn dropdown_class(&self) -> &'static str {
        if self.menu_open {
            "navbar__dropdown navbar__dropdown--open"
        } else {
            "navbar__dropdown navbar__dropdown--hidden"
        }
    }
}

/// An absent or empty `category` query value means no filter.
pub fn is_category_selected(category: Option<&str>) -> bool {
    category.is_some_and(|c| !c.is_empty())
}

pub fn navbar_class(sticky: bool) -> &'static str {
    if sticky {
        "navbar navbar--sticky"
    } else {
        "navbar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(viewport: Viewport, category_selected: bool) -> NavbarState {
        NavbarState {
            viewport,
            category_selected,
            ..NavbarState::default()
        }
    }

    #[test]
    fn starts_closed_and_unclassified() {
        let s = NavbarState::default();
        assert!(!s.menu_open);
        assert_eq!(s.viewport, Viewport::Unknown);
        assert!(!s.category_selected);
        assert!(!s.search_placeholder.is_empty());
    }

    #[test]
    fn toggling_twice_hides_the_dropdown_again() {
        let mut s = NavbarState::default();
        assert!(s.dropdown_class().ends_with("--hidden"));
        s.toggle_menu();
        assert!(s.menu_open);
        assert!(s.dropdown_class().ends_with("--open"));
        s.toggle_menu();
        assert!(!s.menu_open);
        assert!(s.dropdown_class().ends_with("--hidden"));
    }

    #[test]
    fn home_affordance_needs_category_and_mobile() {
        assert!(state(Viewport::Mobile, true).show_home_affordance());
        assert!(!state(Viewport::Mobile, false).show_home_affordance());
        assert!(!state(Viewport::Desktop, true).show_home_affordance());
        assert!(!state(Viewport::Unknown, true).show_home_affordance());
    }

    #[test]
    fn desktop_links_wait_for_a_known_desktop_viewport() {
        assert!(state(Viewport::Desktop, false).show_desktop_links());
        assert!(!state(Viewport::Mobile, false).show_desktop_links());
        assert!(!state(Viewport::Unknown, false).show_desktop_links());
    }

    #[test]
    fn menu_items_follow_the_viewport() {
        assert_eq!(state(Viewport::Mobile, false).menu_items().len(), 4);
        assert_eq!(state(Viewport::Desktop, false).menu_items().len(), 3);
    }

    #[test]
    fn empty_category_is_not_a_filter() {
        assert!(is_category_selected(Some("icons")));
        assert!(!is_category_selected(Some("")));
        assert!(!is_category_selected(None));
    }

    #[test]
    fn sticky_adds_modifier() {
        assert_eq!(navbar_class(false), "navbar");
        assert_eq!(navbar_class(true), "navbar navbar--sticky");
    }
}
