#![cfg(test)]
/*!
Selector lint for the navbar stylesheet (`ui/assets/styling/navbar.css`).

Every class the navbar component emits must have a rule here; release desktop
builds inline this file, so a renamed selector silently drops styling.
If you rename a class in `ui/src/components/app_navbar.rs` or
`ui/src/navbar.rs`, update the stylesheet and this list together.
*/

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar--sticky",
    ".navbar__brand {",
    ".navbar__brand-link",
    ".navbar__logo",
    ".navbar__home {",
    ".navbar__home-chevron",
    ".navbar__links",
    ".navbar__link {",
    ".navbar__link-label",
    ".navbar__badge",
    ".navbar__menu {",
    ".navbar__menu-toggle",
    ".navbar__dropdown {",
    ".navbar__dropdown--open",
    ".navbar__dropdown--hidden",
    ".navbar__item {",
    ".navbar__item-icon",
];

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !NAVBAR_CSS.contains(*sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors in navbar.css:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn hidden_dropdown_is_not_displayed() {
    let rule = NAVBAR_CSS
        .split(".navbar__dropdown--hidden")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("hidden dropdown rule present");
    assert!(rule.contains("display: none"), "rule was: {rule}");
}

#[test]
fn theme_breakpoint_matches_navbar_breakpoint() {
    // Mobile layout is < 768px, so the theme's last mobile width is 767px.
    assert!(
        THEME_CSS.contains("@media (max-width: 767px)"),
        "theme media query drifted from the navbar breakpoint"
    );
}
