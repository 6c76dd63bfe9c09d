#![cfg(test)]
//! The desktop and web layouts mount the same navbar; keep their props in step.

const DESKTOP_MAIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"));
const WEB_MAIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/src/main.rs"));

fn navbar_mount(src: &str) -> &str {
    src.lines()
        .map(str::trim)
        .find(|l| l.starts_with("ResourceNavbar {"))
        .expect("layout mounts ResourceNavbar")
}

#[test]
fn both_layouts_mount_a_sticky_navbar() {
    assert_eq!(navbar_mount(DESKTOP_MAIN), navbar_mount(WEB_MAIN));
    assert!(navbar_mount(DESKTOP_MAIN).contains("sticky: true"));
}

#[test]
fn both_layouts_register_in_app_navigation() {
    for src in [DESKTOP_MAIN, WEB_MAIN] {
        assert!(src.contains("navigate: nav_navigate"));
        assert!(src.contains("navigator().push(route)"));
    }
}
