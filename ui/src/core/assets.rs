//! CDN asset URL helpers.
//!
//! Every image the navbar shows (logo, badges, menu icons) is served from the
//! image CDN under a fixed, versioned base path. The base can be swapped at
//! build time with `UIPEDIA_CDN_BASE`; it must end with a slash.

const DEFAULT_CDN_BASE: &str = "https://res.cloudinary.com/dulafvhbs/image/upload/v1719131243/";

/// Versioned CDN base every public asset key is appended to.
pub const CDN_BASE: &str = match option_env!("UIPEDIA_CDN_BASE") {
    Some(base) => base,
    None => DEFAULT_CDN_BASE,
};

/// Full URL for an arbitrary key under the CDN base.
pub fn public_url(key: &str) -> String {
    format!("{CDN_BASE}{key}")
}

/// Full URL for a named SVG under `assets/`.
///
/// Unknown names are not validated; they simply produce a URL the CDN will 404 on.
pub fn svg_asset_url(name: &str) -> String {
    public_url(&format!("assets/{name}.svg"))
}
