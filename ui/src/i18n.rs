//! Localization for `uipedia-ui`.
//!
//! Strings are Fluent messages embedded at compile time:
//! - `i18n-embed` picks the language and loads bundles
//! - `rust-embed` bakes `i18n/**` into the binary
//! - `i18n-embed-fl` checks every `fl!` key against the fallback file
//!
//! Layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/uipedia-ui.ftl   (fallback/reference)
//!   es-ES/uipedia-ui.ftl
//!   fr-FR/uipedia-ui.ftl
//! ```
//!
//! Call [`init`] once before the first lookup (it is idempotent), then use
//! `t!("nav-home")` anywhere in the crate.
//!
//! Desktop builds ask the OS for preferred languages; WASM builds read
//! `navigator.languages`.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Looks up a message through the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-home")
/// t!("home-filtered", category = "icons")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "uipedia-ui";

const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shipped_locales_are_embedded() {
        assert_eq!(available_languages(), ["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn fallback_lookup_works() {
        init();
        set_language("en-US").unwrap();
        assert_eq!(t!("nav-home"), "Home");
        assert_eq!(t!("nav-logo-alt"), "UIPedia Logo");
    }

    #[test]
    fn unknown_language_keeps_a_working_bundle() {
        init();
        set_language("en-US").unwrap();
        let _ = set_language("zz-ZZ");
        assert!(!t!("menu-about").is_empty());
        set_language("en-US").unwrap();
    }

    #[test]
    fn invalid_tag_is_ignored() {
        assert!(set_language("not a language tag!").is_ok());
    }
}
