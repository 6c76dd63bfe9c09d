use crate::core::assets::svg_asset_url;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

#[component]
pub fn DesignLibrary() -> Element {
    i18n::init();

    rsx! {
        section { class: "page page--design-library",
            h1 { class: "page__title",
                {t!("design-library-title")}
                img {
                    class: "navbar__badge",
                    src: svg_asset_url("coming_soon"),
                    alt: t!("nav-coming-soon"),
                }
            }
            p { class: "page__lead", {t!("design-library-body")} }
        }
    }
}
