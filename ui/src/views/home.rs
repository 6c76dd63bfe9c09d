use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Landing page. `category` is the raw `?category=` value; empty means unfiltered.
#[component]
pub fn Home(category: String) -> Element {
    i18n::init();

    rsx! {
        section { class: "page page--home",
            h1 { class: "page__title", {t!("home-title")} }
            if category.is_empty() {
                p { class: "page__lead", {t!("home-intro")} }
            } else {
                p { class: "page__lead page__lead--filtered",
                    {t!("home-filtered", category = category.clone())}
                }
            }
        }
    }
}
