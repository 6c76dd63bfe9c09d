use crate::i18n;
use crate::t;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    i18n::init();

    rsx! {
        section { class: "page page--about",
            h1 { class: "page__title", {t!("about-title")} }
            p { class: "page__lead", {t!("about-body")} }
        }
    }
}
