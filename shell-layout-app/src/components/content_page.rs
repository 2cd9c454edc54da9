use dioxus::prelude::*;

use crate::components::layout::{use_layout_context, use_main_content_width};
use crate::i18n::use_locale;

#[component]
pub fn ContentPage() -> Element {
    let locale = use_locale();
    let width = use_main_content_width(use_layout_context());

    let measured = match &*width.read() {
        Some(Some(px)) => format!("{px:.0}px"),
        _ => locale.t("content-width-unknown"),
    };

    rsx! {
        article { class: "content-page",
            h1 { {locale.t("content-heading")} }
            p { {locale.t("content-intro")} }
            p { class: "content-page__measure",
                {locale.t("content-width")}
                ": "
                "{measured}"
            }
        }
    }
}
