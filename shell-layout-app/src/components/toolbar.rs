use dioxus::prelude::*;
use shell_layout_lib::{LayoutState, Length};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::components::layout::LayoutContext;
use crate::i18n::{use_locale, LOCALES};

#[derive(EnumIter, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SidebarWidthPreset {
    Narrow,
    Wide,
}

impl SidebarWidthPreset {
    #[must_use]
    pub fn width(self) -> Length {
        match self {
            SidebarWidthPreset::Narrow => Length::px(240.0),
            SidebarWidthPreset::Wide => Length::px(320.0),
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            SidebarWidthPreset::Narrow => "sidebar-width-narrow",
            SidebarWidthPreset::Wide => "sidebar-width-wide",
        }
    }
}

#[component]
pub fn Toolbar(mut layout: LayoutContext) -> Element {
    let mut locale = use_locale();
    let open = layout.has_right_sidebar();
    let current_width = layout.right_sidebar_width();
    let toolbar_style = format!("height: {};", layout.toolbar_height());
    let toggle_label = if open {
        locale.t("right-sidebar-hide")
    } else {
        locale.t("right-sidebar-show")
    };

    let width_buttons = SidebarWidthPreset::iter().map(|preset| {
        let cls = if preset.width() == current_width {
            "toolbar__button toolbar__button--selected"
        } else {
            "toolbar__button"
        };
        rsx!(
            button {
                key: "{preset:?}",
                class: cls,
                onclick: move |_| layout.set_right_sidebar_width(preset.width()),
                {locale.t(preset.label_key())}
            }
        )
    });

    let lang_buttons = LOCALES.iter().map(|lang| {
        let cls = if *lang == (locale.lang)() {
            "toolbar__button toolbar__button--selected"
        } else {
            "toolbar__button"
        };
        rsx!(
            button {
                key: "{lang}",
                class: cls,
                onclick: move |_| locale.set(lang),
                "{lang}"
            }
        )
    });

    rsx! {
        header {
            class: "toolbar",
            style: "{toolbar_style}",
            span { class: "toolbar__title", {locale.t("app-title")} }
            nav { class: "toolbar__actions",
                {width_buttons}
                button {
                    class: "toolbar__button toolbar__button--primary",
                    aria_pressed: open,
                    onclick: move |_| layout.toggle_right_sidebar(),
                    {toggle_label}
                }
                span { class: "toolbar__label", {locale.t("language-label")} }
                {lang_buttons}
            }
        }
    }
}
