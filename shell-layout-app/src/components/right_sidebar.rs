use dioxus::prelude::*;
use shell_layout_lib::LayoutState;

use crate::components::layout::LayoutContext;
use crate::i18n::use_locale;

/// Panel docked to the right edge below the toolbar. It slides with the same
/// timing the main content uses to make room for it.
#[component]
pub fn RightSidebar(layout: LayoutContext) -> Element {
    let locale = use_locale();
    let open = layout.has_right_sidebar();
    let offset = if open { "0" } else { "100%" };
    let transition = (layout.transition)().css("transform");
    let style = format!(
        "top: {}; width: {}; transform: translateX({offset}); transition: {transition};",
        layout.toolbar_height(),
        layout.right_sidebar_width(),
    );

    rsx! {
        aside {
            class: "right-sidebar",
            aria_hidden: !open,
            style: "{style}",
            h2 { class: "right-sidebar__title", {locale.t("right-sidebar-title")} }
            p { {locale.t("right-sidebar-body")} }
        }
    }
}
