use dioxus::prelude::*;
use shell_layout_lib::content_region::{ContentRegionStyle, MAIN_CONTENT_ID};
use shell_layout_lib::LayoutState;
use std::rc::Rc;

use super::layout::LayoutContext;
use super::padding_animation::use_padding_tween;

/// Main content region: takes the space left by its siblings, scrolls
/// vertically and keeps clear of the right sidebar.
#[component]
pub fn MainContent(layout: LayoutContext, children: Element) -> Element {
    let padding = use_padding_tween(layout);
    let style = ContentRegionStyle::new(layout.toolbar_height(), padding());

    rsx! {
        div {
            id: MAIN_CONTENT_ID,
            class: "main-content",
            style: style.to_css(),
            onmounted: move |e| {
                let Event { data, .. } = e;
                publish_root(layout.main_content_ref, data);
            },
            {children}
        }
    }
}

fn publish_root(mut slot: Signal<Option<Rc<MountedData>>>, root: Rc<MountedData>) {
    tracing::debug!("Main content mounted");
    slot.set(Some(root));
}
