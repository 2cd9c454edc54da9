use dioxus::prelude::*;
use shell_layout_lib::{LayoutConfig, LayoutState, Length, Transition};
use std::{rc::Rc, time::Duration};

/// Shell geometry shared with everything below the app root.
#[derive(Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub toolbar_height: Signal<Length>,
    pub main_content_ref: Signal<Option<Rc<MountedData>>>,
    pub has_right_sidebar: Signal<bool>,
    pub right_sidebar_width: Signal<Length>,
    pub transition: Signal<Transition>,
}

impl LayoutContext {
    pub fn toggle_right_sidebar(&mut self) {
        let open = !*self.has_right_sidebar.peek();
        tracing::debug!("Right sidebar {}", if open { "opened" } else { "closed" });
        self.has_right_sidebar.set(open);
    }

    pub fn set_right_sidebar_width(&mut self, width: Length) {
        if *self.right_sidebar_width.peek() != width {
            tracing::debug!("Right sidebar width set to {width}");
            self.right_sidebar_width.set(width);
        }
    }
}

impl LayoutState for LayoutContext {
    fn toolbar_height(&self) -> Length {
        (self.toolbar_height)()
    }

    fn has_right_sidebar(&self) -> bool {
        (self.has_right_sidebar)()
    }

    fn right_sidebar_width(&self) -> Length {
        (self.right_sidebar_width)()
    }
}

/// Creates the layout signals from `config` and provides them as context.
pub fn use_layout_provider(config: &LayoutConfig) -> LayoutContext {
    let initial = config.initial_snapshot();
    let toolbar_height = use_signal(|| initial.toolbar_height);
    let main_content_ref = use_signal(|| None);
    let has_right_sidebar = use_signal(|| initial.has_right_sidebar);
    let right_sidebar_width = use_signal(|| initial.right_sidebar_width);
    let transition = use_signal(|| config.transition);

    use_context_provider(|| LayoutContext {
        toolbar_height,
        main_content_ref,
        has_right_sidebar,
        right_sidebar_width,
        transition,
    })
}

/// Convenience hook to access the layout provided by an ancestor.
pub fn use_layout_context() -> LayoutContext {
    use_context::<LayoutContext>()
}

/// Width of the mounted main content, re-measured once the padding has
/// finished moving after a sidebar change.
pub fn use_main_content_width(layout: LayoutContext) -> Resource<Option<f64>> {
    use_resource(move || async move {
        let target = layout.padding_target();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let settle = Duration::from_millis(layout.transition.peek().total_ms() as u64);
        let mounted = layout.main_content_ref.read().clone()?;

        futures_timer::Delay::new(settle).await;

        match mounted.get_client_rect().await {
            Ok(rect) => {
                tracing::debug!("Main content measured with padding {target}");
                Some(rect.width())
            }
            Err(e) => {
                tracing::warn!("Failed to measure main content: {e:?}");
                None
            }
        }
    })
}
