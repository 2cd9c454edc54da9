use dioxus::prelude::*;
use shell_layout_lib::{layout_state::padding_target, Frame, LayoutState, Length, PaddingAnimator};
use std::time::Duration;

use crate::clock;
use crate::components::layout::LayoutContext;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Right padding of the main content, following the right sidebar.
///
/// Mounting starts at rest on the current target. Later changes move from
/// the value on screen, and a newer change stops the frames of an older one.
pub fn use_padding_tween(layout: LayoutContext) -> Signal<Length> {
    let mut animator = use_signal(|| {
        PaddingAnimator::mount(
            padding_target(
                *layout.has_right_sidebar.peek(),
                *layout.right_sidebar_width.peek(),
            ),
            *layout.transition.peek(),
        )
    });
    let mut padding = use_signal(|| animator.peek().target());
    let target = use_memo(move || layout.padding_target());

    use_effect(move || {
        let target = target();
        let transition = (layout.transition)();
        let Some(generation) = animator.write().update(target, transition, clock::now_ms()) else {
            return;
        };

        spawn(async move {
            loop {
                futures_timer::Delay::new(FRAME_INTERVAL).await;
                let frame = animator.write().frame(generation, clock::now_ms());
                match frame {
                    Frame::Stale => break,
                    Frame::Running(value) => padding.set(value),
                    Frame::Settled(value) => {
                        padding.set(value);
                        break;
                    }
                }
            }
        });
    });

    padding
}
