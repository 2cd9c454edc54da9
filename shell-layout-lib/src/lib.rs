pub mod animator;
pub mod config;
pub mod content_region;
pub mod layout_state;
pub mod length;
pub mod transition;
pub mod tween;

pub use animator::{Frame, PaddingAnimator};
pub use config::LayoutConfig;
pub use content_region::ContentRegionStyle;
pub use layout_state::{LayoutSnapshot, LayoutState};
pub use length::{Length, LengthParseError, LengthUnit};
pub use transition::{Easing, LAYOUT_ANIMATION_TRANSITION, Transition};
pub use tween::Tween;
