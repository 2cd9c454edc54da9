use serde::{Deserialize, Serialize};

use crate::layout_state::LayoutSnapshot;
use crate::length::Length;
use crate::transition::{LAYOUT_ANIMATION_TRANSITION, Transition};

pub const DEFAULT_TOOLBAR_HEIGHT: Length = Length::px(56.0);
pub const DEFAULT_RIGHT_SIDEBAR_WIDTH: Length = Length::px(320.0);

/// Startup geometry of the application shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub toolbar_height: Length,
    pub right_sidebar_width: Length,
    pub right_sidebar_open: bool,
    pub transition: Transition,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            toolbar_height: DEFAULT_TOOLBAR_HEIGHT,
            right_sidebar_width: DEFAULT_RIGHT_SIDEBAR_WIDTH,
            right_sidebar_open: false,
            transition: LAYOUT_ANIMATION_TRANSITION,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: LayoutConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid layout config: {e}"))?;
        if config.transition.duration_ms < 0.0 || config.transition.delay_ms < 0.0 {
            return Err("Invalid layout config: transition times must not be negative".to_string());
        }
        Ok(config)
    }

    #[must_use]
    pub fn initial_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            toolbar_height: self.toolbar_height,
            has_right_sidebar: self.right_sidebar_open,
            right_sidebar_width: self.right_sidebar_width,
        }
    }
}
