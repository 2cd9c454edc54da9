//! Style of the main content region: the flexible, scrollable area next to
//! the sidebars.

use crate::length::Length;

pub const MAIN_CONTENT_ID: &str = "main-content";
/// Custom property carrying the toolbar height to everything inside the region.
pub const APP_HEADER_HEIGHT_VAR: &str = "--app-header-height";
pub const CONTENT_Z_INDEX: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentRegionStyle {
    pub toolbar_height: Length,
    pub padding_right: Length,
}

impl ContentRegionStyle {
    #[must_use]
    pub fn new(toolbar_height: Length, padding_right: Length) -> Self {
        Self {
            toolbar_height,
            padding_right,
        }
    }

    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("z-index", CONTENT_Z_INDEX.to_string()),
            (APP_HEADER_HEIGHT_VAR, self.toolbar_height.to_string()),
            ("display", "flex".to_string()),
            ("flex", "1".to_string()),
            ("justify-content", "center".to_string()),
            ("overflow-y", "auto".to_string()),
            ("padding-right", self.padding_right.to_string()),
        ]
    }

    /// Inline `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.declarations()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
