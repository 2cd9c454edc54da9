use crate::length::Length;

/// Right padding the main content needs to stay clear of the right sidebar.
#[must_use]
pub fn padding_target(has_right_sidebar: bool, right_sidebar_width: Length) -> Length {
    if has_right_sidebar {
        right_sidebar_width
    } else {
        Length::ZERO
    }
}

/// Read access to the shell geometry that content components lay themselves
/// out against.
pub trait LayoutState {
    fn toolbar_height(&self) -> Length;
    fn has_right_sidebar(&self) -> bool;
    fn right_sidebar_width(&self) -> Length;

    fn padding_target(&self) -> Length {
        padding_target(self.has_right_sidebar(), self.right_sidebar_width())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSnapshot {
    pub toolbar_height: Length,
    pub has_right_sidebar: bool,
    pub right_sidebar_width: Length,
}

impl LayoutState for LayoutSnapshot {
    fn toolbar_height(&self) -> Length {
        self.toolbar_height
    }

    fn has_right_sidebar(&self) -> bool {
        self.has_right_sidebar
    }

    fn right_sidebar_width(&self) -> Length {
        self.right_sidebar_width
    }
}
