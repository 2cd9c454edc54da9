//! Components of the application shell: the toolbar, the right sidebar and the
//! main content region between them, plus the layout context they share.

pub mod content_page;
pub mod layout;
pub mod main_content;
pub mod padding_animation;
pub mod right_sidebar;
pub mod toolbar;
