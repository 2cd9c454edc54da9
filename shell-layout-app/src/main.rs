use dioxus::prelude::*;
use shell_layout_lib::LayoutConfig;

mod clock;
/// Define a components module that contains all shared components for our app.
mod components;
mod i18n;

use components::{
    content_page::ContentPage, layout::use_layout_provider, main_content::MainContent,
    right_sidebar::RightSidebar, toolbar::Toolbar,
};

// The asset macro also minifies some assets like CSS and JS to make bundled smaller
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

const LAYOUT_JSON: &str = include_str!("../assets/layout.json");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::DEBUG) {
        eprintln!("Logger already initialised: {e}");
    }
    dioxus::launch(App);
}

fn load_layout_config() -> LayoutConfig {
    match LayoutConfig::from_json(LAYOUT_JSON) {
        Ok(config) => {
            tracing::info!("Layout config loaded");
            config
        }
        Err(e) => {
            tracing::error!("{e}, falling back to defaults");
            LayoutConfig::default()
        }
    }
}

/// Root of the shell: toolbar on top, main content and the right sidebar below.
#[component]
fn App() -> Element {
    let config = use_hook(load_layout_config);
    let layout = use_layout_provider(&config);
    i18n::use_locale_provider(i18n::DEFAULT_LOCALE);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "app-shell",
            Toolbar { layout }
            div { class: "app-body",
                MainContent { layout, ContentPage {} }
                RightSidebar { layout }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_layout_config_is_valid() {
        assert!(LayoutConfig::from_json(LAYOUT_JSON).is_ok());
    }
}
