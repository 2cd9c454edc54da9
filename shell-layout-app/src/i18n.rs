use dioxus::prelude::*;
use fluent_bundle::{FluentBundle, FluentResource};
use once_cell::unsync::Lazy;
use std::{collections::HashMap, rc::Rc};
use unic_langid::{langid, LanguageIdentifier};

const EN_US_FTL: &str = include_str!("../assets/locales/en-US/main.ftl");
const PL_PL_FTL: &str = include_str!("../assets/locales/pl-PL/main.ftl");

pub const DEFAULT_LOCALE: &str = "en-US";
pub const LOCALES: &[&str] = &["en-US", "pl-PL"];

type BundleRc = Rc<FluentBundle<FluentResource>>;

thread_local! {
    static BUNDLES: Lazy<HashMap<&'static str, BundleRc>> = Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert("en-US", Rc::new(build_bundle(langid!("en-US"), EN_US_FTL)));
        map.insert("pl-PL", Rc::new(build_bundle(langid!("pl-PL"), PL_PL_FTL)));
        map
    });
}

// Both resources are compiled in, a parse failure is a build defect.
fn build_bundle(lang: LanguageIdentifier, ftl: &str) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![lang]);
    let resource =
        FluentResource::try_new(ftl.to_string()).expect("Failed to parse Fluent resources");
    bundle
        .add_resource(resource)
        .expect("Failed to add Fluent resources to bundle");
    bundle
}

fn bundle_for(lang: &str) -> BundleRc {
    BUNDLES.with(|bundles| {
        bundles
            .get(lang)
            .cloned()
            .or_else(|| bundles.get(DEFAULT_LOCALE).cloned())
            .expect("Default locale bundle missing")
    })
}

fn translate(bundle: &FluentBundle<FluentResource>, key: &str) -> Option<String> {
    let message = bundle.get_message(key)?;
    let pattern = message.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, None, &mut errors);
    if errors.is_empty() {
        Some(value.into_owned())
    } else {
        None
    }
}

/// Known locale matching `lang`, or the default one.
#[must_use]
pub fn resolve_locale(lang: &str) -> &'static str {
    LOCALES
        .iter()
        .find(|known| known.eq_ignore_ascii_case(lang))
        .copied()
        .unwrap_or(DEFAULT_LOCALE)
}

/// Message `key` in `lang`, falling back to the default locale and then to the key.
#[must_use]
pub fn t_in(lang: &str, key: &str) -> String {
    translate(&bundle_for(lang), key)
        .or_else(|| translate(&bundle_for(DEFAULT_LOCALE), key))
        .unwrap_or_else(|| key.to_string())
}

#[derive(Clone, Copy, PartialEq)]
pub struct LocaleContext {
    pub lang: Signal<&'static str>,
}

impl LocaleContext {
    /// Translates `key` and subscribes the caller to locale changes.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        t_in((self.lang)(), key)
    }

    pub fn set(&mut self, lang: &str) {
        let resolved = resolve_locale(lang);
        tracing::debug!("Switching locale to {resolved}");
        self.lang.set(resolved);
    }
}

pub fn use_locale_provider(initial: &str) -> LocaleContext {
    let lang = use_signal(|| resolve_locale(initial));
    use_context_provider(|| LocaleContext { lang })
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("pl-PL"), "pl-PL");
        assert_eq!(resolve_locale("pl-pl"), "pl-PL");
        assert_eq!(resolve_locale("de-DE"), DEFAULT_LOCALE);
    }

    #[test]
    fn test_translate_and_fallbacks() {
        assert_eq!(t_in("en-US", "right-sidebar-title"), "Details");
        assert_eq!(t_in("pl-PL", "right-sidebar-title"), "Szczegóły");
        // unknown locale uses the default bundle
        assert_eq!(t_in("de-DE", "right-sidebar-title"), "Details");
        // missing key is shown as is
        assert_eq!(t_in("en-US", "no-such-key"), "no-such-key");
    }

    #[test]
    fn test_every_key_is_translated_in_every_locale() {
        let keys = EN_US_FTL
            .lines()
            .filter_map(|line| line.split_once(" = ").map(|(key, _)| key.trim()))
            .collect::<Vec<_>>();
        assert!(!keys.is_empty());
        for lang in LOCALES {
            for key in &keys {
                assert!(
                    translate(&bundle_for(lang), key).is_some(),
                    "{key} missing in {lang}"
                );
            }
        }
    }
}
