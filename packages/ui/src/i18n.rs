use dioxus::prelude::*;
use shop::storage::{Storage, LOCALE_KEY};
use shop::Locale;

use crate::BrowserStorage;

/// Provide `Signal<Locale>` to the component tree. A locale saved by an
/// earlier visit wins over `default`.
#[component]
pub fn I18nProvider(default: Locale, children: Element) -> Element {
    let locale = use_signal(move || {
        BrowserStorage
            .get(LOCALE_KEY)
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or(default)
    });
    use_context_provider(|| locale);

    rsx! { {children} }
}

pub fn use_locale() -> Signal<Locale> {
    if let Some(sig) = try_use_context::<Signal<Locale>>() {
        return sig;
    }

    tracing::warn!("i18n: missing I18nProvider context, using a local en signal");
    use_signal(|| Locale::FALLBACK)
}

/// Switch language and remember the choice. Safe to call from event handlers.
pub fn set_locale(locale: Locale) {
    if let Some(mut sig) = try_consume_context::<Signal<Locale>>() {
        sig.set(locale);
    }
    BrowserStorage.set(LOCALE_KEY, locale.code());
}
