use dioxus::prelude::*;
use shop::auth::email_label;
use shop::{t, Locale};

/// Account control in the top-right of the nav:
/// - logged out: "Log in" and "Register" links
/// - logged in: initials button → dropdown (Profile, language, Log out)
#[component]
pub fn AccountMenu() -> Element {
    let app = crate::use_app();
    let session = app.session.read().clone();
    let locale = crate::use_locale()();

    let mut open = use_signal(|| false);

    let Some(email) = session.email.clone().filter(|_| session.is_signed_in()) else {
        return rsx! {
            div { class: "account_links",
                Link { class: "btn", to: "/login", {t(locale, "nav.login")} }
                Link { class: "btn primary", to: "/register", {t(locale, "nav.register")} }
                LocaleSwitch {}
            }
        };
    };
    let initials = initials(&email);
    let is_customer = session.role == Some(shop::Role::Customer);

    rsx! {
        div { class: "account_menu",
            button {
                class: "avatar_btn",
                title: "{email_label(&email)}",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                span { class: "avatar_fallback", "{initials}" }
            }

            if open() {
                div { class: "dropdown",
                    div { class: "dropdown_item hint", "{email}" }
                    if is_customer {
                        Link {
                            class: "dropdown_item",
                            to: "/customer/profile",
                            onclick: move |_| open.set(false),
                            {t(locale, "nav.profile")}
                        }
                    }
                    div { class: "dropdown_item",
                        span { class: "hint", {t(locale, "lang.label")} }
                        LocaleSwitch {}
                    }
                    Link {
                        class: "dropdown_item danger",
                        to: "/logout",
                        onclick: move |_| open.set(false),
                        {t(locale, "nav.logout")}
                    }
                }
            }
        }
    }
}

#[component]
fn LocaleSwitch() -> Element {
    let current = crate::use_locale()();
    rsx! {
        div { class: "locale_switch",
            for locale in Locale::ALL {
                button {
                    key: "{locale:?}",
                    class: if locale == current { "btn small active" } else { "btn small" },
                    onclick: move |_| crate::set_locale(locale),
                    {locale.code().to_uppercase()}
                }
            }
        }
    }
}

fn initials(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut parts = local
        .split(['.', '_', '-', '+'])
        .filter(|p| !p.is_empty());
    let a = parts.next().and_then(|s| s.chars().next());
    let b = parts.next().and_then(|s| s.chars().next());
    match (a, b) {
        (Some(a), Some(b)) => format!("{}{}", a.to_ascii_uppercase(), b.to_ascii_uppercase()),
        (Some(a), None) => format!("{}", a.to_ascii_uppercase()),
        _ => "U".to_string(),
    }
}
