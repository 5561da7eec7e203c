use dioxus::prelude::*;
use shop::store::ProfileUpdate;
use shop::t;

use super::ShopFrame;
use crate::labels::role_label;
use crate::Notice;

#[component]
pub fn ProfilePage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();

    let email = app.email();
    let account = app.store.read().user_by_email(&email).cloned();
    let mut name = use_signal(|| account.as_ref().map(|a| a.name.clone()).unwrap_or_default());
    let mut phone = use_signal(|| account.as_ref().and_then(|a| a.phone.clone()).unwrap_or_default());
    let mut address = use_signal(|| account.as_ref().and_then(|a| a.address.clone()).unwrap_or_default());

    let Some(account) = account else {
        return rsx! {
            ShopFrame { title: t(locale, "profile.title"),
                p { class: "error", {t(locale, "common.not_found")} }
            }
        };
    };

    let on_save = move |_| {
        let update = ProfileUpdate {
            name: name(),
            phone: Some(phone()),
            address: Some(address()),
        };
        match app.update_store(|s| s.update_profile(&email, update)) {
            Ok(_) => toasts.notify(locale, Notice::Saved(None)),
            Err(err) => toasts.store_error(locale, &err),
        }
    };

    rsx! {
        ShopFrame { title: t(locale, "profile.title"),
            div { class: "panel form",
                dl { class: "facts",
                    dt { {t(locale, "common.email")} }
                    dd { "{account.email}" }
                    dt { {t(locale, "users.role")} }
                    dd { {role_label(locale, account.role)} }
                    dt { {t(locale, "users.joined")} }
                    dd { {account.created_at.format("%Y-%m-%d").to_string()} }
                }
                label { {t(locale, "common.name")} }
                input { value: "{name}", oninput: move |e| name.set(e.value()) }
                label { {t(locale, "common.phone")} }
                input { r#type: "tel", value: "{phone}", oninput: move |e| phone.set(e.value()) }
                label { {t(locale, "common.address")} }
                textarea { value: "{address}", oninput: move |e| address.set(e.value()), rows: 3 }
                button { class: "btn primary", onclick: on_save, {t(locale, "common.save")} }
            }
        }
    }
}
