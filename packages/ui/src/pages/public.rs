use chrono::Utc;
use dioxus::prelude::*;
use shop::store::Registration;
use shop::t;
use crate::Notice;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

#[component]
pub fn LoginPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(String::new);

    let on_submit = move |_| {
        let result = app
            .store
            .read()
            .authenticate(&email(), &password())
            .cloned();
        match result {
            Ok(account) => {
                app.login(&account);
                nav.replace(account.role.home_path());
            }
            Err(err) => {
                status.set(err.to_string());
                toasts.store_error(locale, &err);
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        div { class: "auth_card",
            p { class: "welcome", {t(locale, "welcomeMessage")} }
            h1 { {t(locale, "auth.login.title")} }
            label { {t(locale, "common.email")} }
            input {
                r#type: "email",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
            }
            label { {t(locale, "auth.password")} }
            input {
                r#type: "password",
                value: "{password}",
                oninput: move |e| password.set(e.value()),
            }
            button { class: "btn primary", onclick: on_submit, {t(locale, "auth.login.submit")} }
            if !status().is_empty() {
                p { class: "error", "{status}" }
            }
            p { class: "hint",
                {t(locale, "auth.no_account")}
                " "
                Link { to: "/register", {t(locale, "nav.register")} }
            }
        }
    }
}

#[component]
pub fn RegisterPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(String::new);

    let on_submit = move |_| {
        let registration = Registration {
            email: email(),
            name: name(),
            password: password(),
        };
        match app.update_store(|s| s.register(registration, Utc::now())) {
            Ok(_) => {
                toasts.notify(locale, Notice::Registered);
                nav.push("/login");
            }
            Err(err) => {
                status.set(err.to_string());
                toasts.store_error(locale, &err);
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        div { class: "auth_card",
            h1 { {t(locale, "auth.register.title")} }
            label { {t(locale, "common.name")} }
            input { value: "{name}", oninput: move |e| name.set(e.value()) }
            label { {t(locale, "common.email")} }
            input {
                r#type: "email",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
            }
            label { {t(locale, "auth.password")} }
            input {
                r#type: "password",
                value: "{password}",
                oninput: move |e| password.set(e.value()),
            }
            button { class: "btn primary", onclick: on_submit, {t(locale, "auth.register.submit")} }
            if !status().is_empty() {
                p { class: "error", "{status}" }
            }
            p { class: "hint",
                {t(locale, "auth.have_account")}
                " "
                Link { to: "/login", {t(locale, "nav.login")} }
            }
        }
    }
}

/// Clears the session and the cart, then goes back to the login page.
#[component]
pub fn LogoutPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let nav = use_navigator();

    use_effect(move || {
        app.logout();
        nav.replace(shop::LOGIN_PATH);
    });

    rsx! {
        div { class: "auth_card",
            p { class: "hint", {t(locale, "auth.logging_out")} }
        }
    }
}

#[component]
pub fn NotFoundPage(path: String) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let home = app
        .session
        .read()
        .role
        .map(|r| r.home_path())
        .unwrap_or(shop::LOGIN_PATH);

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        div { class: "auth_card",
            h1 { {t(locale, "notfound.title")} }
            p { {t(locale, "notfound.body")} }
            p { class: "hint", code { "{path}" } }
            Link { class: "btn primary", to: home, {t(locale, "common.back")} }
        }
    }
}
