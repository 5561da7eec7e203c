use dioxus::prelude::*;
use shop::store::CategoryDraft;
use shop::t;

use super::{AdminPage, Missing};
use crate::Notice;

#[component]
pub fn CategoryListPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let store = app.store.read();

    rsx! {
        AdminPage {
            title: t(locale, "categories.title"),
            actions: rsx! {
                Link { class: "btn primary", to: "/admin/categories/new", {t(locale, "categories.new")} }
            },
            if store.categories().is_empty() {
                p { class: "hint", {t(locale, "categories.empty")} }
            } else {
                table { class: "grid",
                    thead {
                        tr {
                            th { {t(locale, "common.id")} }
                            th { {t(locale, "common.name")} }
                            th { {t(locale, "common.description")} }
                            th { {t(locale, "products.title")} }
                            th {}
                        }
                    }
                    tbody {
                        for c in store.categories() {
                            tr { key: "{c.id}",
                                td { "{c.id}" }
                                td { "{c.name}" }
                                td { class: "hint", {crate::forms::truncate(&c.description, 80)} }
                                td { {store.products_in(c.id).count().to_string()} }
                                td { class: "row_actions",
                                    Link { class: "btn small", to: format!("/admin/categories/{}", c.id), {t(locale, "common.view")} }
                                    Link { class: "btn small", to: format!("/admin/categories/{}/edit", c.id), {t(locale, "common.edit")} }
                                    Link { class: "btn small danger", to: format!("/admin/categories/{}/delete", c.id), {t(locale, "common.delete")} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategoryCreatePage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let on_save = move |draft: CategoryDraft| match app.update_store(|s| s.create_category(draft)) {
        Ok(created) => {
            toasts.notify(locale, Notice::Saved(Some(created.name.clone())));
            nav.push(format!("/admin/categories/{}", created.id));
        }
        Err(err) => toasts.store_error(locale, &err),
    };

    rsx! {
        AdminPage {
            title: t(locale, "categories.new"),
            back: "/admin/categories".to_string(),
            CategoryForm { initial: CategoryDraft::default(), on_save }
        }
    }
}

#[component]
pub fn CategoryDetailPage(id: u64) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let store = app.store.read();

    let Ok(category) = store.category(id) else {
        return rsx! {
            AdminPage { title: t(locale, "categories.title"), back: "/admin/categories".to_string(), Missing {} }
        };
    };

    rsx! {
        AdminPage {
            title: category.name.clone(),
            back: "/admin/categories".to_string(),
            actions: rsx! {
                Link { class: "btn", to: format!("/admin/categories/{}/edit", id), {t(locale, "common.edit")} }
            },
            div { class: "panel",
                p { "{category.description}" }
            }
            div { class: "panel",
                h2 { {t(locale, "categories.products")} }
                for p in store.products_in(id) {
                    Link { key: "{p.id}", class: "card", to: format!("/admin/products/{}", p.id),
                        div { class: "card_top",
                            h3 { "{p.name}" }
                            span { class: "price", {shop::format_price(locale, p.price)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategoryEditPage(id: u64) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let initial = app.store.read().category(id).ok().map(|c| CategoryDraft {
        name: c.name.clone(),
        description: c.description.clone(),
    });
    let Some(initial) = initial else {
        return rsx! {
            AdminPage { title: t(locale, "categories.edit"), back: "/admin/categories".to_string(), Missing {} }
        };
    };

    let on_save = move |draft: CategoryDraft| match app.update_store(|s| s.update_category(id, draft)) {
        Ok(_) => {
            toasts.notify(locale, Notice::Saved(None));
            nav.push(format!("/admin/categories/{id}"));
        }
        Err(err) => toasts.store_error(locale, &err),
    };

    rsx! {
        AdminPage {
            title: t(locale, "categories.edit"),
            back: format!("/admin/categories/{id}"),
            CategoryForm { initial, on_save }
        }
    }
}

#[component]
pub fn CategoryDeletePage(id: u64) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let name = app.store.read().category(id).ok().map(|c| c.name.clone());
    let Some(name) = name else {
        return rsx! {
            AdminPage { title: t(locale, "categories.title"), back: "/admin/categories".to_string(), Missing {} }
        };
    };

    let on_confirm = move |_| match app.update_store(|s| s.delete_category(id)) {
        Ok(_) => {
            toasts.notify(locale, Notice::Deleted);
            nav.replace("/admin/categories");
        }
        Err(err) => toasts.store_error(locale, &err),
    };

    rsx! {
        AdminPage {
            title: t(locale, "categories.delete_confirm"),
            back: format!("/admin/categories/{id}"),
            div { class: "panel",
                p { strong { "{name}" } }
                div { class: "row_actions",
                    button { class: "btn danger", onclick: on_confirm, {t(locale, "common.delete")} }
                    Link { class: "btn", to: "/admin/categories", {t(locale, "common.cancel")} }
                }
            }
        }
    }
}

#[component]
fn CategoryForm(initial: CategoryDraft, on_save: EventHandler<CategoryDraft>) -> Element {
    let locale = crate::use_locale()();
    let mut name = use_signal(|| initial.name.clone());
    let mut description = use_signal(|| initial.description.clone());

    rsx! {
        div { class: "panel form",
            label { {t(locale, "common.name")} }
            input { value: "{name}", oninput: move |e| name.set(e.value()) }
            label { {t(locale, "common.description")} }
            textarea {
                value: "{description}",
                oninput: move |e| description.set(e.value()),
                rows: 4,
            }
            button {
                class: "btn primary",
                onclick: move |_| on_save.call(CategoryDraft { name: name(), description: description() }),
                {t(locale, "common.save")}
            }
        }
    }
}
