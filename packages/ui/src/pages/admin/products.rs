use dioxus::prelude::*;
use shop::store::ProductDraft;
use shop::{format_price, t};

use super::{AdminPage, Missing};
use crate::forms::{parse_amount, parse_count, parse_id};
use crate::Notice;

#[component]
pub fn ProductListPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let store = app.store.read();

    rsx! {
        AdminPage {
            title: t(locale, "products.title"),
            actions: rsx! {
                Link { class: "btn primary", to: "/admin/products/new", {t(locale, "products.new")} }
            },
            if store.products().is_empty() {
                p { class: "hint", {t(locale, "products.empty")} }
            } else {
                table { class: "grid",
                    thead {
                        tr {
                            th { {t(locale, "common.id")} }
                            th { {t(locale, "common.name")} }
                            th { {t(locale, "common.category")} }
                            th { {t(locale, "common.price")} }
                            th { {t(locale, "common.stock")} }
                            th {}
                        }
                    }
                    tbody {
                        for p in store.products() {
                            tr { key: "{p.id}",
                                td { "{p.id}" }
                                td { "{p.name}" }
                                td {
                                    {store.category(p.category_id).map(|c| c.name.clone()).unwrap_or_else(|_| "—".to_string())}
                                }
                                td { {format_price(locale, p.price)} }
                                td { class: if p.stock == 0 { "stock_out" } else { "" }, "{p.stock}" }
                                td { class: "row_actions",
                                    Link { class: "btn small", to: format!("/admin/products/{}", p.id), {t(locale, "common.view")} }
                                    Link { class: "btn small", to: format!("/admin/products/{}/edit", p.id), {t(locale, "common.edit")} }
                                    Link { class: "btn small danger", to: format!("/admin/products/{}/delete", p.id), {t(locale, "common.delete")} }
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
pub fn ProductCreatePage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let on_save = move |draft: ProductDraft| match app.update_store(|s| s.create_product(draft)) {
        Ok(created) => {
            toasts.notify(locale, Notice::Saved(Some(created.name.clone())));
            nav.push(format!("/admin/products/{}", created.id));
        }
        Err(err) => toasts.store_error(locale, &err),
    };

    rsx! {
        AdminPage {
            title: t(locale, "products.new"),
            back: "/admin/products".to_string(),
            ProductForm { initial: ProductDraft::default(), on_save }
        }
    }
}

#[component]
pub fn ProductDetailPage(id: u64) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let store = app.store.read();

    let Ok(product) = store.product(id) else {
        return rsx! {
            AdminPage { title: t(locale, "products.title"), back: "/admin/products".to_string(), Missing {} }
        };
    };
    let category = store
        .category(product.category_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|_| "—".to_string());

    rsx! {
        AdminPage {
            title: product.name.clone(),
            back: "/admin/products".to_string(),
            actions: rsx! {
                Link { class: "btn", to: format!("/admin/products/{}/edit", id), {t(locale, "common.edit")} }
            },
            div { class: "panel",
                dl { class: "facts",
                    dt { {t(locale, "common.category")} }
                    dd {
                        Link { to: format!("/admin/categories/{}", product.category_id), "{category}" }
                    }
                    dt { {t(locale, "common.price")} }
                    dd { {format_price(locale, product.price)} }
                    dt { {t(locale, "common.stock")} }
                    dd { "{product.stock}" }
                }
                p { "{product.description}" }
            }
        }
    }
}

#[component]
pub fn ProductEditPage(id: u64) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let initial = app.store.read().product(id).ok().map(|p| ProductDraft {
        category_id: p.category_id,
        name: p.name.clone(),
        description: p.description.clone(),
        price: p.price,
        stock: p.stock,
    });
    let Some(initial) = initial else {
        return rsx! {
            AdminPage { title: t(locale, "products.edit"), back: "/admin/products".to_string(), Missing {} }
        };
    };

    let on_save = move |draft: ProductDraft| match app.update_store(|s| s.update_product(id, draft)) {
        Ok(_) => {
            toasts.notify(locale, Notice::Saved(None));
            nav.push(format!("/admin/products/{id}"));
        }
        Err(err) => toasts.store_error(locale, &err),
    };

    rsx! {
        AdminPage {
            title: t(locale, "products.edit"),
            back: format!("/admin/products/{id}"),
            ProductForm { initial, on_save }
        }
    }
}

#[component]
pub fn ProductDeletePage(id: u64) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let name = app.store.read().product(id).ok().map(|p| p.name.clone());
    let Some(name) = name else {
        return rsx! {
            AdminPage { title: t(locale, "products.title"), back: "/admin/products".to_string(), Missing {} }
        };
    };

    let on_confirm = move |_| match app.update_store(|s| s.delete_product(id)) {
        Ok(_) => {
            toasts.notify(locale, Notice::Deleted);
            nav.replace("/admin/products");
        }
        Err(err) => toasts.store_error(locale, &err),
    };

    rsx! {
        AdminPage {
            title: t(locale, "products.delete_confirm"),
            back: format!("/admin/products/{id}"),
            div { class: "panel",
                p { strong { "{name}" } }
                div { class: "row_actions",
                    button { class: "btn danger", onclick: on_confirm, {t(locale, "common.delete")} }
                    Link { class: "btn", to: "/admin/products", {t(locale, "common.cancel")} }
                }
            }
        }
    }
}

/// Numbers are kept as typed text and only parsed on save, so a half-typed
/// price doesn't reset the field.
#[component]
fn ProductForm(initial: ProductDraft, on_save: EventHandler<ProductDraft>) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();

    let mut category = use_signal(|| {
        if initial.category_id == 0 {
            String::new()
        } else {
            initial.category_id.to_string()
        }
    });
    let mut name = use_signal(|| initial.name.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut price = use_signal(|| initial.price.to_string());
    let mut stock = use_signal(|| initial.stock.to_string());

    let categories: Vec<(u64, String)> = app
        .store
        .read()
        .categories()
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect();

    let on_submit = move |_| {
        let parsed = (parse_id(&category()), parse_amount(&price()), parse_count(&stock()));
        let (Some(category_id), Some(price), Some(stock)) = parsed else {
            toasts.invalid_input(
                locale,
                format!(
                    "{} / {} / {}",
                    t(locale, "common.category"),
                    t(locale, "common.price"),
                    t(locale, "common.stock")
                ),
            );
            return;
        };
        on_save.call(ProductDraft {
            category_id,
            name: name(),
            description: description(),
            price,
            stock,
        });
    };

    rsx! {
        div { class: "panel form",
            label { {t(locale, "common.category")} }
            select {
                value: "{category}",
                onchange: move |e| category.set(e.value()),
                option { value: "", {t(locale, "products.choose_category")} }
                for (id, label) in categories {
                    option { key: "{id}", value: "{id}", selected: category() == id.to_string(), "{label}" }
                }
            }
            label { {t(locale, "common.name")} }
            input { value: "{name}", oninput: move |e| name.set(e.value()) }
            label { {t(locale, "common.description")} }
            textarea {
                value: "{description}",
                oninput: move |e| description.set(e.value()),
                rows: 4,
            }
            label { {t(locale, "common.price")} " (₫)" }
            input { inputmode: "numeric", value: "{price}", oninput: move |e| price.set(e.value()) }
            label { {t(locale, "common.stock")} }
            input { r#type: "number", min: "0", value: "{stock}", oninput: move |e| stock.set(e.value()) }
            button { class: "btn primary", onclick: on_submit, {t(locale, "common.save")} }
        }
    }
}
