use dioxus::prelude::*;
use shop::types::Product;
use shop::{format_price, t};

use super::ShopFrame;
use crate::forms::{parse_count, parse_id, truncate};
use crate::Notice;

#[component]
pub fn CustomerHome() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let email = app.email();
    let store = app.store.read();
    let name = store
        .user_by_email(&email)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| email.clone());
    let open_orders = store
        .orders_for(&email)
        .filter(|o| !o.status.next().is_empty())
        .count();
    let cart_items = app.cart.read().item_count();
    let product_count = store.products().len();

    rsx! {
        ShopFrame { title: format!("{}, {name}", t(locale, "customer.home.title")),
            p { class: "welcome", {t(locale, "welcomeMessage")} }
            p { {t(locale, "customer.home.body")} }
            div { class: "tiles",
                Link { class: "tile", to: "/customer/products",
                    span { class: "tile_value", "{product_count}" }
                    span { class: "tile_label", {t(locale, "nav.shop")} }
                }
                Link { class: "tile", to: "/customer/cart",
                    span { class: "tile_value", "{cart_items}" }
                    span { class: "tile_label", {t(locale, "nav.cart")} }
                }
                Link { class: "tile", to: "/customer/orders",
                    span { class: "tile_value", "{open_orders}" }
                    span { class: "tile_label", {t(locale, "nav.my_orders")} }
                }
            }
        }
    }
}

#[component]
pub fn ShopPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let mut filter = use_signal(String::new);

    let store = app.store.read();
    let category = parse_id(&filter());
    let products: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| category.map_or(true, |c| p.category_id == c))
        .cloned()
        .collect();

    rsx! {
        ShopFrame { title: t(locale, "shop.title"),
            select {
                class: "filter",
                value: "{filter}",
                onchange: move |e| filter.set(e.value()),
                option { value: "", {t(locale, "shop.all_categories")} }
                for c in store.categories() {
                    option { key: "{c.id}", value: "{c.id}", "{c.name}" }
                }
            }
            div { class: "product_grid",
                for p in products {
                    ProductCard { key: "{p.id}", product: p }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    let locale = crate::use_locale()();
    let id = product.id;
    rsx! {
        div { class: "card product_card",
            Link { to: format!("/customer/products/{id}"),
                h3 { "{product.name}" }
            }
            p { class: "summary", {truncate(&product.description, 120)} }
            div { class: "card_top",
                span { class: "price", {format_price(locale, product.price)} }
                StockBadge { stock: product.stock }
            }
            AddToCart { product, quantity: 1 }
        }
    }
}

#[component]
fn StockBadge(stock: u32) -> Element {
    let locale = crate::use_locale()();
    if stock == 0 {
        rsx! { span { class: "stock_out", {t(locale, "shop.out_of_stock")} } }
    } else {
        rsx! { span { class: "hint", "{stock} " {t(locale, "shop.in_stock")} } }
    }
}

#[component]
fn AddToCart(product: Product, quantity: u32) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let disabled = product.stock == 0;
    let name = product.name.clone();

    rsx! {
        button {
            class: "btn primary",
            disabled,
            onclick: move |_| match app.update_cart(|c| c.add(&product, quantity)) {
                Ok(()) => toasts.notify(locale, Notice::AddedToCart(name.clone())),
                Err(err) => toasts.cart_error(locale, &err),
            },
            {t(locale, "shop.add_to_cart")}
        }
    }
}

#[component]
pub fn ShopProductPage(id: u64) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let mut quantity = use_signal(|| "1".to_string());

    let store = app.store.read();
    let Ok(product) = store.product(id).cloned() else {
        return rsx! {
            ShopFrame { title: t(locale, "shop.title"), back: "/customer/products".to_string(),
                p { class: "error", {t(locale, "common.not_found")} }
            }
        };
    };
    let category = store
        .category(product.category_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let in_cart = app.cart.read().quantity_of(id);
    let qty = parse_count(&quantity()).unwrap_or(0);

    rsx! {
        ShopFrame { title: product.name.clone(), back: "/customer/products".to_string(),
            div { class: "panel",
                p { class: "hint", "{category}" }
                p { "{product.description}" }
                div { class: "card_top",
                    span { class: "price", {format_price(locale, product.price)} }
                    StockBadge { stock: product.stock }
                }
                if in_cart > 0 {
                    p { class: "hint", {format!("{}: {in_cart}", t(locale, "nav.cart"))} }
                }
                div { class: "row_actions",
                    label { {t(locale, "common.quantity")} }
                    input {
                        r#type: "number",
                        min: "1",
                        max: "{product.stock}",
                        value: "{quantity}",
                        oninput: move |e| quantity.set(e.value()),
                    }
                    AddToCart { product: product.clone(), quantity: qty }
                }
            }
        }
    }
}
