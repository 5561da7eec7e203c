use chrono::Utc;
use dioxus::prelude::*;
use shop::types::{PaymentMethod, Shipping};
use shop::{format_price, t, StoreError};

use super::ShopFrame;
use crate::forms::parse_count;
use crate::labels::payment_label;
use crate::Notice;

const PAYMENT_METHODS: [PaymentMethod; 2] =
    [PaymentMethod::CashOnDelivery, PaymentMethod::BankTransfer];

#[component]
pub fn CartPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let cart = app.cart.read().clone();

    let set_quantity = move |product_id: u64, raw: String| {
        let Some(quantity) = parse_count(&raw) else {
            return;
        };
        let product = app.store.read().product(product_id).cloned();
        let result = product.and_then(|product| {
            app.update_cart(|c| c.set_quantity(&product, quantity))
                .map_err(StoreError::from)
        });
        if let Err(err) = result {
            toasts.store_error(locale, &err);
        }
    };
    let remove = move |product_id: u64| {
        if let Err(err) = app.update_cart(|c| c.remove(product_id)) {
            toasts.cart_error(locale, &err);
        }
    };

    rsx! {
        ShopFrame { title: t(locale, "cart.title"),
            if cart.is_empty() {
                p { class: "hint", {t(locale, "cart.empty")} }
                Link { class: "btn primary", to: "/customer/products", {t(locale, "nav.shop")} }
            } else {
                table { class: "grid",
                    thead {
                        tr {
                            th { {t(locale, "common.name")} }
                            th { {t(locale, "common.price")} }
                            th { {t(locale, "common.quantity")} }
                            th { {t(locale, "common.total")} }
                            th {}
                        }
                    }
                    tbody {
                        for line in cart.lines().iter().cloned() {
                            tr { key: "{line.product_id}",
                                td {
                                    Link { to: format!("/customer/products/{}", line.product_id), "{line.name}" }
                                }
                                td { {format_price(locale, line.unit_price)} }
                                td {
                                    input {
                                        class: "qty",
                                        r#type: "number",
                                        min: "0",
                                        value: "{line.quantity}",
                                        onchange: move |e| set_quantity(line.product_id, e.value()),
                                    }
                                }
                                td { {format_price(locale, line.total())} }
                                td {
                                    button {
                                        class: "btn small danger",
                                        onclick: move |_| remove(line.product_id),
                                        {t(locale, "cart.remove")}
                                    }
                                }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            td { colspan: 3, strong { {t(locale, "cart.subtotal")} } }
                            td { strong { {format_price(locale, cart.subtotal())} } }
                            td {}
                        }
                    }
                }
                div { class: "row_actions",
                    Link { class: "btn primary", to: "/customer/checkout", {t(locale, "cart.checkout")} }
                }
            }
        }
    }
}

/// Shipping details default to what the customer saved on their profile.
#[component]
pub fn CheckoutPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let email = app.email();
    let account = app.store.read().user_by_email(&email).cloned();
    let mut full_name = use_signal(|| account.as_ref().map(|a| a.name.clone()).unwrap_or_default());
    let mut phone = use_signal(|| account.as_ref().and_then(|a| a.phone.clone()).unwrap_or_default());
    let mut address = use_signal(|| account.as_ref().and_then(|a| a.address.clone()).unwrap_or_default());
    let mut payment = use_signal(|| PaymentMethod::CashOnDelivery);

    let cart = app.cart.read().clone();
    if cart.is_empty() {
        return rsx! {
            ShopFrame { title: t(locale, "checkout.title"), back: "/customer/cart".to_string(),
                p { class: "hint", {t(locale, "cart.empty")} }
            }
        };
    }
    let subtotal = cart.subtotal();

    let on_place = move |_| {
        let shipping = Shipping {
            full_name: full_name(),
            phone: phone(),
            address: address(),
        };
        let cart = app.cart.read().clone();
        let placed = app.update_store(|s| s.place_order(&email, &cart, shipping, payment(), Utc::now()));
        match placed {
            Ok(order) => {
                app.clear_cart();
                toasts.notify(locale, Notice::OrderPlaced(order.id));
                nav.replace(format!("/customer/orders/{}", order.id));
            }
            Err(err) => toasts.store_error(locale, &err),
        }
    };

    rsx! {
        ShopFrame { title: t(locale, "checkout.title"), back: "/customer/cart".to_string(),
            div { class: "panel form",
                label { {t(locale, "checkout.full_name")} }
                input { value: "{full_name}", oninput: move |e| full_name.set(e.value()) }
                label { {t(locale, "common.phone")} }
                input { r#type: "tel", value: "{phone}", oninput: move |e| phone.set(e.value()) }
                label { {t(locale, "common.address")} }
                textarea { value: "{address}", oninput: move |e| address.set(e.value()), rows: 3 }
                label { {t(locale, "orders.payment")} }
                select {
                    value: payment().as_str(),
                    onchange: move |e| {
                        if let Some(p) = PaymentMethod::from_str_opt(&e.value()) {
                            payment.set(p);
                        }
                    },
                    for (code, method) in PAYMENT_METHODS.map(|m| (m.as_str(), m)) {
                        option { key: "{code}", value: code, {payment_label(locale, method)} }
                    }
                }
            }
            div { class: "panel",
                p {
                    {t(locale, "cart.subtotal")}
                    ": "
                    strong { {format_price(locale, subtotal)} }
                }
                button { class: "btn primary", onclick: on_place, {t(locale, "checkout.place_order")} }
            }
        }
    }
}
