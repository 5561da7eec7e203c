use dioxus::prelude::*;
use shop::types::Order;
use shop::{format_price, t};

use super::ShopFrame;
use crate::labels::{payment_label, status_class, status_label};
use crate::pages::admin::OrderLines;

#[component]
pub fn MyOrdersPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let email = app.email();
    let mut orders: Vec<Order> = app.store.read().orders_for(&email).cloned().collect();
    orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));

    rsx! {
        ShopFrame { title: t(locale, "nav.my_orders"),
            if orders.is_empty() {
                p { class: "hint", {t(locale, "orders.empty")} }
            }
            for o in orders {
                Link { key: "{o.id}", class: "card", to: format!("/customer/orders/{}", o.id),
                    div { class: "card_top",
                        h3 { "#{o.id}" }
                        span { class: status_class(o.status), {status_label(locale, o.status)} }
                    }
                    p { class: "hint",
                        {o.placed_at.format("%Y-%m-%d %H:%M").to_string()}
                        " · "
                        {format_price(locale, o.total)}
                    }
                }
            }
        }
    }
}

/// A customer only sees their own orders; anyone else's id reads as not
/// found.
#[component]
pub fn MyOrderPage(id: u64) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let email = app.email();
    let order = app
        .store
        .read()
        .orders_for(&email)
        .find(|o| o.id == id)
        .cloned();

    let Some(order) = order else {
        return rsx! {
            ShopFrame { title: t(locale, "nav.my_orders"), back: "/customer/orders".to_string(),
                p { class: "error", {t(locale, "common.not_found")} }
            }
        };
    };

    rsx! {
        ShopFrame {
            title: format!("{} #{}", t(locale, "orders.title"), order.id),
            back: "/customer/orders".to_string(),
            div { class: "panel",
                dl { class: "facts",
                    dt { {t(locale, "common.status")} }
                    dd {
                        span { class: status_class(order.status), {status_label(locale, order.status)} }
                    }
                    dt { {t(locale, "orders.placed_at")} }
                    dd { {order.placed_at.format("%Y-%m-%d %H:%M").to_string()} }
                    dt { {t(locale, "orders.payment")} }
                    dd { {payment_label(locale, order.payment)} }
                    dt { {t(locale, "orders.shipping")} }
                    dd { "{order.shipping.full_name}, {order.shipping.phone}, {order.shipping.address}" }
                }
            }
            OrderLines { order: order.clone() }
        }
    }
}
