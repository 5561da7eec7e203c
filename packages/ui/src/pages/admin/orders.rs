use dioxus::prelude::*;
use shop::types::OrderStatus;
use shop::{format_price, t};

use super::{AdminPage, Missing};
use crate::labels::{payment_label, status_class, status_label};
use crate::Notice;

#[component]
pub fn OrderListPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let store = app.store.read();
    let mut orders: Vec<_> = store.orders().iter().collect();
    orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));

    rsx! {
        AdminPage { title: t(locale, "orders.title"),
            if orders.is_empty() {
                p { class: "hint", {t(locale, "orders.empty")} }
            } else {
                table { class: "grid",
                    thead {
                        tr {
                            th { {t(locale, "common.id")} }
                            th { {t(locale, "orders.customer")} }
                            th { {t(locale, "orders.placed_at")} }
                            th { {t(locale, "common.total")} }
                            th { {t(locale, "common.status")} }
                        }
                    }
                    tbody {
                        for o in orders {
                            tr { key: "{o.id}",
                                td {
                                    Link { to: format!("/admin/orders/{}", o.id), "#{o.id}" }
                                }
                                td { "{o.customer_email}" }
                                td { {o.placed_at.format("%Y-%m-%d %H:%M").to_string()} }
                                td { {format_price(locale, o.total)} }
                                td {
                                    span { class: status_class(o.status), {status_label(locale, o.status)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Order lines, delivery details, and one button per status the order may
/// move to next.
#[component]
pub fn OrderDetailPage(id: u64) -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let toasts = crate::use_toasts();

    let Ok(order) = app.store.read().order(id).cloned() else {
        return rsx! {
            AdminPage { title: t(locale, "orders.title"), back: "/admin/orders".to_string(), Missing {} }
        };
    };

    let move_to = move |to: OrderStatus| match app.update_store(|s| s.set_order_status(id, to)) {
        Ok(_) => toasts.notify(locale, Notice::Saved(Some(status_label(locale, to)))),
        Err(err) => toasts.store_error(locale, &err),
    };

    rsx! {
        AdminPage {
            title: format!("{} #{}", t(locale, "orders.title"), order.id),
            back: "/admin/orders".to_string(),
            div { class: "panel",
                dl { class: "facts",
                    dt { {t(locale, "orders.customer")} }
                    dd { "{order.customer_email}" }
                    dt { {t(locale, "orders.placed_at")} }
                    dd { {order.placed_at.format("%Y-%m-%d %H:%M").to_string()} }
                    dt { {t(locale, "common.status")} }
                    dd {
                        span { class: status_class(order.status), {status_label(locale, order.status)} }
                    }
                    dt { {t(locale, "orders.payment")} }
                    dd { {payment_label(locale, order.payment)} }
                }
                if !order.status.next().is_empty() {
                    div { class: "row_actions",
                        span { class: "hint", {t(locale, "orders.move_to")} }
                        for to in order.status.next().iter().copied() {
                            button {
                                key: "{to}",
                                class: if to == OrderStatus::Cancelled { "btn danger" } else { "btn primary" },
                                onclick: move |_| move_to(to),
                                {status_label(locale, to)}
                            }
                        }
                    }
                }
            }
            OrderLines { order: order.clone() }
            div { class: "panel",
                h2 { {t(locale, "orders.shipping")} }
                p { "{order.shipping.full_name}" }
                p { "{order.shipping.phone}" }
                p { "{order.shipping.address}" }
            }
        }
    }
}

/// Line table shared with the customer's order page.
#[component]
pub(crate) fn OrderLines(order: shop::types::Order) -> Element {
    let locale = crate::use_locale()();
    rsx! {
        div { class: "panel",
            table { class: "grid",
                thead {
                    tr {
                        th { {t(locale, "common.name")} }
                        th { {t(locale, "common.price")} }
                        th { {t(locale, "common.quantity")} }
                        th { {t(locale, "common.total")} }
                    }
                }
                tbody {
                    for line in order.lines.iter() {
                        tr { key: "{line.product_id}",
                            td { "{line.name}" }
                            td { {format_price(locale, line.unit_price)} }
                            td { "{line.quantity}" }
                            td { {format_price(locale, line.total())} }
                        }
                    }
                }
                tfoot {
                    tr {
                        td { colspan: 3, strong { {t(locale, "common.total")} } }
                        td { strong { {format_price(locale, order.total)} } }
                    }
                }
            }
        }
    }
}
