use dioxus::prelude::*;
use shop::reports::{analytics, finance};
use shop::types::OrderStatus;
use shop::{format_price, t};

use super::AdminPage;
use crate::labels::{role_label, status_class, status_label};

#[component]
pub fn AdminDashboard() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let store = app.store.read();
    let summary = finance(store.orders());
    let pending = store
        .orders()
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();
    let low_stock: Vec<_> = store.products().iter().filter(|p| p.stock < 5).collect();

    rsx! {
        AdminPage { title: t(locale, "admin.dashboard.title"),
            div { class: "tiles",
                Tile { label: t(locale, "nav.categories"), value: store.categories().len().to_string(), to: "/admin/categories" }
                Tile { label: t(locale, "nav.products"), value: store.products().len().to_string(), to: "/admin/products" }
                Tile { label: t(locale, "status.pending"), value: pending.to_string(), to: "/admin/orders" }
                Tile { label: t(locale, "nav.users"), value: store.users().len().to_string(), to: "/admin/users" }
                Tile { label: t(locale, "finance.revenue"), value: format_price(locale, summary.revenue), to: "/admin/finance" }
            }
            if !low_stock.is_empty() {
                div { class: "panel",
                    h2 { {t(locale, "common.stock")} }
                    for p in low_stock {
                        Link { key: "{p.id}", class: "card", to: format!("/admin/products/{}", p.id),
                            div { class: "card_top",
                                h3 { "{p.name}" }
                                span { class: if p.stock == 0 { "stock_out" } else { "hint" }, "{p.stock}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Tile(label: String, value: String, to: String) -> Element {
    rsx! {
        Link { class: "tile", to,
            span { class: "tile_value", "{value}" }
            span { class: "tile_label", "{label}" }
        }
    }
}

#[component]
pub fn UserListPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let store = app.store.read();

    rsx! {
        AdminPage { title: t(locale, "users.title"),
            table { class: "grid",
                thead {
                    tr {
                        th { {t(locale, "common.id")} }
                        th { {t(locale, "common.name")} }
                        th { {t(locale, "common.email")} }
                        th { {t(locale, "users.role")} }
                        th { {t(locale, "common.phone")} }
                        th { {t(locale, "users.joined")} }
                        th { {t(locale, "nav.orders")} }
                    }
                }
                tbody {
                    for u in store.users() {
                        tr { key: "{u.id}",
                            td { "{u.id}" }
                            td { "{u.name}" }
                            td { "{u.email}" }
                            td { {role_label(locale, u.role)} }
                            td { {u.phone.clone().unwrap_or_default()} }
                            td { {u.created_at.format("%Y-%m-%d").to_string()} }
                            td { {store.orders_for(&u.email).count().to_string()} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FinancePage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let summary = finance(app.store.read().orders());

    rsx! {
        AdminPage { title: t(locale, "finance.title"),
            div { class: "tiles",
                div { class: "tile",
                    span { class: "tile_value", {format_price(locale, summary.revenue)} }
                    span { class: "tile_label", {t(locale, "finance.revenue")} }
                }
                div { class: "tile",
                    span { class: "tile_value", {format_price(locale, summary.pending)} }
                    span { class: "tile_label", {t(locale, "finance.pending")} }
                }
                div { class: "tile",
                    span { class: "tile_value", {format_price(locale, summary.cancelled)} }
                    span { class: "tile_label", {t(locale, "finance.cancelled")} }
                }
            }
            div { class: "panel",
                h2 { {t(locale, "finance.by_status")} }
                table { class: "grid",
                    tbody {
                        for (status, count) in summary.orders_by_status.iter().copied() {
                            tr { key: "{status}",
                                td {
                                    span { class: status_class(status), {status_label(locale, status)} }
                                }
                                td { "{count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AnalyticsPage() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let figures = analytics(&app.store.read(), 5);
    let max_units = figures
        .units_by_category
        .iter()
        .map(|(_, units)| *units)
        .max()
        .unwrap_or(0)
        .max(1);

    rsx! {
        AdminPage { title: t(locale, "analytics.title"),
            div { class: "tiles",
                div { class: "tile",
                    span { class: "tile_value", "{figures.order_count}" }
                    span { class: "tile_label", {t(locale, "analytics.orders")} }
                }
                div { class: "tile",
                    span { class: "tile_value", {format_price(locale, figures.average_order_value)} }
                    span { class: "tile_label", {t(locale, "analytics.average")} }
                }
            }
            div { class: "panel",
                h2 { {t(locale, "analytics.top_products")} }
                table { class: "grid",
                    thead {
                        tr {
                            th { {t(locale, "common.name")} }
                            th { {t(locale, "analytics.units")} }
                            th { {t(locale, "common.total")} }
                        }
                    }
                    tbody {
                        for p in figures.top_products.iter() {
                            tr { key: "{p.product_id}",
                                td { "{p.name}" }
                                td { "{p.units}" }
                                td { {format_price(locale, p.amount)} }
                            }
                        }
                    }
                }
            }
            div { class: "panel",
                h2 { {t(locale, "analytics.by_category")} }
                for (name, units) in figures.units_by_category.iter() {
                    div { key: "{name}", class: "bar_row",
                        span { class: "bar_label", "{name}" }
                        div { class: "bar",
                            div {
                                class: "bar_fill",
                                style: format!("width: {}%", units * 100 / max_units),
                            }
                        }
                        span { class: "hint", "{units}" }
                    }
                }
            }
        }
    }
}
