mod categories;
mod orders;
mod products;
mod reports;

pub use categories::{
    CategoryCreatePage, CategoryDeletePage, CategoryDetailPage, CategoryEditPage, CategoryListPage,
};
pub(crate) use orders::OrderLines;
pub use orders::{OrderDetailPage, OrderListPage};
pub use products::{
    ProductCreatePage, ProductDeletePage, ProductDetailPage, ProductEditPage, ProductListPage,
};
pub use reports::{AdminDashboard, AnalyticsPage, FinancePage, UserListPage};

use dioxus::prelude::*;

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

/// Page frame shared by the admin screens: stylesheet, heading and an
/// optional back link.
#[component]
fn AdminPage(title: String, back: Option<String>, actions: Option<Element>, children: Element) -> Element {
    let locale = crate::use_locale()();
    rsx! {
        document::Link { rel: "stylesheet", href: ADMIN_CSS }
        div { class: "page admin",
            div { class: "page_header",
                h1 { "{title}" }
                div { class: "page_actions",
                    if let Some(actions) = actions {
                        {actions}
                    }
                    if let Some(back) = back {
                        Link { class: "btn", to: back, {shop::t(locale, "common.back")} }
                    }
                }
            }
            {children}
        }
    }
}

#[component]
fn Missing() -> Element {
    let locale = crate::use_locale()();
    rsx! { p { class: "error", {shop::t(locale, "common.not_found")} } }
}
