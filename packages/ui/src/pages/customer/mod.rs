mod cart;
mod catalog;
mod orders;
mod profile;

pub use cart::{CartPage, CheckoutPage};
pub use catalog::{CustomerHome, ShopPage, ShopProductPage};
pub use orders::{MyOrderPage, MyOrdersPage};
pub use profile::ProfilePage;

use dioxus::prelude::*;

const SHOP_CSS: Asset = asset!("/assets/styling/shop.css");

#[component]
fn ShopFrame(title: String, back: Option<String>, children: Element) -> Element {
    let locale = crate::use_locale()();
    rsx! {
        document::Link { rel: "stylesheet", href: SHOP_CSS }
        div { class: "page shop",
            div { class: "page_header",
                h1 { "{title}" }
                if let Some(back) = back {
                    Link { class: "btn", to: back, {shop::t(locale, "common.back")} }
                }
            }
            {children}
        }
    }
}
