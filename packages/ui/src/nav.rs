use dioxus::prelude::*;
use shop::{t, Role};

/// Top bar: brand, the links for the signed-in role, and the account menu.
#[component]
pub fn ShopNav() -> Element {
    let app = crate::use_app();
    let locale = crate::use_locale()();
    let role = app.session.read().role;
    let cart_items = app.cart.read().item_count();

    let links: &[(&str, &str)] = match role {
        Some(Role::Admin) => &[
            ("/admin", "nav.dashboard"),
            ("/admin/categories", "nav.categories"),
            ("/admin/products", "nav.products"),
            ("/admin/orders", "nav.orders"),
            ("/admin/users", "nav.users"),
            ("/admin/finance", "nav.finance"),
            ("/admin/analytics", "nav.analytics"),
        ],
        Some(Role::Customer) => &[
            ("/customer/products", "nav.shop"),
            ("/customer/orders", "nav.my_orders"),
        ],
        None => &[],
    };
    let home = role.map(Role::home_path).unwrap_or(shop::LOGIN_PATH);

    rsx! {
        div { class: "shop_nav",
            div { class: "shop_nav_inner",
                Link { class: "brand", to: home,
                    span { class: "brand_mark" }
                    span { class: "brand_name", {t(locale, "app.name")} }
                }
                div { class: "nav_links",
                    for (to, key) in links.iter().copied() {
                        Link { key: "{to}", class: "nav_link", to, {t(locale, key)} }
                    }
                    if role == Some(Role::Customer) {
                        Link { class: "nav_link cart_link", to: "/customer/cart",
                            {t(locale, "nav.cart")}
                            if cart_items > 0 {
                                span { class: "cart_count", "{cart_items}" }
                            }
                        }
                    }
                    crate::AccountMenu {}
                }
            }
        }
    }
}
