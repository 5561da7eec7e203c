use chrono::{DateTime, Duration, Utc};

use super::{CategoryDraft, ProductDraft, Registration, ShopStore};
use crate::cart::Cart;
use crate::role::Role;
use crate::types::{OrderStatus, PaymentMethod, Shipping};

pub const DEMO_PASSWORD: &str = "Password123";
pub const DEMO_ADMIN: &str = "admin@local.dev";
pub const DEMO_CUSTOMER: &str = "customer@local.dev";

/// Demo accounts, a small catalog and one delivered order.
pub fn demo(now: DateTime<Utc>) -> ShopStore {
    let mut store = ShopStore::new();
    if let Err(e) = fill(&mut store, now) {
        // Seed data is fixed; a failure here means the validation rules moved.
        tracing::error!("seed.demo: {e}");
    }
    store
}

fn fill(store: &mut ShopStore, now: DateTime<Utc>) -> Result<(), crate::error::StoreError> {
    store.add_account(
        Registration {
            email: DEMO_ADMIN.to_string(),
            name: "Quản trị".to_string(),
            password: DEMO_PASSWORD.to_string(),
        },
        Role::Admin,
        now - Duration::days(30),
    )?;
    store.add_account(
        Registration {
            email: DEMO_CUSTOMER.to_string(),
            name: "Nguyễn Văn An".to_string(),
            password: DEMO_PASSWORD.to_string(),
        },
        Role::Customer,
        now - Duration::days(20),
    )?;

    let coffee = store.create_category(CategoryDraft {
        name: "Cà phê".to_string(),
        description: "Whole bean and ground coffee".to_string(),
    })?;
    let tea = store.create_category(CategoryDraft {
        name: "Trà".to_string(),
        description: "Loose leaf tea".to_string(),
    })?;
    let gear = store.create_category(CategoryDraft {
        name: "Dụng cụ".to_string(),
        description: "Brewing equipment".to_string(),
    })?;

    let products = [
        (coffee.id, "Cà phê Robusta 500g", 120_000, 40),
        (coffee.id, "Cà phê Arabica Cầu Đất 250g", 185_000, 25),
        (tea.id, "Trà Shan Tuyết 100g", 150_000, 30),
        (tea.id, "Trà sen Tây Hồ", 450_000, 10),
        (gear.id, "Phin nhôm", 35_000, 100),
    ];
    let mut ids = Vec::new();
    for (category_id, name, price, stock) in products {
        let p = store.create_product(ProductDraft {
            category_id,
            name: name.to_string(),
            description: String::new(),
            price,
            stock,
        })?;
        ids.push(p);
    }

    let mut cart = Cart::new();
    cart.add(&ids[0], 2)?;
    cart.add(&ids[4], 1)?;
    let order = store.place_order(
        DEMO_CUSTOMER,
        &cart,
        Shipping {
            full_name: "Nguyễn Văn An".to_string(),
            phone: "0901234567".to_string(),
            address: "45 Lê Lợi, Quận 1, TP.HCM".to_string(),
        },
        PaymentMethod::CashOnDelivery,
        now - Duration::days(7),
    )?;
    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        store.set_order_status(order.id, status)?;
    }

    tracing::info!(
        "seed.demo: users={} categories={} products={} orders={}",
        store.users().len(),
        store.categories().len(),
        store.products().len(),
        store.orders().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_is_complete_and_loginable() {
        let store = demo(Utc::now());
        assert_eq!(store.users().len(), 2);
        assert_eq!(store.categories().len(), 3);
        assert_eq!(store.products().len(), 5);
        assert_eq!(store.orders().len(), 1);
        assert_eq!(store.orders()[0].status, OrderStatus::Delivered);

        let admin = store.authenticate(DEMO_ADMIN, DEMO_PASSWORD).unwrap();
        assert_eq!(admin.role, Role::Admin);
        let customer = store.authenticate(DEMO_CUSTOMER, DEMO_PASSWORD).unwrap();
        assert_eq!(customer.role, Role::Customer);
    }
}
