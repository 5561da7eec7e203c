use chrono::Utc;
use shop::reports;
use shop::store::seed::{DEMO_CUSTOMER, DEMO_PASSWORD};
use shop::store::{Registration, ShopStore};
use shop::types::{OrderStatus, PaymentMethod, Shipping};
use shop::{AppConfig, Cart, MemoryStorage, Role, Session};

fn shipping() -> Shipping {
    Shipping {
        full_name: "Trần Minh".to_string(),
        phone: "0912345678".to_string(),
        address: "7 Trần Phú, Đà Nẵng".to_string(),
    }
}

#[test]
fn register_login_shop_and_checkout() {
    let mut storage = MemoryStorage::new();
    let mut store = ShopStore::load_or_init(&mut storage, true, Utc::now());

    store
        .register(
            Registration {
                email: "minh@shop.vn".to_string(),
                name: "Minh".to_string(),
                password: "MatKhau2024".to_string(),
            },
            Utc::now(),
        )
        .unwrap();
    let account = store
        .authenticate("minh@shop.vn", "MatKhau2024")
        .unwrap()
        .clone();
    let session = Session::login(&mut storage, &account);
    assert_eq!(Session::load(&storage), session);

    let tea = store.products()[3].clone();
    let mut cart = Cart::load(&storage);
    cart.add(&tea, 2).unwrap();
    cart.save(&mut storage);

    let cart = Cart::load(&storage);
    let order = store
        .place_order(
            session.email.as_deref().unwrap(),
            &cart,
            shipping(),
            PaymentMethod::BankTransfer,
            Utc::now(),
        )
        .unwrap();
    assert_eq!(order.total, tea.price * 2);
    assert_eq!(store.product(tea.id).unwrap().stock, tea.stock - 2);

    store.save(&mut storage);
    let reloaded = ShopStore::load_or_init(&mut storage, true, Utc::now());
    assert_eq!(reloaded, store);

    let before = reports::finance(reloaded.orders());
    assert_eq!(before.pending, order.total);
}

#[test]
fn admin_confirms_then_finance_counts_revenue() {
    let mut storage = MemoryStorage::new();
    let mut store = ShopStore::load_or_init(&mut storage, true, Utc::now());
    let revenue_before = reports::finance(store.orders()).revenue;

    let mut cart = Cart::new();
    cart.add(&store.products()[1].clone(), 1).unwrap();
    let order = store
        .place_order(
            DEMO_CUSTOMER,
            &cart,
            shipping(),
            PaymentMethod::CashOnDelivery,
            Utc::now(),
        )
        .unwrap();
    store
        .set_order_status(order.id, OrderStatus::Confirmed)
        .unwrap();

    let after = reports::finance(store.orders());
    assert_eq!(after.revenue, revenue_before + order.total);
    assert!(store.authenticate(DEMO_CUSTOMER, DEMO_PASSWORD).is_ok());
}

#[test]
fn unseeded_store_starts_empty_and_corrupt_blob_is_replaced() {
    use shop::storage::{Storage, STORE_KEY};

    let mut storage = MemoryStorage::new();
    storage.set(STORE_KEY, "not json");
    let store = ShopStore::load_or_init(&mut storage, false, Utc::now());
    assert!(store.products().is_empty());
    assert!(storage.get(STORE_KEY).unwrap().starts_with('{'));
}

#[test]
fn default_config_store_still_gets_an_admin() {
    let config = AppConfig::from_lookup(|_| None);
    assert!(!config.seed_demo_data);
    let mut storage = MemoryStorage::new();
    let mut store = ShopStore::load_or_init(&mut storage, config.seed_demo_data, Utc::now());
    assert!(!store.has_admin());

    let first = store
        .register(
            Registration {
                email: "chu@shop.vn".to_string(),
                name: "Chủ cửa hàng".to_string(),
                password: "ChuShop2024".to_string(),
            },
            Utc::now(),
        )
        .unwrap();
    assert_eq!(first.role, Role::Admin);
    let account = store.authenticate("chu@shop.vn", "ChuShop2024").unwrap();
    let session = Session::login(&mut storage, account);
    assert_eq!(session.role, Some(Role::Admin));
}

#[test]
fn configured_admin_is_created_on_an_empty_store() {
    let config = AppConfig::from_lookup(|key| match key {
        "SHOP_ADMIN_EMAIL" => Some("owner@shop.vn".to_string()),
        "SHOP_ADMIN_PASSWORD" => Some("Own3rPass".to_string()),
        _ => None,
    });
    let mut store = ShopStore::load_or_init(&mut MemoryStorage::new(), false, Utc::now());
    let admin = config.admin.as_ref().unwrap();
    store.ensure_admin(admin, Utc::now()).unwrap();

    let account = store.authenticate("owner@shop.vn", "Own3rPass").unwrap();
    assert_eq!(account.role, Role::Admin);
}
