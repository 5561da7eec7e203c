//! Client-side store backing the admin and customer pages.

pub mod seed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::cart::Cart;
use crate::config::AdminBootstrap;
use crate::error::{CartError, CheckoutError, StoreError};
use crate::role::Role;
use crate::storage::{load_json, save_json, Storage, STORE_KEY};
use crate::types::{
    Category, Order, OrderLine, OrderStatus, PaymentMethod, Product, Shipping, UserAccount,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub category_id: u64,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub stock: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Highest unit price accepted, in VND. With `u32` stock a line total stays
/// far inside `u64`.
pub const MAX_PRICE: u64 = 1_000_000_000_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct NextIds {
    category: u64,
    product: u64,
    user: u64,
    order: u64,
}

fn bump(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopStore {
    categories: Vec<Category>,
    products: Vec<Product>,
    users: Vec<UserAccount>,
    orders: Vec<Order>,
    next_ids: NextIds,
}

impl ShopStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted store, or start a new one (seeded when `seed` is
    /// set) if nothing usable is stored.
    pub fn load_or_init(storage: &mut dyn Storage, seed: bool, now: DateTime<Utc>) -> Self {
        if let Some(store) = load_json::<ShopStore>(storage, STORE_KEY) {
            return store;
        }
        let store = if seed {
            tracing::info!("store.load_or_init: seeding demo data");
            seed::demo(now)
        } else {
            Self::new()
        };
        store.save(storage);
        store
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        save_json(storage, STORE_KEY, self);
    }

    // Categories

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: u64) -> Result<&Category, StoreError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound { kind: "category", id })
    }

    pub fn create_category(&mut self, draft: CategoryDraft) -> Result<Category, StoreError> {
        let name = self.check_category_name(&draft.name, None)?;
        let category = Category {
            id: bump(&mut self.next_ids.category),
            name,
            description: draft.description.trim().to_string(),
        };
        tracing::info!("store.create_category: id={}", category.id);
        self.categories.push(category.clone());
        Ok(category)
    }

    pub fn update_category(&mut self, id: u64, draft: CategoryDraft) -> Result<Category, StoreError> {
        let name = self.check_category_name(&draft.name, Some(id))?;
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound { kind: "category", id })?;
        category.name = name;
        category.description = draft.description.trim().to_string();
        Ok(category.clone())
    }

    pub fn delete_category(&mut self, id: u64) -> Result<Category, StoreError> {
        self.category(id)?;
        if self.products.iter().any(|p| p.category_id == id) {
            return Err(StoreError::CategoryInUse(id));
        }
        let pos = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound { kind: "category", id })?;
        tracing::info!("store.delete_category: id={id}");
        Ok(self.categories.remove(pos))
    }

    fn check_category_name(&self, raw: &str, editing: Option<u64>) -> Result<String, StoreError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(StoreError::Invalid("category name is required".to_string()));
        }
        let taken = self
            .categories
            .iter()
            .any(|c| Some(c.id) != editing && c.name.to_lowercase() == name.to_lowercase());
        if taken {
            return Err(StoreError::Invalid(format!("category {name:?} already exists")));
        }
        Ok(name.to_string())
    }

    // Products

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn products_in(&self, category_id: u64) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| p.category_id == category_id)
    }

    pub fn product(&self, id: u64) -> Result<&Product, StoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { kind: "product", id })
    }

    pub fn create_product(&mut self, draft: ProductDraft) -> Result<Product, StoreError> {
        self.check_product(&draft)?;
        let product = Product {
            id: bump(&mut self.next_ids.product),
            category_id: draft.category_id,
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            price: draft.price,
            stock: draft.stock,
        };
        tracing::info!(
            "store.create_product: id={} category_id={}",
            product.id,
            product.category_id
        );
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn update_product(&mut self, id: u64, draft: ProductDraft) -> Result<Product, StoreError> {
        self.check_product(&draft)?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { kind: "product", id })?;
        product.category_id = draft.category_id;
        product.name = draft.name.trim().to_string();
        product.description = draft.description.trim().to_string();
        product.price = draft.price;
        product.stock = draft.stock;
        Ok(product.clone())
    }

    /// Orders keep their own line snapshots, so deleting a product never
    /// touches order history.
    pub fn delete_product(&mut self, id: u64) -> Result<Product, StoreError> {
        let pos = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound { kind: "product", id })?;
        tracing::info!("store.delete_product: id={id}");
        Ok(self.products.remove(pos))
    }

    fn check_product(&self, draft: &ProductDraft) -> Result<(), StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::Invalid("product name is required".to_string()));
        }
        if draft.price > MAX_PRICE {
            return Err(StoreError::Invalid(format!(
                "price must be at most {MAX_PRICE} ₫"
            )));
        }
        self.category(draft.category_id)?;
        Ok(())
    }

    // Accounts

    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    pub fn user_by_email(&self, email: &str) -> Option<&UserAccount> {
        let email = auth::normalize_email(email);
        self.users.iter().find(|u| u.email == email)
    }

    pub fn has_admin(&self) -> bool {
        self.users.iter().any(|u| u.role == Role::Admin)
    }

    /// New accounts are customers. The one exception is a store without an
    /// administrator: its first registration becomes the admin, so a fresh
    /// install can always reach the admin section.
    pub fn register(
        &mut self,
        registration: Registration,
        now: DateTime<Utc>,
    ) -> Result<UserAccount, StoreError> {
        let role = if self.has_admin() {
            Role::Customer
        } else {
            Role::Admin
        };
        self.add_account(registration, role, now)
    }

    /// Create the configured administrator if the store has none yet.
    /// Returns the new account, or `None` when an admin already exists.
    pub fn ensure_admin(
        &mut self,
        admin: &AdminBootstrap,
        now: DateTime<Utc>,
    ) -> Result<Option<UserAccount>, StoreError> {
        if self.has_admin() {
            return Ok(None);
        }
        let registration = Registration {
            email: admin.email.clone(),
            name: "Administrator".to_string(),
            password: admin.password.clone(),
        };
        self.add_account(registration, Role::Admin, now).map(Some)
    }

    pub(crate) fn add_account(
        &mut self,
        registration: Registration,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<UserAccount, StoreError> {
        auth::validate_email(&registration.email)?;
        auth::validate_password(&registration.password)?;
        let email = auth::normalize_email(&registration.email);
        if self.user_by_email(&email).is_some() {
            return Err(StoreError::DuplicateEmail(email));
        }
        let name = registration.name.trim();
        if name.is_empty() {
            return Err(StoreError::Invalid("name is required".to_string()));
        }

        let account = UserAccount {
            id: bump(&mut self.next_ids.user),
            password_hash: auth::hash_password(&email, &registration.password),
            email,
            name: name.to_string(),
            role,
            phone: None,
            address: None,
            created_at: now,
        };
        tracing::info!(
            "store.add_account: email={} role={}",
            auth::email_label(&account.email),
            role
        );
        self.users.push(account.clone());
        Ok(account)
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<&UserAccount, StoreError> {
        let account = self
            .user_by_email(email)
            .filter(|u| auth::verify_password(&u.email, password, &u.password_hash));
        match account {
            Some(account) => Ok(account),
            None => {
                tracing::info!(
                    "store.authenticate: rejected email={}",
                    auth::email_label(email)
                );
                Err(StoreError::InvalidCredentials)
            }
        }
    }

    pub fn update_profile(
        &mut self,
        email: &str,
        update: ProfileUpdate,
    ) -> Result<UserAccount, StoreError> {
        let name = update.name.trim();
        if name.is_empty() {
            return Err(StoreError::Invalid("name is required".to_string()));
        }
        let phone = non_blank(update.phone);
        if let Some(p) = &phone {
            validate_phone(p)?;
        }

        let email = auth::normalize_email(email);
        let account = self
            .users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or_else(|| StoreError::Invalid(format!("no account for {email}")))?;
        account.name = name.to_string();
        account.phone = phone;
        account.address = non_blank(update.address);
        Ok(account.clone())
    }

    // Orders

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn orders_for<'a>(&'a self, email: &str) -> impl Iterator<Item = &'a Order> + 'a {
        let email = auth::normalize_email(email);
        self.orders
            .iter()
            .filter(move |o| o.customer_email == email)
    }

    pub fn order(&self, id: u64) -> Result<&Order, StoreError> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound { kind: "order", id })
    }

    /// Turn the cart into a pending order. Stock is checked for every line
    /// before any of it is taken.
    pub fn place_order(
        &mut self,
        email: &str,
        cart: &Cart,
        shipping: Shipping,
        payment: PaymentMethod,
        placed_at: DateTime<Utc>,
    ) -> Result<Order, StoreError> {
        if cart.is_empty() {
            return Err(CartError::Empty.into());
        }
        validate_shipping(&shipping)?;
        let email = auth::normalize_email(email);
        if self.user_by_email(&email).is_none() {
            return Err(StoreError::Invalid(format!("no account for {email}")));
        }

        let mut lines = Vec::with_capacity(cart.lines().len());
        for line in cart.lines() {
            let product = self.product(line.product_id)?;
            if product.stock < line.quantity {
                return Err(StoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.stock,
                });
            }
            lines.push(OrderLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                quantity: line.quantity,
            });
        }
        for line in &lines {
            if let Some(p) = self.products.iter_mut().find(|p| p.id == line.product_id) {
                p.stock -= line.quantity;
            }
        }

        let order = Order {
            id: bump(&mut self.next_ids.order),
            customer_email: email,
            total: lines.iter().map(OrderLine::total).fold(0, u64::saturating_add),
            lines,
            status: OrderStatus::Pending,
            shipping: Shipping {
                full_name: shipping.full_name.trim().to_string(),
                phone: shipping.phone.trim().to_string(),
                address: shipping.address.trim().to_string(),
            },
            payment,
            placed_at,
        };
        tracing::info!(
            "store.place_order: id={} lines={} total={}",
            order.id,
            order.lines.len(),
            order.total
        );
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Move an order along its lifecycle. Cancelling puts the stock back.
    pub fn set_order_status(&mut self, id: u64, to: OrderStatus) -> Result<Order, StoreError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound { kind: "order", id })?;
        if !order.status.can_become(to) {
            return Err(StoreError::InvalidTransition {
                id,
                from: order.status,
                to,
            });
        }
        tracing::info!("store.set_order_status: id={id} {} -> {to}", order.status);
        order.status = to;
        let order = order.clone();

        if to == OrderStatus::Cancelled {
            for line in &order.lines {
                if let Some(p) = self.products.iter_mut().find(|p| p.id == line.product_id) {
                    p.stock += line.quantity;
                }
            }
        }
        Ok(order)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Nine to eleven digits, optionally with a leading `+` and spaces.
pub fn validate_phone(phone: &str) -> Result<(), CheckoutError> {
    let trimmed = phone.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = body.chars().filter(|c| !c.is_whitespace());
    let ok = digits.clone().all(|c| c.is_ascii_digit()) && (9..=11).contains(&digits.count());
    if ok {
        Ok(())
    } else {
        Err(CheckoutError::BadPhone(phone.to_string()))
    }
}

pub fn validate_shipping(shipping: &Shipping) -> Result<(), CheckoutError> {
    if shipping.full_name.trim().is_empty() {
        return Err(CheckoutError::Missing("full name"));
    }
    if shipping.phone.trim().is_empty() {
        return Err(CheckoutError::Missing("phone"));
    }
    validate_phone(&shipping.phone)?;
    if shipping.address.trim().is_empty() {
        return Err(CheckoutError::Missing("address"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn store_with_product(stock: u32) -> (ShopStore, Product) {
        let mut store = ShopStore::new();
        store.ensure_admin(&owner(), now()).unwrap();
        let cat = store
            .create_category(CategoryDraft {
                name: "Trà".to_string(),
                description: String::new(),
            })
            .unwrap();
        let product = store
            .create_product(ProductDraft {
                category_id: cat.id,
                name: "Trà sen".to_string(),
                description: String::new(),
                price: 200_000,
                stock,
            })
            .unwrap();
        store
            .register(
                Registration {
                    email: "lan@shop.vn".to_string(),
                    name: "Lan".to_string(),
                    password: "Passw0rd".to_string(),
                },
                now(),
            )
            .unwrap();
        (store, product)
    }

    fn owner() -> AdminBootstrap {
        AdminBootstrap {
            email: "owner@shop.vn".to_string(),
            password: "Own3rPass".to_string(),
        }
    }

    fn shipping() -> Shipping {
        Shipping {
            full_name: "Nguyễn Thị Lan".to_string(),
            phone: "0901 234 567".to_string(),
            address: "12 Hàng Bạc, Hà Nội".to_string(),
        }
    }

    #[test]
    fn category_names_are_unique_and_required() {
        let mut store = ShopStore::new();
        let draft = |name: &str| CategoryDraft {
            name: name.to_string(),
            description: String::new(),
        };
        let a = store.create_category(draft("Cà phê")).unwrap();
        assert!(store.create_category(draft("  ")).is_err());
        assert!(store.create_category(draft("CÀ PHÊ")).is_err());
        // Renaming to its own name is fine.
        assert!(store.update_category(a.id, draft("Cà phê")).is_ok());
    }

    #[test]
    fn category_with_products_cannot_be_deleted() {
        let (mut store, product) = store_with_product(1);
        assert_eq!(
            store.delete_category(product.category_id),
            Err(StoreError::CategoryInUse(product.category_id))
        );
        store.delete_product(product.id).unwrap();
        assert!(store.delete_category(product.category_id).is_ok());
        assert!(store.categories().is_empty());
    }

    #[test]
    fn product_needs_existing_category() {
        let mut store = ShopStore::new();
        let err = store
            .create_product(ProductDraft {
                category_id: 9,
                name: "X".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound { kind: "category", id: 9 });
    }

    #[test]
    fn register_and_authenticate() {
        let (mut store, _) = store_with_product(1);
        assert!(store.authenticate("LAN@shop.vn", "Passw0rd").is_ok());
        assert_eq!(
            store.authenticate("lan@shop.vn", "wrong").unwrap_err(),
            StoreError::InvalidCredentials
        );
        let dup = store.register(
            Registration {
                email: " Lan@Shop.vn ".to_string(),
                name: "Lan 2".to_string(),
                password: "Passw0rd".to_string(),
            },
            now(),
        );
        assert_eq!(dup, Err(StoreError::DuplicateEmail("lan@shop.vn".to_string())));
        assert_eq!(store.user_by_email("lan@shop.vn").unwrap().role, Role::Customer);
    }

    #[test]
    fn first_registration_on_a_store_without_admin_is_the_admin() {
        let mut store = ShopStore::new();
        let reg = |email: &str| Registration {
            email: email.to_string(),
            name: "Chủ".to_string(),
            password: "Passw0rd".to_string(),
        };
        assert_eq!(store.register(reg("chu@shop.vn"), now()).unwrap().role, Role::Admin);
        assert_eq!(store.register(reg("khach@shop.vn"), now()).unwrap().role, Role::Customer);
    }

    #[test]
    fn ensure_admin_only_creates_one() {
        let mut store = ShopStore::new();
        let created = store.ensure_admin(&owner(), now()).unwrap().unwrap();
        assert_eq!(created.role, Role::Admin);
        assert_eq!(store.ensure_admin(&owner(), now()).unwrap(), None);
        assert_eq!(store.users().len(), 1);
        assert!(store.authenticate("owner@shop.vn", "Own3rPass").is_ok());
    }

    #[test]
    fn price_above_the_cap_is_rejected() {
        let (mut store, product) = store_with_product(1);
        let err = store
            .create_product(ProductDraft {
                category_id: product.category_id,
                name: "Vàng".to_string(),
                price: MAX_PRICE + 1,
                stock: 2,
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        let at_cap = ProductDraft {
            category_id: product.category_id,
            name: "Vàng".to_string(),
            price: MAX_PRICE,
            stock: 2,
            ..Default::default()
        };
        assert!(store.update_product(product.id, at_cap).is_ok());
    }

    #[test]
    fn place_order_takes_stock_and_snapshots_lines() {
        let (mut store, product) = store_with_product(3);
        let mut cart = Cart::new();
        cart.add(&product, 2).unwrap();

        let order = store
            .place_order("lan@shop.vn", &cart, shipping(), PaymentMethod::CashOnDelivery, now())
            .unwrap();
        assert_eq!(order.total, 400_000);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(store.product(product.id).unwrap().stock, 1);
        assert_eq!(store.orders_for("lan@shop.vn").count(), 1);

        // Second attempt exceeds what is left.
        let err = store
            .place_order("lan@shop.vn", &cart, shipping(), PaymentMethod::BankTransfer, now())
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::InsufficientStock {
                name: "Trà sen".to_string(),
                available: 1
            }
        );
    }

    #[test]
    fn place_order_validates_input() {
        let (mut store, product) = store_with_product(3);
        let empty = Cart::new();
        assert_eq!(
            store.place_order("lan@shop.vn", &empty, shipping(), PaymentMethod::CashOnDelivery, now()),
            Err(StoreError::Cart(CartError::Empty))
        );

        let mut cart = Cart::new();
        cart.add(&product, 1).unwrap();
        let mut bad = shipping();
        bad.phone = "12ab".to_string();
        assert_eq!(
            store.place_order("lan@shop.vn", &cart, bad, PaymentMethod::CashOnDelivery, now()),
            Err(StoreError::Checkout(CheckoutError::BadPhone("12ab".to_string())))
        );
        assert_eq!(store.product(product.id).unwrap().stock, 3);
    }

    #[test]
    fn cancelling_restocks_and_closed_orders_stay_closed() {
        let (mut store, product) = store_with_product(3);
        let mut cart = Cart::new();
        cart.add(&product, 3).unwrap();
        let order = store
            .place_order("lan@shop.vn", &cart, shipping(), PaymentMethod::CashOnDelivery, now())
            .unwrap();
        assert_eq!(store.product(product.id).unwrap().stock, 0);

        store.set_order_status(order.id, OrderStatus::Cancelled).unwrap();
        assert_eq!(store.product(product.id).unwrap().stock, 3);
        assert!(matches!(
            store.set_order_status(order.id, OrderStatus::Confirmed),
            Err(StoreError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn profile_update_validates_phone() {
        let (mut store, _) = store_with_product(1);
        let updated = store
            .update_profile(
                "lan@shop.vn",
                ProfileUpdate {
                    name: "Lan Nguyễn".to_string(),
                    phone: Some("+84 901 234 567".to_string()),
                    address: Some("  ".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.address, None);
        assert!(store
            .update_profile(
                "lan@shop.vn",
                ProfileUpdate {
                    name: "Lan".to_string(),
                    phone: Some("123".to_string()),
                    address: None,
                },
            )
            .is_err());
    }
}
