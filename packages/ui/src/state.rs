use chrono::Utc;
use dioxus::prelude::*;
use shop::types::UserAccount;
use shop::{AppConfig, Cart, CartError, Session, ShopStore, StoreError};

use crate::BrowserStorage;

/// Shared client state: who is signed in, the store, and the cart. Each
/// mutation goes through a method here so that it is persisted right away.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: Signal<Session>,
    pub store: Signal<ShopStore>,
    pub cart: Signal<Cart>,
}

impl AppState {
    pub fn login(&self, account: &UserAccount) {
        let mut session = self.session;
        session.set(Session::login(&mut BrowserStorage, account));
    }

    pub fn logout(&self) {
        let mut session = self.session;
        session.set(Session::logout(&mut BrowserStorage));
        self.clear_cart();
    }

    pub fn clear_cart(&self) {
        let mut cart = self.cart;
        cart.write().clear();
        cart.peek().save(&mut BrowserStorage);
    }

    /// Signed-in email, or empty when anonymous.
    pub fn email(&self) -> String {
        self.session.read().email.clone().unwrap_or_default()
    }

    pub fn update_store<T>(
        &self,
        f: impl FnOnce(&mut ShopStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut store = self.store;
        let result = {
            let mut guard = store.write();
            f(&mut *guard)
        };
        if result.is_ok() {
            store.peek().save(&mut BrowserStorage);
        }
        result
    }

    pub fn update_cart<T>(
        &self,
        f: impl FnOnce(&mut Cart) -> Result<T, CartError>,
    ) -> Result<T, CartError> {
        let mut cart = self.cart;
        let result = {
            let mut guard = cart.write();
            f(&mut *guard)
        };
        if result.is_ok() {
            cart.peek().save(&mut BrowserStorage);
        }
        result
    }
}

/// Load the store from client storage, creating the configured admin when
/// it has none.
fn open_store(config: &AppConfig) -> ShopStore {
    let now = Utc::now();
    let mut store = ShopStore::load_or_init(&mut BrowserStorage, config.seed_demo_data, now);
    if let Some(admin) = &config.admin {
        match store.ensure_admin(admin, now) {
            Ok(Some(account)) => {
                tracing::info!("app_state.open_store: admin created id={}", account.id);
                store.save(&mut BrowserStorage);
            }
            Ok(None) => {}
            Err(err) => tracing::error!("app_state.open_store: admin bootstrap failed: {err}"),
        }
    }
    store
}

/// Load session, store and cart from client storage and provide them as
/// `AppState`.
#[component]
pub fn AppStateProvider(config: AppConfig, children: Element) -> Element {
    let session = use_signal(|| Session::load(&BrowserStorage));
    let store = use_signal(move || open_store(&config));
    let cart = use_signal(|| Cart::load(&BrowserStorage));
    use_context_provider(|| AppState {
        session,
        store,
        cart,
    });

    rsx! { {children} }
}

pub fn use_app() -> AppState {
    use_context::<AppState>()
}
