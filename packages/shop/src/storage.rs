//! Client-side key/value persistence.
//!
//! The browser build backs this with `window.localStorage`; tests and native
//! builds use [`MemoryStorage`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const ROLE_KEY: &str = "shop.role";
pub const USER_KEY: &str = "shop.user";
pub const CART_KEY: &str = "shop.cart";
pub const STORE_KEY: &str = "shop.store";
pub const LOCALE_KEY: &str = "shop.locale";

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// Read a JSON blob. Missing keys yield `None`; unreadable blobs are logged
/// and also yield `None` so callers start fresh.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("storage.load_json: discarding unreadable {key}: {e}");
            None
        }
    }
}

pub fn save_json<T: Serialize>(storage: &mut dyn Storage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.set(key, &raw),
        Err(e) => tracing::error!("storage.save_json: failed to encode {key}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_get_remove() {
        let mut s = MemoryStorage::new();
        assert_eq!(s.get(ROLE_KEY), None);
        s.set(ROLE_KEY, "admin");
        assert_eq!(s.get(ROLE_KEY).as_deref(), Some("admin"));
        s.remove(ROLE_KEY);
        assert_eq!(s.get(ROLE_KEY), None);
    }

    #[test]
    fn unreadable_json_is_discarded() {
        let mut s = MemoryStorage::new();
        s.set(CART_KEY, "{not json");
        let loaded: Option<Vec<u32>> = load_json(&s, CART_KEY);
        assert!(loaded.is_none());
    }
}
