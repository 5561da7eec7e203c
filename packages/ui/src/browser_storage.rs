use shop::storage::Storage;

/// `window.localStorage` in the browser. Elsewhere (desktop webview tests,
/// native unit tests) a per-thread in-memory map stands in.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(s) = local_storage() {
            if s.set_item(key, value).is_err() {
                tracing::warn!("browser_storage.set: write refused for {key}");
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(s) = local_storage() {
            if s.remove_item(key).is_err() {
                tracing::warn!("browser_storage.remove: delete refused for {key}");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static FALLBACK: std::cell::RefCell<shop::MemoryStorage> =
        std::cell::RefCell::new(shop::MemoryStorage::new());
}

#[cfg(not(target_arch = "wasm32"))]
impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        FALLBACK.with(|s| s.borrow().get(key))
    }

    fn set(&mut self, key: &str, value: &str) {
        FALLBACK.with(|s| s.borrow_mut().set(key, value));
    }

    fn remove(&mut self, key: &str) {
        FALLBACK.with(|s| s.borrow_mut().remove(key));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn fallback_behaves_like_storage() {
        let mut s = BrowserStorage;
        s.set("k", "v");
        assert_eq!(s.get("k").as_deref(), Some("v"));
        s.remove("k");
        assert_eq!(s.get("k"), None);
    }
}
