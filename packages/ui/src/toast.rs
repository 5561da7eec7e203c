use dioxus::prelude::*;
use shop::{t, CartError, Locale, StoreError};

#[cfg(target_arch = "wasm32")]
const TOAST_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Success => "toast toast_success",
        }
    }
}

/// Something that went right, shown as a success toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A record was written; carries its name or new state when useful.
    Saved(Option<String>),
    Deleted,
    AddedToCart(String),
    OrderPlaced(u64),
    Registered,
}

impl Notice {
    pub fn title_key(&self) -> &'static str {
        match self {
            Notice::Saved(_) => "toast.saved",
            Notice::Deleted => "toast.deleted",
            Notice::AddedToCart(_) => "toast.added_to_cart",
            Notice::OrderPlaced(_) => "toast.order_placed",
            Notice::Registered => "auth.registered",
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            Notice::Saved(detail) => detail.clone(),
            Notice::AddedToCart(name) => Some(name.clone()),
            Notice::OrderPlaced(id) => Some(format!("#{id}")),
            Notice::Deleted | Notice::Registered => None,
        }
    }
}

/// Message key for the toast title of a rejected store operation. The error
/// text itself goes in the toast body.
pub fn store_error_title(err: &StoreError) -> &'static str {
    match err {
        StoreError::NotFound { .. } => "common.not_found",
        StoreError::Invalid(_)
        | StoreError::WeakPassword(_)
        | StoreError::BadEmail(_)
        | StoreError::Checkout(_) => "toast.error.invalid",
        StoreError::CategoryInUse(_) => "toast.error.in_use",
        StoreError::DuplicateEmail(_) => "auth.register_failed",
        StoreError::InvalidCredentials => "auth.failed",
        StoreError::InsufficientStock { .. } => "toast.error.stock",
        StoreError::InvalidTransition { .. } => "toast.error.transition",
        StoreError::Cart(err) => cart_error_title(err),
    }
}

pub fn cart_error_title(err: &CartError) -> &'static str {
    match err {
        CartError::ZeroQuantity => "toast.error.invalid",
        CartError::ExceedsStock { .. } => "toast.error.stock",
        CartError::NotInCart(_) | CartError::Empty => "toast.error.cart",
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    title: String,
    detail: Option<String>,
    kind: ToastKind,
}

/// Handle for raising toasts. Titles are localized here so pages only pass
/// the outcome.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn notify(&self, locale: Locale, notice: Notice) {
        self.push(t(locale, notice.title_key()), notice.detail(), ToastKind::Success);
    }

    pub fn store_error(&self, locale: Locale, err: &StoreError) {
        tracing::debug!("toast.store_error: {err}");
        self.push(t(locale, store_error_title(err)), Some(err.to_string()), ToastKind::Error);
    }

    pub fn cart_error(&self, locale: Locale, err: &CartError) {
        tracing::debug!("toast.cart_error: {err}");
        self.push(t(locale, cart_error_title(err)), Some(err.to_string()), ToastKind::Error);
    }

    /// Form input that could not be parsed before reaching the store.
    pub fn invalid_input(&self, locale: Locale, fields: String) {
        self.push(t(locale, "toast.error.invalid"), Some(fields), ToastKind::Error);
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    fn push(&self, title: String, detail: Option<String>, kind: ToastKind) {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);
        let mut items = self.items;
        items.with_mut(|items| {
            items.push(Toast {
                id,
                title,
                detail,
                kind,
            })
        });
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let this = *self;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            this.dismiss(id);
        });
    }

    /// No browser timer off wasm; toasts stay until closed.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        ToastViewport {}
    }
}

#[component]
fn ToastViewport() -> Element {
    let toasts = use_toasts();
    let items = toasts.items.read().clone();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items {
                div { key: "{toast.id}", class: toast.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(detail) = &toast.detail {
                            div { class: "toast_body", "{detail}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop::i18n::lookup;
    use shop::types::OrderStatus;
    use shop::CheckoutError;

    #[test]
    fn stock_problems_share_a_title_wherever_they_come_from() {
        let from_store = StoreError::InsufficientStock {
            name: "Trà sen".to_string(),
            available: 1,
        };
        let from_cart = CartError::ExceedsStock {
            name: "Trà sen".to_string(),
            available: 1,
        };
        assert_eq!(store_error_title(&from_store), "toast.error.stock");
        assert_eq!(cart_error_title(&from_cart), "toast.error.stock");
        assert_eq!(store_error_title(&StoreError::Cart(from_cart)), "toast.error.stock");
    }

    #[test]
    fn auth_errors_use_the_auth_titles() {
        assert_eq!(store_error_title(&StoreError::InvalidCredentials), "auth.failed");
        assert_eq!(
            store_error_title(&StoreError::DuplicateEmail("lan@shop.vn".to_string())),
            "auth.register_failed"
        );
        assert_eq!(
            store_error_title(&StoreError::WeakPassword("too short")),
            "toast.error.invalid"
        );
    }

    #[test]
    fn every_title_has_text_in_both_locales() {
        let errors = [
            StoreError::NotFound { kind: "product", id: 9 },
            StoreError::Invalid("name is required".to_string()),
            StoreError::CategoryInUse(1),
            StoreError::InvalidTransition {
                id: 1,
                from: OrderStatus::Delivered,
                to: OrderStatus::Pending,
            },
            StoreError::Checkout(CheckoutError::Missing("address")),
            StoreError::Cart(CartError::Empty),
        ];
        let notices = [
            Notice::Saved(None),
            Notice::Deleted,
            Notice::AddedToCart("Trà sen".to_string()),
            Notice::OrderPlaced(3),
            Notice::Registered,
        ];
        let keys = errors
            .iter()
            .map(store_error_title)
            .chain(notices.iter().map(Notice::title_key));
        for key in keys {
            for locale in Locale::ALL {
                assert!(lookup(locale, key).is_some(), "{key} missing for {locale:?}");
            }
        }
    }

    #[test]
    fn order_notice_carries_the_order_number() {
        assert_eq!(Notice::OrderPlaced(12).detail().as_deref(), Some("#12"));
        assert_eq!(Notice::Deleted.detail(), None);
    }
}
