//! Shared UI for the storefront: state contexts, the route gate, and every
//! page. Platform crates own the `Routable` enum and mount these.

mod browser_storage;
pub use browser_storage::BrowserStorage;

mod state;
pub use state::{use_app, AppState, AppStateProvider};

mod guard;
pub use guard::RouteGate;

mod i18n;
pub use i18n::{set_locale, use_locale, I18nProvider};

mod toast;
pub use toast::{use_toasts, Notice, ToastProvider, Toasts};

mod theme;
pub use theme::ShopTheme;

mod account_menu;
pub use account_menu::AccountMenu;

mod nav;
pub use nav::ShopNav;

mod forms;
mod labels;

mod pages;
pub use pages::*;
