//! Platform-independent core of the storefront: roles and sessions, the route
//! table and navigation guard, UI strings, and the client-side store.

pub mod auth;
pub mod cart;
pub mod config;
pub mod error;
pub mod guard;
pub mod i18n;
pub mod reports;
pub mod role;
pub mod routes;
pub mod session;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(test)]
mod types_tests;

pub use cart::Cart;
pub use config::{AdminBootstrap, AppConfig, AppMode};
pub use error::{CartError, CheckoutError, RoleParseError, RouteTableError, StoreError};
pub use guard::{check, Decision, DenyReason, Navigator, Outcome};
pub use i18n::{format_price, t, Locale};
pub use role::Role;
pub use routes::{ResolvedRoute, RouteMeta, RouteSpec, RouteTable, Target, View, LOGIN_PATH};
pub use session::Session;
pub use storage::{MemoryStorage, Storage};
pub use store::ShopStore;
