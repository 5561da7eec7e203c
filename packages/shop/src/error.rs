use thiserror::Error;

use crate::types::OrderStatus;

/// A role string that is neither `admin` nor `customer`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0:?}")]
pub struct RoleParseError(pub String);

/// Rejections raised while compiling route specs into a `RouteTable`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route specs: {0}")]
    Parse(String),

    #[error("route {path}: unknown role {role:?}")]
    UnknownRole { path: String, role: String },

    #[error("route {path}: needs a view, a redirect or children")]
    EmptyRoute { path: String },

    #[error("route {path}: has both a view and a redirect")]
    ViewAndRedirect { path: String },

    #[error("route {path}: malformed segment {segment:?}")]
    BadSegment { path: String, segment: String },

    #[error("route {path}: declared more than once")]
    DuplicatePath { path: String },

    #[error("route {path}: redirect target {target} does not resolve")]
    DanglingRedirect { path: String, target: String },

    #[error("route {path}: redirect chain loops")]
    RedirectLoop { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },

    #[error("{0}")]
    Invalid(String),

    #[error("category {0} still has products")]
    CategoryInUse(u64),

    #[error("an account with email {0} already exists")]
    DuplicateEmail(String),

    #[error("{0}")]
    WeakPassword(&'static str),

    #[error("email {0:?} is not valid")]
    BadEmail(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("not enough stock for {name}: {available} left")]
    InsufficientStock { name: String, available: u32 },

    #[error("cannot move order {id} from {from} to {to}")]
    InvalidTransition {
        id: u64,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("quantity must be positive")]
    ZeroQuantity,

    #[error("only {available} of {name} in stock")]
    ExceedsStock { name: String, available: u32 },

    #[error("product {0} is not in the cart")]
    NotInCart(u64),

    #[error("the cart is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("phone number {0:?} is not valid")]
    BadPhone(String),
}
