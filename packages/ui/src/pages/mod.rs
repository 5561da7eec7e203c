//! Page components. Each one is mounted by the platform router under a
//! `RouteGate`, so by the time it renders the guard has already let the
//! session through.

mod admin;
mod customer;
mod public;

pub use admin::{
    AdminDashboard, AnalyticsPage, CategoryCreatePage, CategoryDeletePage, CategoryDetailPage,
    CategoryEditPage, CategoryListPage, FinancePage, OrderDetailPage, OrderListPage,
    ProductCreatePage, ProductDeletePage, ProductDetailPage, ProductEditPage, ProductListPage,
    UserListPage,
};
pub use customer::{
    CartPage, CheckoutPage, CustomerHome, MyOrderPage, MyOrdersPage, ProfilePage, ShopPage,
    ShopProductPage,
};
pub use public::{LoginPage, LogoutPage, NotFoundPage, RegisterPage};
