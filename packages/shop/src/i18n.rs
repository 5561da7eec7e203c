use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Vi];
    pub const FALLBACK: Locale = Locale::En;

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    /// Native name, for the language switcher.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Vi => "Tiếng Việt",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.trim().to_ascii_lowercase();
        let base = lower.split(['-', '_']).next().unwrap_or("");
        match base {
            "en" => Some(Locale::En),
            "vi" => Some(Locale::Vi),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One UI string. Every key carries a column per locale; an empty column is
/// an untranslated string and falls back to English.
#[derive(Debug, Clone, Copy)]
pub struct Message {
    pub key: &'static str,
    pub en: &'static str,
    pub vi: &'static str,
}

impl Message {
    fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Vi => self.vi,
        }
    }
}

macro_rules! messages {
    ($($key:literal => $en:literal, $vi:literal;)*) => {
        &[$(Message { key: $key, en: $en, vi: $vi }),*]
    };
}

pub static MESSAGES: &[Message] = messages! {
    "app.name" => "Shop", "Cửa hàng";
    "welcomeMessage" => "Welcome to our website!", "Chào mừng bạn đến với trang web của chúng tôi!";
    "lang.label" => "Language", "Ngôn ngữ";

    // Nav
    "nav.dashboard" => "Dashboard", "Tổng quan";
    "nav.categories" => "Categories", "Danh mục";
    "nav.products" => "Products", "Sản phẩm";
    "nav.orders" => "Orders", "Đơn hàng";
    "nav.users" => "Users", "Người dùng";
    "nav.finance" => "Finance", "Tài chính";
    "nav.analytics" => "Analytics", "Thống kê";
    "nav.shop" => "Shop", "Mua sắm";
    "nav.cart" => "Cart", "Giỏ hàng";
    "nav.my_orders" => "My orders", "Đơn hàng của tôi";
    "nav.profile" => "Profile", "Hồ sơ";
    "nav.login" => "Log in", "Đăng nhập";
    "nav.register" => "Register", "Đăng ký";
    "nav.logout" => "Log out", "Đăng xuất";

    // Common
    "common.back" => "Back", "Quay lại";
    "common.save" => "Save", "Lưu";
    "common.create" => "Create", "Tạo mới";
    "common.edit" => "Edit", "Sửa";
    "common.delete" => "Delete", "Xóa";
    "common.cancel" => "Cancel", "Hủy";
    "common.view" => "View", "Xem";
    "common.name" => "Name", "Tên";
    "common.description" => "Description", "Mô tả";
    "common.price" => "Price", "Giá";
    "common.stock" => "Stock", "Tồn kho";
    "common.category" => "Category", "Danh mục";
    "common.quantity" => "Quantity", "Số lượng";
    "common.total" => "Total", "Tổng cộng";
    "common.status" => "Status", "Trạng thái";
    "common.email" => "Email", "Email";
    "common.phone" => "Phone", "Số điện thoại";
    "common.address" => "Address", "Địa chỉ";
    "common.id" => "ID", "Mã";
    "common.not_found" => "Not found.", "Không tìm thấy.";

    // Auth
    "auth.login.title" => "Log in", "Đăng nhập";
    "auth.login.submit" => "Log in", "Đăng nhập";
    "auth.register.title" => "Create an account", "Tạo tài khoản";
    "auth.register.submit" => "Register", "Đăng ký";
    "auth.password" => "Password", "Mật khẩu";
    "auth.no_account" => "No account yet?", "Chưa có tài khoản?";
    "auth.have_account" => "Already registered?", "Đã có tài khoản?";
    "auth.logging_out" => "Signing you out…", "Đang đăng xuất…";
    "auth.failed" => "Login failed", "Đăng nhập thất bại";
    "auth.register_failed" => "Registration failed", "Đăng ký thất bại";
    "auth.registered" => "Account created. You can log in now.", "Đã tạo tài khoản. Bạn có thể đăng nhập.";

    "notfound.title" => "Page not found", "Không tìm thấy trang";
    "notfound.body" => "The page you asked for does not exist.", "Trang bạn yêu cầu không tồn tại.";

    // Admin
    "admin.dashboard.title" => "Store overview", "Tổng quan cửa hàng";
    "categories.title" => "Categories", "Danh mục";
    "categories.new" => "New category", "Danh mục mới";
    "categories.edit" => "Edit category", "Sửa danh mục";
    "categories.delete_confirm" => "Delete this category?", "Xóa danh mục này?";
    "categories.empty" => "No categories yet.", "Chưa có danh mục nào.";
    "categories.products" => "Products in this category", "Sản phẩm trong danh mục";
    "products.title" => "Products", "Sản phẩm";
    "products.new" => "New product", "Sản phẩm mới";
    "products.edit" => "Edit product", "Sửa sản phẩm";
    "products.delete_confirm" => "Delete this product?", "Xóa sản phẩm này?";
    "products.empty" => "No products yet.", "Chưa có sản phẩm nào.";
    "products.choose_category" => "Choose a category", "Chọn danh mục";
    "orders.title" => "Orders", "Đơn hàng";
    "orders.empty" => "No orders yet.", "Chưa có đơn hàng nào.";
    "orders.placed_at" => "Placed", "Ngày đặt";
    "orders.customer" => "Customer", "Khách hàng";
    "orders.move_to" => "Move to", "Chuyển sang";
    "orders.shipping" => "Shipping", "Giao hàng";
    "orders.payment" => "Payment", "Thanh toán";
    "users.title" => "Users", "Người dùng";
    "users.role" => "Role", "Vai trò";
    "users.joined" => "Joined", "Ngày tham gia";
    "finance.title" => "Finance", "Tài chính";
    "finance.revenue" => "Revenue", "Doanh thu";
    "finance.pending" => "Awaiting confirmation", "Chờ xác nhận";
    "finance.cancelled" => "Cancelled value", "Giá trị đã hủy";
    "finance.by_status" => "Orders by status", "Đơn hàng theo trạng thái";
    "analytics.title" => "Analytics", "Thống kê";
    "analytics.orders" => "Orders", "Số đơn hàng";
    "analytics.average" => "Average order value", "Giá trị đơn trung bình";
    "analytics.top_products" => "Best sellers", "Bán chạy nhất";
    "analytics.units" => "Units sold", "Số lượng bán";
    "analytics.by_category" => "Units by category", "Số lượng theo danh mục";

    "status.pending" => "Pending", "Chờ xác nhận";
    "status.confirmed" => "Confirmed", "Đã xác nhận";
    "status.shipped" => "Shipped", "Đang giao";
    "status.delivered" => "Delivered", "Đã giao";
    "status.cancelled" => "Cancelled", "Đã hủy";
    "payment.cash_on_delivery" => "Cash on delivery", "Thanh toán khi nhận hàng";
    "payment.bank_transfer" => "Bank transfer", "Chuyển khoản ngân hàng";
    "role.admin" => "Administrator", "Quản trị viên";
    "role.customer" => "Customer", "Khách hàng";

    // Customer
    "customer.home.title" => "Hello", "Xin chào";
    "customer.home.body" => "Browse the shop or check on your orders.", "Hãy xem sản phẩm hoặc theo dõi đơn hàng của bạn.";
    "shop.title" => "Shop", "Cửa hàng";
    "shop.all_categories" => "All categories", "Tất cả danh mục";
    "shop.add_to_cart" => "Add to cart", "Thêm vào giỏ";
    "shop.in_stock" => "in stock", "còn hàng";
    "shop.out_of_stock" => "Out of stock", "Hết hàng";
    "cart.title" => "Your cart", "Giỏ hàng của bạn";
    "cart.empty" => "Your cart is empty.", "Giỏ hàng trống.";
    "cart.remove" => "Remove", "Bỏ";
    "cart.subtotal" => "Subtotal", "Tạm tính";
    "cart.checkout" => "Proceed to checkout", "Tiến hành thanh toán";
    "checkout.title" => "Checkout", "Thanh toán";
    "checkout.full_name" => "Full name", "Họ và tên";
    "checkout.place_order" => "Place order", "Đặt hàng";
    "profile.title" => "Your profile", "Hồ sơ của bạn";

    // Toasts
    "toast.error" => "Something went wrong", "Đã xảy ra lỗi";
    "toast.saved" => "Saved", "Đã lưu";
    "toast.deleted" => "Deleted", "Đã xóa";
    "toast.added_to_cart" => "Added to cart", "Đã thêm vào giỏ";
    "toast.order_placed" => "Order placed", "Đã đặt hàng";
    "toast.error.stock" => "Not enough stock", "Không đủ hàng";
    "toast.error.invalid" => "Please check your input", "Vui lòng kiểm tra lại thông tin";
    "toast.error.in_use" => "Still in use", "Vẫn đang được sử dụng";
    "toast.error.transition" => "Status change not allowed", "Không thể đổi trạng thái";
    "toast.error.cart" => "Cart not updated", "Chưa cập nhật giỏ hàng";
};

fn index() -> &'static HashMap<&'static str, &'static Message> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Message>> = OnceLock::new();
    INDEX.get_or_init(|| MESSAGES.iter().map(|m| (m.key, m)).collect())
}

/// Text for `key` in `locale`, if that locale has it.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    index()
        .get(key)
        .map(|m| m.text(locale))
        .filter(|text| !text.is_empty())
}

/// Translate a key. Falls back to English, then to the key itself.
pub fn t(locale: Locale, key: &str) -> String {
    lookup(locale, key)
        .or_else(|| lookup(Locale::FALLBACK, key))
        .unwrap_or(key)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateKey(&'static str),
    MissingText { key: &'static str, locale: Locale },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateKey(key) => write!(f, "duplicate key {key}"),
            CatalogIssue::MissingText { key, locale } => {
                write!(f, "{key} has no {locale} text")
            }
        }
    }
}

/// Completeness check over the shipped table.
pub fn check_catalog() -> Vec<CatalogIssue> {
    check_messages(MESSAGES)
}

pub fn check_messages(messages: &[Message]) -> Vec<CatalogIssue> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();
    for m in messages {
        if !seen.insert(m.key) {
            issues.push(CatalogIssue::DuplicateKey(m.key));
        }
        for locale in Locale::ALL {
            if m.text(locale).trim().is_empty() {
                issues.push(CatalogIssue::MissingText { key: m.key, locale });
            }
        }
    }
    issues
}

/// Price in đồng with the locale's digit grouping.
pub fn format_price(locale: Locale, amount: u64) -> String {
    let sep = match locale {
        Locale::En => ',',
        Locale::Vi => '.',
    };
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out.push_str(" ₫");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_message_in_both_locales() {
        assert_eq!(
            t(Locale::Vi, "welcomeMessage"),
            "Chào mừng bạn đến với trang web của chúng tôi!"
        );
        assert_eq!(t(Locale::En, "welcomeMessage"), "Welcome to our website!");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(t(Locale::Vi, "missing.key"), "missing.key");
        assert_eq!(lookup(Locale::En, "missing.key"), None);
    }

    #[test]
    fn shipped_catalog_is_complete() {
        assert_eq!(check_catalog(), vec![]);
    }

    #[test]
    fn check_reports_duplicates_and_gaps() {
        let messages = [
            Message { key: "a", en: "A", vi: "" },
            Message { key: "a", en: "A", vi: "Á" },
            Message { key: "b", en: " ", vi: "B" },
        ];
        assert_eq!(
            check_messages(&messages),
            vec![
                CatalogIssue::MissingText { key: "a", locale: Locale::Vi },
                CatalogIssue::DuplicateKey("a"),
                CatalogIssue::MissingText { key: "b", locale: Locale::En },
            ]
        );
    }

    #[test]
    fn locale_codes() {
        assert_eq!(Locale::from_code("vi-VN"), Some(Locale::Vi));
        assert_eq!(Locale::from_code("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
        for l in Locale::ALL {
            assert_eq!(Locale::from_code(l.code()), Some(l));
        }
    }

    #[test]
    fn prices_group_digits_per_locale() {
        assert_eq!(format_price(Locale::En, 1_250_000), "1,250,000 ₫");
        assert_eq!(format_price(Locale::Vi, 1_250_000), "1.250.000 ₫");
        assert_eq!(format_price(Locale::Vi, 999), "999 ₫");
        assert_eq!(format_price(Locale::En, 0), "0 ₫");
    }
}
