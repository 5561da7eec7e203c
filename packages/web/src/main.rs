use dioxus::prelude::*;
use shop::{AppConfig, Navigator, RouteTable, View};

use ui::{
    AdminDashboard, AnalyticsPage, CartPage, CategoryCreatePage, CategoryDeletePage,
    CategoryDetailPage, CategoryEditPage, CategoryListPage, CheckoutPage, CustomerHome,
    FinancePage, LoginPage, LogoutPage, MyOrderPage, MyOrdersPage, OrderDetailPage,
    OrderListPage, ProductCreatePage, ProductDeletePage, ProductDetailPage, ProductEditPage,
    ProductListPage, ProfilePage, RegisterPage, ShopPage, ShopProductPage, UserListPage,
};
use views::NotFound;

mod views;

/// Mirrors `shop::routes::storefront_specs`. Access rules live in that
/// table; this enum only maps paths to components.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[redirect("/", || Route::LoginPage {})]
    #[route("/login")]
    LoginPage {},
    #[route("/register")]
    RegisterPage {},
    #[route("/logout")]
    LogoutPage {},

    #[nest("/admin")]
        #[route("/")]
        AdminDashboard {},
        #[route("/categories")]
        CategoryListPage {},
        #[route("/categories/new")]
        CategoryCreatePage {},
        #[route("/categories/:id")]
        CategoryDetailPage { id: u64 },
        #[route("/categories/:id/edit")]
        CategoryEditPage { id: u64 },
        #[route("/categories/:id/delete")]
        CategoryDeletePage { id: u64 },
        #[route("/products")]
        ProductListPage {},
        #[route("/products/new")]
        ProductCreatePage {},
        #[route("/products/:id")]
        ProductDetailPage { id: u64 },
        #[route("/products/:id/edit")]
        ProductEditPage { id: u64 },
        #[route("/products/:id/delete")]
        ProductDeletePage { id: u64 },
        #[route("/orders")]
        OrderListPage {},
        #[route("/orders/:id")]
        OrderDetailPage { id: u64 },
        #[route("/users")]
        UserListPage {},
        #[route("/finance")]
        FinancePage {},
        #[route("/analytics")]
        AnalyticsPage {},
    #[end_nest]

    #[nest("/customer")]
        #[route("/")]
        CustomerHome {},
        #[route("/products")]
        ShopPage {},
        #[route("/products/:id")]
        ShopProductPage { id: u64 },
        #[route("/cart")]
        CartPage {},
        #[route("/checkout")]
        CheckoutPage {},
        #[route("/orders")]
        MyOrdersPage {},
        #[route("/orders/:id")]
        MyOrderPage { id: u64 },
        #[route("/profile")]
        ProfilePage {},
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    fn view(&self) -> View {
        match self {
            Route::LoginPage {} => View::Login,
            Route::RegisterPage {} => View::Register,
            Route::LogoutPage {} => View::Logout,
            Route::AdminDashboard {} => View::AdminDashboard,
            Route::CategoryListPage {} => View::Categories,
            Route::CategoryCreatePage {} => View::CreateCategory,
            Route::CategoryDetailPage { .. } => View::DetailCategory,
            Route::CategoryEditPage { .. } => View::EditCategory,
            Route::CategoryDeletePage { .. } => View::DeleteCategory,
            Route::ProductListPage {} => View::Products,
            Route::ProductCreatePage {} => View::CreateProduct,
            Route::ProductDetailPage { .. } => View::DetailProduct,
            Route::ProductEditPage { .. } => View::EditProduct,
            Route::ProductDeletePage { .. } => View::DeleteProduct,
            Route::OrderListPage {} => View::Orders,
            Route::OrderDetailPage { .. } => View::DetailOrder,
            Route::UserListPage {} => View::Users,
            Route::FinancePage {} => View::Finance,
            Route::AnalyticsPage {} => View::Analytics,
            Route::CustomerHome {} => View::CustomerHome,
            Route::ShopPage {} => View::Shop,
            Route::ShopProductPage { .. } => View::ShopProduct,
            Route::CartPage {} => View::Cart,
            Route::CheckoutPage {} => View::Checkout,
            Route::MyOrdersPage {} => View::MyOrders,
            Route::MyOrderPage { .. } => View::MyOrder,
            Route::ProfilePage {} => View::Profile,
            Route::NotFound { .. } => View::NotFound,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("startup: logger init failed: {err}");
    }
    install_panic_hook();
    log_runtime_config(&AppConfig::from_build_env());
    log_catalog_issues();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

fn log_runtime_config(config: &AppConfig) {
    tracing::info!(
        "startup: mode={:?} default_locale={} seed_demo_data={} admin={:?}",
        config.mode,
        config.default_locale.code(),
        config.seed_demo_data,
        config.admin
    );
    if config.mode == shop::AppMode::Production && config.seed_demo_data {
        tracing::warn!("startup: demo accounts are enabled in production mode");
    }
}

fn log_catalog_issues() {
    for issue in shop::i18n::check_catalog() {
        tracing::warn!("startup: message table: {issue}");
    }
}

/// The route table is static data; a build error here is a programming
/// mistake, so it stops the app at startup.
fn route_table() -> RouteTable {
    match RouteTable::storefront() {
        Ok(table) => table,
        Err(err) => panic!("storefront route table is invalid: {err}"),
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(AppConfig::from_build_env);
    use_context_provider(|| Navigator::new(route_table()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ShopTheme {}
        ui::I18nProvider { default: config.default_locale,
            ui::AppStateProvider { config: config.clone(),
                ui::ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Nav bar plus the guarded outlet. Every route change runs through
/// `RouteGate` before the page renders.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    tracing::debug!("route: path={path} view={:?}", route.view());

    rsx! {
        ui::ShopNav {}
        div { class: "shop_container route_view",
            ui::RouteGate { path, Outlet::<Route> {} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop::{Outcome, Session};

    fn every_route() -> Vec<Route> {
        vec![
            Route::LoginPage {},
            Route::RegisterPage {},
            Route::LogoutPage {},
            Route::AdminDashboard {},
            Route::CategoryListPage {},
            Route::CategoryCreatePage {},
            Route::CategoryDetailPage { id: 3 },
            Route::CategoryEditPage { id: 3 },
            Route::CategoryDeletePage { id: 3 },
            Route::ProductListPage {},
            Route::ProductCreatePage {},
            Route::ProductDetailPage { id: 12 },
            Route::ProductEditPage { id: 12 },
            Route::ProductDeletePage { id: 12 },
            Route::OrderListPage {},
            Route::OrderDetailPage { id: 1 },
            Route::UserListPage {},
            Route::FinancePage {},
            Route::AnalyticsPage {},
            Route::CustomerHome {},
            Route::ShopPage {},
            Route::ShopProductPage { id: 5 },
            Route::CartPage {},
            Route::CheckoutPage {},
            Route::MyOrdersPage {},
            Route::MyOrderPage { id: 9 },
            Route::ProfilePage {},
            Route::NotFound {
                segments: vec!["no-such-page".to_string()],
            },
        ]
    }

    #[test]
    fn routable_paths_resolve_to_the_same_view() {
        let table = route_table();
        for route in every_route() {
            let path = route.to_string();
            let resolved = table
                .resolve(&path)
                .unwrap_or_else(|| panic!("{path} does not resolve"));
            assert_eq!(resolved.view(), Some(route.view()), "{path}");
        }
    }

    #[test]
    fn id_params_reach_the_table() {
        let table = route_table();
        let resolved = table
            .resolve(&Route::ProductEditPage { id: 12 }.to_string())
            .unwrap();
        assert_eq!(resolved.id(), Some(12));
    }

    #[test]
    fn root_redirect_agrees_with_the_table() {
        let navigator = Navigator::new(route_table());
        let outcome = navigator.navigate("/", &Session::anonymous());
        assert_eq!(
            outcome.redirect_target(),
            Some(Route::LoginPage {}.to_string().as_str())
        );
        assert!(matches!(outcome, Outcome::Redirect { reason: None, .. }));
    }
}
