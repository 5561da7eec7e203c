use shop::routes::Target;
use shop::{
    check, Decision, DenyReason, Navigator, Outcome, Role, RouteTable, Session, View, LOGIN_PATH,
};

fn navigator() -> Navigator {
    Navigator::new(RouteTable::storefront().expect("storefront routes"))
}

fn sessions() -> [Session; 3] {
    [
        Session::anonymous(),
        Session::signed_in(Role::Customer, "customer@local.dev"),
        Session::signed_in(Role::Admin, "admin@local.dev"),
    ]
}

#[test]
fn open_routes_allow_every_session() {
    let table = RouteTable::storefront().unwrap();
    for (pattern, target) in table.patterns() {
        let Target::View(_) = target else { continue };
        let path = pattern.replace(":id", "1").replace(":..segments", "x/y");
        let route = table.resolve(&path).unwrap();
        if route.requires_auth() {
            continue;
        }
        for session in sessions() {
            assert_eq!(check(&route, &session), Decision::Allow, "{path}");
        }
    }
}

#[test]
fn protected_routes_send_anonymous_visitors_to_login() {
    let table = RouteTable::storefront().unwrap();
    let mut protected = 0;
    for (pattern, _) in table.patterns() {
        let route = table.resolve(&pattern.replace(":id", "3")).unwrap();
        if !route.requires_auth() {
            continue;
        }
        protected += 1;
        assert_eq!(
            check(&route, &Session::anonymous()),
            Decision::Redirect {
                to: LOGIN_PATH.to_string(),
                reason: DenyReason::Unauthenticated
            },
            "{pattern}"
        );
    }
    assert!(protected > 20);
}

#[test]
fn customer_is_sent_to_login_from_every_admin_route() {
    let table = RouteTable::storefront().unwrap();
    let customer = Session::signed_in(Role::Customer, "customer@local.dev");
    for (pattern, _) in table.patterns() {
        if !pattern.starts_with("/admin") {
            continue;
        }
        let route = table.resolve(&pattern.replace(":id", "3")).unwrap();
        assert_eq!(route.required_role(), Some(Role::Admin));
        match check(&route, &customer) {
            Decision::Redirect { to, reason } => {
                assert_eq!(to, LOGIN_PATH);
                assert!(matches!(reason, DenyReason::WrongRole { .. }));
            }
            Decision::Allow => panic!("{pattern} let a customer in"),
        }
    }
}

#[test]
fn matching_role_is_allowed() {
    let nav = navigator();
    let admin = Session::signed_in(Role::Admin, "admin@local.dev");
    let customer = Session::signed_in(Role::Customer, "customer@local.dev");
    assert!(matches!(nav.navigate("/admin/finance", &admin), Outcome::Render(_)));
    assert!(matches!(
        nav.navigate("/customer/checkout", &customer),
        Outcome::Render(_)
    ));
}

#[test]
fn anonymous_to_admin_redirects_to_login() {
    let outcome = navigator().navigate("/admin", &Session::anonymous());
    assert_eq!(
        outcome,
        Outcome::Redirect {
            to: LOGIN_PATH.to_string(),
            reason: Some(DenyReason::Unauthenticated)
        }
    );
}

#[test]
fn customer_to_admin_products_redirects_to_login() {
    let outcome = navigator().navigate(
        "/admin/products",
        &Session::signed_in(Role::Customer, "customer@local.dev"),
    );
    assert_eq!(
        outcome,
        Outcome::Redirect {
            to: LOGIN_PATH.to_string(),
            reason: Some(DenyReason::WrongRole {
                required: Role::Admin,
                actual: Role::Customer
            })
        }
    );
}

#[test]
fn admin_reaches_categories() {
    let outcome = navigator().navigate(
        "/admin/categories",
        &Session::signed_in(Role::Admin, "admin@local.dev"),
    );
    match outcome {
        Outcome::Render(route) => assert_eq!(route.view(), Some(View::Categories)),
        other => panic!("expected categories, got {other:?}"),
    }
}

#[test]
fn session_from_storage_drives_the_guard() {
    use shop::storage::{MemoryStorage, Storage, ROLE_KEY};

    let mut storage = MemoryStorage::new();
    let nav = navigator();
    assert!(nav
        .navigate("/customer/cart", &Session::load(&storage))
        .redirect_target()
        .is_some());

    storage.set(ROLE_KEY, "customer");
    assert!(matches!(
        nav.navigate("/customer/cart", &Session::load(&storage)),
        Outcome::Render(_)
    ));
}
