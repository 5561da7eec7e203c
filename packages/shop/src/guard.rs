//! Navigation guard: the allow/redirect decision made before every route
//! change, plus [`Navigator`], which pairs it with route resolution.

use crate::role::Role;
use crate::routes::{ResolvedRoute, RouteTable, Target, LOGIN_PATH, MAX_REDIRECTS};
use crate::session::Session;

/// Why a navigation was turned away. Both reasons currently send the user to
/// the login page; the distinction is kept for logs and callers that want to
/// tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    WrongRole { required: Role, actual: Role },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect { to: String, reason: DenyReason },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether `target` may be entered by `session`.
///
/// Routes without an authenticated ancestor are always open. Otherwise a
/// missing role, or a role other than the one the route names, redirects to
/// the login page.
pub fn check(target: &ResolvedRoute, session: &Session) -> Decision {
    if !target.requires_auth() {
        return Decision::Allow;
    }

    let Some(actual) = session.role else {
        tracing::debug!("guard.check: path={} denied=unauthenticated", target.path);
        return Decision::Redirect {
            to: LOGIN_PATH.to_string(),
            reason: DenyReason::Unauthenticated,
        };
    };

    match target.required_role() {
        Some(required) if required != actual => {
            tracing::debug!(
                "guard.check: path={} denied=wrong_role required={required} actual={actual}",
                target.path
            );
            Decision::Redirect {
                to: LOGIN_PATH.to_string(),
                reason: DenyReason::WrongRole { required, actual },
            }
        }
        _ => Decision::Allow,
    }
}

/// Result of a full navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(ResolvedRoute),
    Redirect { to: String, reason: Option<DenyReason> },
}

impl Outcome {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Outcome::Render(_) => None,
            Outcome::Redirect { to, .. } => Some(to),
        }
    }
}

/// Route table plus guard: what the router consults on every path change.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve `path`, follow declared redirects, then apply the guard.
    ///
    /// Declared redirects are followed here; a guard redirect is reported to
    /// the caller, which performs the replace navigation itself.
    pub fn navigate(&self, path: &str, session: &Session) -> Outcome {
        let mut current = path.to_string();
        let mut redirected = false;

        for _ in 0..=MAX_REDIRECTS {
            let Some(route) = self.table.resolve(&current) else {
                tracing::warn!("navigator.navigate: no route for {current}");
                return Outcome::Redirect {
                    to: LOGIN_PATH.to_string(),
                    reason: None,
                };
            };

            if let Target::Redirect(to) = &route.target {
                current = to.clone();
                redirected = true;
                continue;
            }

            return match check(&route, session) {
                Decision::Allow if redirected => Outcome::Redirect {
                    to: current,
                    reason: None,
                },
                Decision::Allow => Outcome::Render(route),
                Decision::Redirect { to, reason } => Outcome::Redirect {
                    to,
                    reason: Some(reason),
                },
            };
        }

        tracing::error!("navigator.navigate: too many redirects from {path}");
        Outcome::Redirect {
            to: LOGIN_PATH.to_string(),
            reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{MetaSpec, RouteSpec, View};

    fn navigator() -> Navigator {
        Navigator::new(RouteTable::storefront().unwrap())
    }

    fn customer() -> Session {
        Session::signed_in(Role::Customer, "c@shop.test")
    }

    fn admin() -> Session {
        Session::signed_in(Role::Admin, "a@shop.test")
    }

    #[test]
    fn public_route_allows_everyone() {
        let route = RouteTable::storefront().unwrap().resolve("/login").unwrap();
        for session in [Session::anonymous(), customer(), admin()] {
            assert_eq!(check(&route, &session), Decision::Allow);
        }
    }

    #[test]
    fn wrong_role_is_tagged_but_still_goes_to_login() {
        let route = RouteTable::storefront()
            .unwrap()
            .resolve("/customer/cart")
            .unwrap();
        assert_eq!(
            check(&route, &admin()),
            Decision::Redirect {
                to: LOGIN_PATH.to_string(),
                reason: DenyReason::WrongRole {
                    required: Role::Customer,
                    actual: Role::Admin
                },
            }
        );
    }

    #[test]
    fn auth_without_role_accepts_any_signed_in_user() {
        let table = RouteTable::build(&[RouteSpec::view("/account", View::Profile).with_meta(
            MetaSpec {
                requires_auth: true,
                role: None,
            },
        )])
        .unwrap();
        let route = table.resolve("/account").unwrap();
        assert!(check(&route, &customer()).is_allowed());
        assert!(check(&route, &admin()).is_allowed());
        assert!(!check(&route, &Session::anonymous()).is_allowed());
    }

    #[test]
    fn root_redirect_is_followed() {
        let outcome = navigator().navigate("/", &Session::anonymous());
        assert_eq!(outcome.redirect_target(), Some(LOGIN_PATH));
    }

    #[test]
    fn render_carries_params() {
        match navigator().navigate("/admin/orders/12", &admin()) {
            Outcome::Render(route) => {
                assert_eq!(route.view(), Some(View::DetailOrder));
                assert_eq!(route.id(), Some(12));
            }
            other => panic!("expected render, got {other:?}"),
        }
    }
}
