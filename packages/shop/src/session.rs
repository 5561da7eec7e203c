use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::storage::{Storage, ROLE_KEY, USER_KEY};
use crate::types::UserAccount;

/// Who is navigating. Built from storage once and handed to the guard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Option<Role>,
    pub email: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(role: Role, email: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            email: Some(email.into()),
        }
    }

    /// Read the persisted role. A role string we do not recognise counts as
    /// signed out.
    pub fn load(storage: &dyn Storage) -> Self {
        let role = storage
            .get(ROLE_KEY)
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    tracing::warn!("session.load: ignoring stored role: {e}");
                    None
                }
            });
        let email = role.and(storage.get(USER_KEY));
        Self { role, email }
    }

    pub fn login(storage: &mut dyn Storage, account: &UserAccount) -> Self {
        storage.set(ROLE_KEY, account.role.as_str());
        storage.set(USER_KEY, &account.email);
        tracing::info!(
            "session.login: email={} role={}",
            account.email,
            account.role
        );
        Self::signed_in(account.role, account.email.clone())
    }

    pub fn logout(storage: &mut dyn Storage) -> Self {
        storage.remove(ROLE_KEY);
        storage.remove(USER_KEY);
        tracing::info!("session.logout");
        Self::anonymous()
    }

    pub fn is_signed_in(&self) -> bool {
        self.role.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::Utc;

    fn account(role: Role) -> UserAccount {
        UserAccount {
            id: 1,
            email: "a@shop.test".to_string(),
            name: "A".to_string(),
            role,
            password_hash: String::new(),
            phone: None,
            address: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_storage_is_anonymous() {
        let s = MemoryStorage::new();
        assert_eq!(Session::load(&s), Session::anonymous());
    }

    #[test]
    fn login_then_load_then_logout() {
        let mut s = MemoryStorage::new();
        let session = Session::login(&mut s, &account(Role::Admin));
        assert_eq!(Session::load(&s), session);
        assert_eq!(session.role, Some(Role::Admin));

        Session::logout(&mut s);
        assert_eq!(Session::load(&s), Session::anonymous());
    }

    #[test]
    fn unknown_or_blank_role_counts_as_absent() {
        let mut s = MemoryStorage::new();
        s.set(ROLE_KEY, "root");
        s.set(USER_KEY, "x@shop.test");
        assert_eq!(Session::load(&s), Session::anonymous());

        s.set(ROLE_KEY, "  ");
        assert!(!Session::load(&s).is_signed_in());
    }
}
