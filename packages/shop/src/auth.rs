//! Credential checks for the client-side account directory.

use sha2::{Digest, Sha256};

use crate::error::StoreError;

pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), StoreError> {
    let normalized = normalize_email(email);
    let valid = match normalized.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(StoreError::BadEmail(email.to_string()))
    }
}

pub fn validate_password(password: &str) -> Result<(), StoreError> {
    if password.chars().count() < 8 {
        return Err(StoreError::WeakPassword(
            "Password must be at least 8 characters",
        ));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(StoreError::WeakPassword(
            "Password must contain at least one uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(StoreError::WeakPassword(
            "Password must contain at least one lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err(StoreError::WeakPassword(
            "Password must contain at least one number",
        ));
    }
    Ok(())
}

/// Salted SHA-256, salted with the normalized email.
pub fn hash_password(email: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_email(email).as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn verify_password(email: &str, password: &str, stored_hash: &str) -> bool {
    hash_password(email, password) == stored_hash
}

pub fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}

/// Log-safe form of an email address.
pub fn email_label(email: &str) -> String {
    format!("{} (len={})", email_domain(email), email.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strong_password() {
        assert!(validate_password("Passw0rd").is_ok());
        assert!(validate_password("MatKhau2024").is_ok());
    }

    #[test]
    fn rejects_weak_passwords() {
        for weak in ["Pa1", "password1", "PASSWORD1", "Password"] {
            assert!(
                matches!(validate_password(weak), Err(StoreError::WeakPassword(_))),
                "{weak}"
            );
        }
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("Lan@Shop.vn").is_ok());
        assert!(validate_email("lan@shop").is_err());
        assert!(validate_email("@shop.vn").is_err());
        assert!(validate_email("lan.shop.vn").is_err());
    }

    #[test]
    fn hash_is_salted_by_email_and_case_insensitive_on_email() {
        let h = hash_password("Lan@Shop.vn", "Passw0rd");
        assert!(verify_password("lan@shop.vn", "Passw0rd", &h));
        assert!(!verify_password("lan@shop.vn", "passw0rd", &h));
        assert_ne!(h, hash_password("minh@shop.vn", "Passw0rd"));
    }

    #[test]
    fn email_label_hides_local_part() {
        assert_eq!(email_label("lan@shop.vn"), "shop.vn (len=11)");
    }
}
