use std::fmt;

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or_default().trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    /// Locale used until the visitor picks one.
    pub default_locale: Locale,
    /// Fill an empty store with demo accounts and catalog.
    pub seed_demo_data: bool,
    /// Administrator created when the store has none.
    pub admin: Option<AdminBootstrap>,
}

/// Credentials for the first administrator account.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("email", &crate::auth::email_label(&self.email))
            .field("password", &"***")
            .finish()
    }
}

impl AppConfig {
    /// Build from any key lookup. Recognised keys: `APP_MODE`,
    /// `SHOP_DEFAULT_LOCALE`, `SHOP_SEED_DEMO`, `SHOP_ADMIN_EMAIL`,
    /// `SHOP_ADMIN_PASSWORD`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mode = AppMode::parse(get("APP_MODE").as_deref());

        let default_locale = match get("SHOP_DEFAULT_LOCALE") {
            Some(code) => Locale::from_code(&code).unwrap_or_else(|| {
                tracing::warn!("config: unsupported SHOP_DEFAULT_LOCALE={code}, using en");
                Locale::FALLBACK
            }),
            None => Locale::FALLBACK,
        };

        let seed_demo_data = match get("SHOP_SEED_DEMO").as_deref().map(str::trim) {
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            _ => mode == AppMode::Local,
        };

        let admin = match (get("SHOP_ADMIN_EMAIL"), get("SHOP_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) if !email.trim().is_empty() => {
                Some(AdminBootstrap { email, password })
            }
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!(
                    "config: SHOP_ADMIN_EMAIL and SHOP_ADMIN_PASSWORD must be set together"
                );
                None
            }
            _ => None,
        };

        Self {
            mode,
            default_locale,
            seed_demo_data,
            admin,
        }
    }

    /// Values baked in at compile time, for the browser build where no
    /// process environment exists.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "APP_MODE" => option_env!("APP_MODE"),
                "SHOP_DEFAULT_LOCALE" => option_env!("SHOP_DEFAULT_LOCALE"),
                "SHOP_SEED_DEMO" => option_env!("SHOP_SEED_DEMO"),
                "SHOP_ADMIN_EMAIL" => option_env!("SHOP_ADMIN_EMAIL"),
                "SHOP_ADMIN_PASSWORD" => option_env!("SHOP_ADMIN_PASSWORD"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_app_mode_defaults_to_production() {
        assert_eq!(AppMode::parse(None), AppMode::Production);
    }

    #[test]
    fn test_app_mode_case_insensitive() {
        assert_eq!(AppMode::parse(Some("LOCAL")), AppMode::Local);
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        assert_eq!(AppMode::parse(Some("invalid")), AppMode::Production);
    }

    #[test]
    fn empty_config_is_production_english_unseeded() {
        let c = config(&[]);
        assert_eq!(c.mode, AppMode::Production);
        assert_eq!(c.default_locale, Locale::En);
        assert!(!c.seed_demo_data);
        assert_eq!(c.admin, None);
    }

    #[test]
    fn admin_needs_both_email_and_password() {
        let c = config(&[
            ("SHOP_ADMIN_EMAIL", "owner@shop.vn"),
            ("SHOP_ADMIN_PASSWORD", "Str0ngPass"),
        ]);
        let admin = c.admin.unwrap();
        assert_eq!(admin.email, "owner@shop.vn");
        assert!(!format!("{admin:?}").contains("Str0ngPass"));

        assert_eq!(config(&[("SHOP_ADMIN_EMAIL", "owner@shop.vn")]).admin, None);
    }

    #[test]
    fn local_mode_seeds_unless_told_not_to() {
        assert!(config(&[("APP_MODE", "local")]).seed_demo_data);
        assert!(!config(&[("APP_MODE", "local"), ("SHOP_SEED_DEMO", "0")]).seed_demo_data);
        assert!(config(&[("SHOP_SEED_DEMO", "true")]).seed_demo_data);
    }

    #[test]
    fn default_locale_parses_and_falls_back() {
        assert_eq!(
            config(&[("SHOP_DEFAULT_LOCALE", "vi-VN")]).default_locale,
            Locale::Vi
        );
        assert_eq!(
            config(&[("SHOP_DEFAULT_LOCALE", "de")]).default_locale,
            Locale::En
        );
    }
}
