//! Start-up configuration from the process environment.
//!
//! Everything is read exactly once; a missing or invalid required value
//! stops the process before it binds a port.

use std::path::PathBuf;

use faq_core::{CatalogError, LocaleCatalog};
use thiserror::Error;

/// `ADMIN_PASSWORD` value that turns the admin session guard off (local development).
pub const NO_ADMIN_PASSWORD_REQUIRED: &str = "no-admin-password-required";
/// `API_KEY` value that turns the API key check off (local development).
pub const NO_API_KEY_REQUIRED: &str = "no-api-key-required";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_STATIC_DIR: &str = "public/static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("SUPPORTED_LOCALES missing or wrong: {0}")]
    Locales(#[from] CatalogError),
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub jwt_key: String,
    /// bcrypt hash of the admin password; `None` disables the admin guard.
    pub admin_password_hash: Option<String>,
    /// Expected `Authorization` header on `/api/*`; `None` disables the check.
    pub api_key: Option<String>,
    pub locales: LocaleCatalog,
    /// Skip the HTTPS redirect and the cookie `Secure` flag.
    pub http_allowed: bool,
    pub static_dir: PathBuf,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("admin_guard", &self.admin_password_hash.is_some())
            .field("api_key_guard", &self.api_key.is_some())
            .field("locales", &self.locales.locales())
            .field("http_allowed", &self.http_allowed)
            .field("static_dir", &self.static_dir)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            get(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_key = required("JWT_KEY")?;
        let admin_password = required("ADMIN_PASSWORD")?;
        let api_key = required("API_KEY")?;
        let locales = LocaleCatalog::from_list(&get("SUPPORTED_LOCALES").unwrap_or_default())?;

        let port = match get("PORT").filter(|v| !v.is_empty()) {
            Some(v) => v.parse().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: format!("{e}"),
            })?,
            None => DEFAULT_PORT,
        };
        let max_connections = match get("DATABASE_MAX_CONNECTIONS").filter(|v| !v.is_empty()) {
            Some(v) => v.parse().map_err(|e| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                reason: format!("{e}"),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            port,
            max_connections,
            jwt_key,
            admin_password_hash: (admin_password != NO_ADMIN_PASSWORD_REQUIRED)
                .then_some(admin_password),
            api_key: (api_key != NO_API_KEY_REQUIRED).then_some(api_key),
            locales,
            http_allowed: get("HTTP_ALLOWED").as_deref() == Some("true"),
            static_dir: get("FAQAAS_STATIC_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base() -> HashMap<String, String> {
        env(&[
            ("DATABASE_URL", "postgresql:///faqaas"),
            ("JWT_KEY", "secret"),
            ("ADMIN_PASSWORD", "$2b$12$hash"),
            ("API_KEY", "key"),
            ("SUPPORTED_LOCALES", "en,de"),
        ])
    }

    fn load(vars: &HashMap<String, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = load(&base()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 10);
        assert!(!config.http_allowed);
        assert_eq!(config.admin_password_hash.as_deref(), Some("$2b$12$hash"));
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.locales.default_locale().code, "en");
        assert_eq!(config.static_dir, PathBuf::from("public/static"));
    }

    #[test]
    fn missing_required_value_fails() {
        for key in ["DATABASE_URL", "JWT_KEY", "ADMIN_PASSWORD", "API_KEY"] {
            let mut vars = base();
            vars.remove(key);
            let err = load(&vars).unwrap_err();
            assert!(matches!(err, ConfigError::Missing(k) if k == key));
        }
    }

    #[test]
    fn bad_locales_fail() {
        let mut vars = base();
        vars.remove("SUPPORTED_LOCALES");
        assert!(matches!(load(&vars), Err(ConfigError::Locales(_))));

        vars.insert("SUPPORTED_LOCALES".into(), "en,--".into());
        assert!(matches!(load(&vars), Err(ConfigError::Locales(_))));
    }

    #[test]
    fn bad_port_fails() {
        let mut vars = base();
        vars.insert("PORT".into(), "eighty".into());
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));
    }

    #[test]
    fn overrides_disable_guards() {
        let mut vars = base();
        vars.insert("ADMIN_PASSWORD".into(), NO_ADMIN_PASSWORD_REQUIRED.into());
        vars.insert("API_KEY".into(), NO_API_KEY_REQUIRED.into());
        vars.insert("HTTP_ALLOWED".into(), "true".into());
        vars.insert("PORT".into(), "3000".into());
        let config = load(&vars).unwrap();
        assert!(config.admin_password_hash.is_none());
        assert!(config.api_key.is_none());
        assert!(config.http_allowed);
        assert_eq!(config.port, 3000);
    }
}
