//! Admin credentials and cookies.

use axum::http::{header::COOKIE, HeaderMap};
use chrono::{DateTime, Utc};

use crate::middleware::jwt::JwtConfig;

/// Name of the admin session cookie.
pub const AUTH_COOKIE: &str = "Authorization";
/// Name of the cookie holding the visitor's preferred locale.
pub const LANG_COOKIE: &str = "lang";
/// The only accepted login name.
pub const ADMIN_EMAIL: &str = "admin";
pub const BCRYPT_COST: u32 = 12;

/// Secrets and switches for the auth gate, loaded once at start-up.
pub struct AuthSettings {
    pub jwt: JwtConfig,
    /// `None` disables the admin session guard.
    pub admin_password_hash: Option<String>,
    /// `None` disables the API key guard.
    pub api_key: Option<String>,
    pub http_allowed: bool,
}

impl AuthSettings {
    /// Both the login name and the password must match. Runs bcrypt on the
    /// blocking pool.
    pub async fn verify_admin_login(&self, email: &str, password: &str) -> bool {
        if email != ADMIN_EMAIL {
            return false;
        }
        let Some(hash) = self.admin_password_hash.clone() else {
            return false;
        };
        let password = password.to_string();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
            .await
            .unwrap_or(false)
    }

    /// `Set-Cookie` value for a new admin session ending at `expires_at`.
    pub fn session_cookie(&self, token: &str, expires_at: DateTime<Utc>) -> String {
        let secure = if self.http_allowed { "" } else { "Secure; " };
        format!(
            "{AUTH_COOKIE}={token}; Path=/admin; Expires={}; {secure}HttpOnly",
            expires_at.format("%a, %d %b %Y %H:%M:%S GMT")
        )
    }

    /// `Set-Cookie` value that removes the admin session.
    pub fn cleared_session_cookie(&self) -> String {
        let secure = if self.http_allowed { "" } else { "Secure; " };
        format!(
            "{AUTH_COOKIE}=; Path=/admin; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; {secure}HttpOnly"
        )
    }
}

/// bcrypt hash of `password` at the production cost factor.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, BCRYPT_COST)
}

/// Value of the first cookie called `name` in the request headers, without
/// surrounding double quotes.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| {
            v.strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(v)
        })
}
