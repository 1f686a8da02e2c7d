//! Admin session tokens: HS256 JWTs with subject `admin` and a 24h expiry,
//! carried in the `Authorization` cookie scoped to `/admin`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::{cookie_value, AUTH_COOKIE};
use crate::handlers::found;
use crate::state::AppState;

pub const ADMIN_SUBJECT: &str = "admin";
/// Clock-skew allowance when checking `exp`.
pub const LEEWAY_SECS: u64 = 60;
pub const ADMIN_SESSION_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub exp: i64,
}

/// Signing and validation keys for admin session tokens.
#[derive(Clone)]
pub struct JwtConfig {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtConfig {
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = LEEWAY_SECS;
        validation.sub = Some(ADMIN_SUBJECT.to_string());
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Expiry for a session starting now.
    pub fn session_expiry() -> DateTime<Utc> {
        Utc::now() + Duration::hours(ADMIN_SESSION_HOURS)
    }

    pub fn mint(&self, expires_at: DateTime<Utc>) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            exp: expires_at.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Signature, subject and expiry (with leeway) all check out.
    pub fn is_valid_admin_token(&self, token: &str) -> bool {
        match decode::<AdminClaims>(token, &self.decoding, &self.validation) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("rejected admin token: {e}");
                false
            }
        }
    }
}

/// Admin session guard: lets the request through only with a valid session
/// cookie, otherwise redirects to the login form. A no-op when the admin
/// password override is configured.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if state.auth.admin_password_hash.is_none() {
        return next.run(req).await;
    }

    let logged_in = cookie_value(req.headers(), AUTH_COOKIE)
        .map(|token| state.auth.jwt.is_valid_admin_token(token))
        .unwrap_or(false);
    if logged_in {
        next.run(req).await
    } else {
        found("/admin/login")
    }
}
