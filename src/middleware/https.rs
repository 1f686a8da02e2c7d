//! HTTPS enforcement behind a TLS-terminating proxy.

use axum::{
    extract::{Request, State},
    http::header::HOST,
    middleware::Next,
    response::Response,
};

use crate::handlers::moved_permanently;
use crate::state::AppState;

pub const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Redirects (301) to the same path and query under `https://` unless the
/// proxy reports the request arrived over HTTPS. Off with `HTTP_ALLOWED=true`.
pub async fn require_https(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if state.auth.http_allowed {
        return next.run(req).await;
    }

    let proto = req
        .headers()
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok());
    if proto == Some("https") {
        return next.run(req).await;
    }

    let host = req
        .headers()
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| req.uri().authority().map(|a| a.as_str()))
        .unwrap_or_default();
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    moved_permanently(&format!("https://{host}{path_and_query}"))
}
