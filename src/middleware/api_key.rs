//! API key guard for `/api/*`.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

/// The `Authorization` header must equal the configured key exactly.
/// A no-op when the API key override is configured.
pub async fn require_api_key(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(expected) = state.auth.api_key.as_deref() else {
        return next.run(req).await;
    };

    let provided = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if provided == Some(expected) {
        next.run(req).await
    } else {
        ApiError::Unauthorized.into_response()
    }
}
