//! Route handlers: JSON API, public pages, admin console.

pub mod admin;
pub mod api;
pub mod public;

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
};

/// 302 to `location`. axum's `Redirect::to` answers 303.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// 301 to `location`.
pub fn moved_permanently(location: &str) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(LOCATION, location.to_string())]).into_response()
}
