//! Request guards, applied as `axum::middleware::from_fn_with_state` layers.

pub mod api_key;
pub mod https;
pub mod jwt;
