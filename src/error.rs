//! Request-level errors and their HTTP rendering.
//!
//! `ApiError` is the JSON API boundary (`{"error": "..."}`), `PageError`
//! the HTML side. Both hide store details from the client and log them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use faq_core::FaqError;
use serde::Serialize;
use thiserror::Error;

pub const INTERNAL_ERROR: &str = "internal error";
pub const FAQ_NOT_FOUND: &str = "faq not found";

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("internal error")]
    Internal(#[from] FaqError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn faq_not_found() -> Self {
        Self::NotFound(FAQ_NOT_FOUND.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(source) = &self {
            tracing::error!("api request failed: {source}");
        }
        let message = self.to_string();
        (self.status(), Json(ErrorBody { error: &message })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("internal error")]
    Storage(#[from] FaqError),

    #[error("internal error")]
    Render(#[from] handlebars::RenderError),

    #[error("internal error")]
    Session(#[from] jsonwebtoken::errors::Error),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Render(_) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn faq_not_found() -> Self {
        Self::NotFound(FAQ_NOT_FOUND.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(source) => tracing::error!("page request failed: {source}"),
            Self::Render(source) => tracing::error!("template render failed: {source}"),
            Self::Session(source) => tracing::error!("session token failed: {source}"),
            _ => {}
        }
        (self.status(), self.to_string()).into_response()
    }
}
