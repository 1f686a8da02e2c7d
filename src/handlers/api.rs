//! JSON API under `/api`, behind the API key guard.

use axum::{
    extract::{Path, Query, State},
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    Json,
};
use faq_core::{Faq, FaqId, Locale};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/languages
pub async fn languages(State(state): State<AppState>) -> Json<Vec<Locale>> {
    Json(state.locales.locales().to_vec())
}

/// GET /api/faqs: every FAQ row, including ones without texts.
pub async fn list_faqs(State(state): State<AppState>) -> Result<Json<Vec<Faq>>, ApiError> {
    Ok(Json(state.repo.all_faqs().await?))
}

/// GET /api/faqs/:id
pub async fn get_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Faq>, ApiError> {
    let id: FaqId = id.parse().map_err(|_| ApiError::faq_not_found())?;
    let faq = state.repo.faq_by_id(id).await?;
    if !faq.is_visible() {
        return Err(ApiError::faq_not_found());
    }
    Ok(Json(faq))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub lang: String,
    pub query: String,
}

/// GET /api/search-faqs?lang=&query=
///
/// `lang` is negotiated against the supported locales together with
/// `Accept-Language` before searching.
pub async fn search_faqs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Faq>>, ApiError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("query param empty".into()));
    }
    let lang = params.lang.trim();
    if lang.is_empty() {
        return Err(ApiError::BadRequest("lang param empty".into()));
    }

    let accept = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = state.locales.match_locale(Some(lang), accept);
    tracing::debug!(requested = lang, matched = %locale.code, "search locale");

    Ok(Json(state.repo.search_faqs(&locale.code, query).await?))
}
