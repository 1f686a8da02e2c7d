//! Public, localized HTML pages. No auth.

use axum::{
    extract::{Path, Query, State},
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    response::{Html, Response},
};
use faq_core::locale::locale_from_code;
use faq_core::{Faq, Locale};
use serde::{Deserialize, Serialize};

use crate::auth::{cookie_value, LANG_COOKIE};
use crate::error::PageError;
use crate::handlers::found;
use crate::slug::{faq_slug, id_from_slug};
use crate::state::AppState;
use crate::templates::{PUBLIC_FAQ, PUBLIC_FAQS};

/// GET / and GET /faqs/: 302 to the best-matching locale's listing.
pub async fn redirect_to_faqs(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie = cookie_value(&headers, LANG_COOKIE);
    let accept = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = state.locales.match_locale(cookie, accept);
    found(&format!("/faqs/{}", locale.code))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub query: Option<String>,
}

#[derive(Serialize)]
struct ListingEntry<'a> {
    url: String,
    question: &'a str,
}

#[derive(Serialize)]
struct ListingPage<'a> {
    title: String,
    locale: &'a Locale,
    locales: &'a [Locale],
    query: &'a str,
    faqs: Vec<ListingEntry<'a>>,
}

fn supported_locale<'a>(state: &'a AppState, code: &str) -> Result<&'a Locale, PageError> {
    state
        .locales
        .get(code)
        .ok_or_else(|| PageError::NotFound("locale not found".into()))
}

/// GET /faqs/:locale: FAQs with a text in `locale`, optionally filtered by
/// a full-text `?query=`.
pub async fn faqs_page(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<ListingParams>,
) -> Result<Html<String>, PageError> {
    let locale = supported_locale(&state, &code)?;
    let query = params.query.as_deref().unwrap_or_default().trim();

    let faqs: Vec<Faq> = if query.is_empty() {
        state.repo.all_faqs().await?
    } else {
        state.repo.search_faqs(&locale.code, query).await?
    };

    let entries = faqs
        .iter()
        .filter_map(|faq| {
            faq.text_for(&locale.code).map(|text| ListingEntry {
                url: format!("/faq/{}/{}", locale.code, faq_slug(&text.question, faq.id)),
                question: &text.question,
            })
        })
        .collect();

    let page = ListingPage {
        title: format!("FAQs ({}, {})", locale.name_english, locale.code),
        locale,
        locales: state.locales.locales(),
        query,
        faqs: entries,
    };
    Ok(state.templates.render(PUBLIC_FAQS, &page)?)
}

#[derive(Serialize)]
struct Translation<'a> {
    code: &'a str,
    name: String,
    url: String,
}

#[derive(Serialize)]
struct FaqPage<'a> {
    title: &'a str,
    locale: &'a Locale,
    locales: &'a [Locale],
    question: &'a str,
    answer: &'a str,
    translations: Vec<Translation<'a>>,
}

/// GET /faq/:locale/:slug: one FAQ; the id is the slug's last `-` token.
///
/// Shows the text in `locale`, else the default locale's, else the first
/// stored one.
pub async fn faq_page(
    State(state): State<AppState>,
    Path((code, slug)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let locale = supported_locale(&state, &code)?;
    let id = id_from_slug(&slug).ok_or_else(PageError::faq_not_found)?;

    let faq = state.repo.faq_by_id(id).await?;
    let text = faq
        .best_text(&locale.code, &state.locales.default_locale().code)
        .ok_or_else(PageError::faq_not_found)?;

    let translations = faq
        .texts
        .iter()
        .map(|t| {
            let code = t.locale.code.as_str();
            // texts may exist for locales no longer configured
            let name = match state.locales.get(code) {
                Some(l) => l.name_local.clone(),
                None => locale_from_code(code).name_local,
            };
            Translation {
                code,
                name: if name.is_empty() { code.to_string() } else { name },
                url: format!("/faq/{code}/{}", faq.id),
            }
        })
        .collect();

    let page = FaqPage {
        title: &text.question,
        locale,
        locales: state.locales.locales(),
        question: &text.question,
        answer: &text.answer,
        translations,
    };
    Ok(state.templates.render(PUBLIC_FAQ, &page)?)
}
