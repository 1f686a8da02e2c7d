//! Router construction: public pages, JSON API and admin console.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{admin, api, public};
use crate::middleware::{api_key::require_api_key, https::require_https, jwt::require_admin};
use crate::state::AppState;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // JSON API, API key required
    let api = Router::new()
        .route("/api/languages", get(api::languages))
        .route("/api/faqs", get(api::list_faqs))
        .route("/api/faqs/:id", get(api::get_faq))
        .route("/api/search-faqs", get(api::search_faqs))
        .route_layer(from_fn_with_state(state.clone(), require_api_key));

    // Admin console, session cookie required
    let admin = Router::new()
        .route("/admin", get(admin::index))
        .route("/admin/faqs", get(admin::faqs))
        .route("/admin/faqs/new", get(admin::new_faq))
        .route("/admin/faqs/edit/:id", get(admin::edit_faq))
        .route("/admin/faqs/create", post(admin::create_faq))
        .route("/admin/faqs/update", post(admin::update_faq))
        .route("/admin/faqs/delete", post(admin::delete_faq))
        .route("/admin/locales", get(admin::locales))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    let session = Router::new()
        .route("/admin/login", get(admin::login_page).post(admin::login))
        .route("/admin/logout", post(admin::logout));

    let secured = api
        .merge(admin)
        .merge(session)
        .route_layer(from_fn_with_state(state.clone(), require_https));

    let pages = Router::new()
        .route("/", get(public::redirect_to_faqs))
        .route("/faqs/", get(public::redirect_to_faqs))
        .route("/faqs/:locale", get(public::faqs_page))
        .route("/faq/:locale/:slug", get(public::faq_page));

    pages
        .merge(secured)
        .nest_service("/static", ServeDir::new(&state.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
