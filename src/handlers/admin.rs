//! Admin console: server-rendered pages and form posts under `/admin`.

use axum::{
    extract::{Path, State},
    http::header::SET_COOKIE,
    response::{Html, IntoResponse, Response},
    Form,
};
use faq_core::{FaqId, FaqText, Locale};
use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::handlers::found;
use crate::middleware::jwt::JwtConfig;
use crate::state::AppState;
use crate::templates::{
    admin_menu, MenuEntry, ADMIN_FAQS, ADMIN_FAQ_EDIT, ADMIN_FAQ_NEW, ADMIN_LOCALES, ADMIN_LOGIN,
};

const FAQS_URL: &str = "/admin/faqs";
const LOCALES_URL: &str = "/admin/locales";
const LOGIN_URL: &str = "/admin/login";

fn edit_url(id: FaqId) -> String {
    format!("/admin/faqs/edit/{id}")
}

/// Rebuild the search index after a committed write. A failure is logged by
/// the refresher and otherwise ignored: the next write refreshes again.
async fn refresh_index(state: &AppState) {
    let _ = state.indexer.refresh().await;
}

/// GET /admin
pub async fn index() -> Response {
    found(FAQS_URL)
}

#[derive(Serialize)]
struct FaqRow {
    id: FaqId,
    question: String,
}

#[derive(Serialize)]
struct FaqsPage<'a> {
    title: &'static str,
    menu: Vec<MenuEntry>,
    default_locale: &'a Locale,
    faqs: Vec<FaqRow>,
}

/// GET /admin/faqs: every FAQ, with its question in the default locale.
pub async fn faqs(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let default_locale = state.locales.default_locale();
    let rows = state
        .repo
        .all_faqs()
        .await?
        .into_iter()
        .map(|faq| FaqRow {
            id: faq.id,
            question: faq.text_in_default_locale(default_locale).question,
        })
        .collect();

    let page = FaqsPage {
        title: "FAQs",
        menu: admin_menu(FAQS_URL),
        default_locale,
        faqs: rows,
    };
    Ok(state.templates.render(ADMIN_FAQS, &page)?)
}

#[derive(Serialize)]
struct LocaleOption<'a> {
    code: &'a str,
    label: String,
    selected: bool,
}

#[derive(Serialize)]
struct NewFaqPage<'a> {
    title: &'static str,
    menu: Vec<MenuEntry>,
    locales: Vec<LocaleOption<'a>>,
}

/// GET /admin/faqs/new
pub async fn new_faq(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let locales = state
        .locales
        .locales()
        .iter()
        .map(|l| LocaleOption {
            code: &l.code,
            label: l.label(),
            selected: state.locales.is_default(&l.code),
        })
        .collect();

    let page = NewFaqPage {
        title: "New FAQ",
        menu: admin_menu(FAQS_URL),
        locales,
    };
    Ok(state.templates.render(ADMIN_FAQ_NEW, &page)?)
}

#[derive(Serialize)]
struct TextForm {
    code: String,
    label: String,
    question: String,
    answer: String,
}

#[derive(Serialize)]
struct EditFaqPage {
    title: &'static str,
    menu: Vec<MenuEntry>,
    id: FaqId,
    texts: Vec<TextForm>,
}

/// GET /admin/faqs/edit/:id: one form per configured locale, prefilled
/// with the stored text where there is one.
pub async fn edit_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id: FaqId = id.parse().map_err(|_| PageError::faq_not_found())?;
    let faq = state.repo.faq_by_id(id).await?;

    let texts = state
        .locales
        .locales()
        .iter()
        .map(|locale| {
            let stored = faq.text_for(&locale.code);
            TextForm {
                code: locale.code.clone(),
                label: locale.label(),
                question: stored.map(|t| t.question.clone()).unwrap_or_default(),
                answer: stored.map(|t| t.answer.clone()).unwrap_or_default(),
            }
        })
        .collect();

    let page = EditFaqPage {
        title: "Edit FAQ",
        menu: admin_menu(FAQS_URL),
        id: faq.id,
        texts,
    };
    Ok(state.templates.render(ADMIN_FAQ_EDIT, &page)?)
}

#[derive(Serialize)]
struct LocaleRow<'a> {
    code: &'a str,
    label: String,
    default: bool,
}

#[derive(Serialize)]
struct LocalesPage<'a> {
    title: &'static str,
    menu: Vec<MenuEntry>,
    locales: Vec<LocaleRow<'a>>,
}

/// GET /admin/locales
pub async fn locales(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let rows = state
        .locales
        .locales()
        .iter()
        .map(|l| LocaleRow {
            code: &l.code,
            label: l.label(),
            default: state.locales.is_default(&l.code),
        })
        .collect();

    let page = LocalesPage {
        title: "Languages",
        menu: admin_menu(LOCALES_URL),
        locales: rows,
    };
    Ok(state.templates.render(ADMIN_LOCALES, &page)?)
}

/// Fields posted by the create, update and delete forms.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FaqForm {
    #[serde(rename = "faqID")]
    pub faq_id: String,
    #[serde(rename = "localeCode")]
    pub locale_code: String,
    pub question: String,
    pub answer: String,
}

impl FaqForm {
    fn parsed_id(&self) -> Result<FaqId, PageError> {
        self.faq_id
            .trim()
            .parse()
            .map_err(|_| PageError::BadRequest(format!("invalid faqID: {:?}", self.faq_id)))
    }
}

/// POST /admin/faqs/create: new FAQ with one text; an empty `localeCode`
/// means the default locale.
pub async fn create_faq(
    State(state): State<AppState>,
    Form(form): Form<FaqForm>,
) -> Result<Response, PageError> {
    let code = match form.locale_code.trim() {
        "" => state.locales.default_locale().code.clone(),
        code => code.to_string(),
    };
    let text = FaqText::new(code, form.question, form.answer);

    let faq = state.repo.create_faq().await?;
    if let Err(e) = state.repo.save_faq_text(faq.id, &text).await {
        if let Err(cleanup) = state.repo.delete_faq(faq.id).await {
            tracing::warn!(faq_id = faq.id, "could not remove empty faq: {cleanup}");
        }
        return Err(e.into());
    }
    tracing::info!(faq_id = faq.id, locale = %text.locale.code, "faq created");

    refresh_index(&state).await;
    Ok(found(&edit_url(faq.id)))
}

/// POST /admin/faqs/update: upsert one locale's text.
pub async fn update_faq(
    State(state): State<AppState>,
    Form(form): Form<FaqForm>,
) -> Result<Response, PageError> {
    let id = form.parsed_id()?;
    let code = form.locale_code.trim();
    if code.is_empty() {
        return Err(PageError::BadRequest("localeCode missing".into()));
    }
    let text = FaqText::new(code, form.question, form.answer);

    state.repo.save_faq_text(id, &text).await?;
    tracing::info!(faq_id = id, locale = %text.locale.code, "faq text saved");

    refresh_index(&state).await;
    Ok(found(&edit_url(id)))
}

/// POST /admin/faqs/delete
pub async fn delete_faq(
    State(state): State<AppState>,
    Form(form): Form<FaqForm>,
) -> Result<Response, PageError> {
    let id = form.parsed_id()?;
    state.repo.delete_faq(id).await?;
    tracing::info!(faq_id = id, "faq deleted");

    refresh_index(&state).await;
    Ok(found(FAQS_URL))
}

#[derive(Serialize)]
struct LoginPage {
    title: &'static str,
    menu: Vec<MenuEntry>,
}

/// GET /admin/login
pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let page = LoginPage {
        title: "Login",
        menu: Vec::new(),
    };
    Ok(state.templates.render(ADMIN_LOGIN, &page)?)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// POST /admin/login: on success sets the session cookie and goes to the
/// FAQ list; on failure back to the form, without a cookie.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    if !state.auth.verify_admin_login(&form.email, &form.password).await {
        tracing::info!("admin login rejected");
        return Ok(found(LOGIN_URL));
    }

    let expires_at = JwtConfig::session_expiry();
    let token = state.auth.jwt.mint(expires_at)?;
    let cookie = state.auth.session_cookie(&token, expires_at);
    tracing::info!("admin logged in");
    Ok(([(SET_COOKIE, cookie)], found(FAQS_URL)).into_response())
}

/// POST /admin/logout
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = state.auth.cleared_session_cookie();
    ([(SET_COOKIE, cookie)], found(LOGIN_URL)).into_response()
}
