//! Handlebars registry for the admin console and the public pages.
//!
//! Templates are compiled into the binary and registered once at start-up;
//! a broken template fails `Templates::new`, not a request.

use axum::response::Html;
use handlebars::{Handlebars, RenderError};
use serde::Serialize;

pub use handlebars::TemplateError;

pub const ADMIN_FAQS: &str = "admin_faqs";
pub const ADMIN_FAQ_NEW: &str = "admin_faq_new";
pub const ADMIN_FAQ_EDIT: &str = "admin_faq_edit";
pub const ADMIN_LOCALES: &str = "admin_locales";
pub const ADMIN_LOGIN: &str = "admin_login";
pub const PUBLIC_FAQS: &str = "public_faqs";
pub const PUBLIC_FAQ: &str = "public_faq";

const PARTIALS: &[(&str, &str)] = &[
    ("layout", include_str!("../templates/layout.hbs")),
    ("public_layout", include_str!("../templates/public_layout.hbs")),
];

const PAGES: &[(&str, &str)] = &[
    (ADMIN_FAQS, include_str!("../templates/admin_faqs.hbs")),
    (ADMIN_FAQ_NEW, include_str!("../templates/admin_faq_new.hbs")),
    (ADMIN_FAQ_EDIT, include_str!("../templates/admin_faq_edit.hbs")),
    (ADMIN_LOCALES, include_str!("../templates/admin_locales.hbs")),
    (ADMIN_LOGIN, include_str!("../templates/admin_login.hbs")),
    (PUBLIC_FAQS, include_str!("../templates/public_faqs.hbs")),
    (PUBLIC_FAQ, include_str!("../templates/public_faq.hbs")),
];

/// One entry of the admin menu bar.
#[derive(Debug, Serialize)]
pub struct MenuEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub active: bool,
}

/// Admin menu with the entry at `active_url` highlighted.
pub fn admin_menu(active_url: &str) -> Vec<MenuEntry> {
    [("FAQs", "/admin/faqs"), ("Languages", "/admin/locales")]
        .into_iter()
        .map(|(name, url)| MenuEntry {
            name,
            url,
            active: url == active_url,
        })
        .collect()
}

pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in PAGES {
            registry.register_template_string(name, *source)?;
        }
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, RenderError> {
        self.registry.render(name, data).map(Html)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn all_templates_register() {
        let templates = Templates::new().unwrap();
        for (name, _) in PAGES {
            assert!(templates.registry.has_template(name), "{name}");
        }
    }

    #[test]
    fn admin_page_uses_layout_and_menu() {
        let templates = Templates::new().unwrap();
        let data = json!({
            "title": "FAQs",
            "menu": admin_menu("/admin/faqs"),
            "default_locale": {"code": "en"},
            "faqs": [{"id": 3, "question": "Why?"}],
        });
        let Html(page) = templates.render(ADMIN_FAQS, &data).unwrap();
        assert!(page.contains("<title>Admin / FAQs</title>"));
        assert!(page.contains(r#"<a href="/admin/faqs" class="active">FAQs</a>"#));
        assert!(page.contains(r#"<a href="/admin/locales">Languages</a>"#));
        assert!(page.contains(r#"<form action="/admin/logout" method="post""#));
        assert!(page.contains("<td>Why?</td>"));
        assert!(page.contains(r#"href="/admin/faqs/edit/3""#));
    }

    #[test]
    fn login_page_has_no_menu() {
        let templates = Templates::new().unwrap();
        let data = json!({"title": "Login", "menu": []});
        let Html(page) = templates.render(ADMIN_LOGIN, &data).unwrap();
        assert!(page.contains(r#"<form action="/admin/login" method="post""#));
        assert!(!page.contains("/admin/logout"));
    }

    #[test]
    fn values_are_html_escaped() {
        let templates = Templates::new().unwrap();
        let data = json!({
            "title": "FAQs",
            "menu": admin_menu("/admin/faqs"),
            "default_locale": {"code": "en"},
            "faqs": [{"id": 1, "question": "<script>x</script>"}],
        });
        let Html(page) = templates.render(ADMIN_FAQS, &data).unwrap();
        assert!(!page.contains("<script>x</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
