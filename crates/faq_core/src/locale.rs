//! Locale catalog: the configured set of supported locales and best-match
//! negotiation over it.
//!
//! The catalog is built once at start-up and never mutated afterwards, so it
//! is shared read-only (`Arc<LocaleCatalog>`) between requests. Matching is
//! delegated to `fluent-langneg`; this module only feeds it the cookie
//! preference and the `Accept-Language` header, in that priority, each
//! ordered by `q` weight.

use std::cmp::Ordering;

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::display;
use crate::error::CatalogError;

/// A language/region identifier with its display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub code: String,
    /// Name in English.
    #[serde(rename = "name_en", default, skip_serializing_if = "String::is_empty")]
    pub name_english: String,
    /// Name in the language itself.
    #[serde(rename = "name_local", default, skip_serializing_if = "String::is_empty")]
    pub name_local: String,
}

impl Locale {
    /// A locale reference as stored alongside a text: code only, no names.
    pub fn from_code_only(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name_english: String::new(),
            name_local: String::new(),
        }
    }

    /// `"German (Deutsch)"`, as shown in the admin console.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name_english, self.name_local)
    }
}

/// Resolve display names for `code`.
///
/// An unparsable code yields empty names; a valid tag without known names
/// uses the code itself for both.
pub fn locale_from_code(code: &str) -> Locale {
    match code.parse::<LanguageIdentifier>() {
        Ok(langid) => locale_for_tag(code, &langid),
        Err(_) => Locale::from_code_only(code),
    }
}

/// Language ranges of an `Accept-Language` style list, highest `q` first.
///
/// Entries with equal weight keep their list order. `q=0` entries, `*` and
/// unparsable tags are dropped; a missing or malformed `q` counts as 1.
pub fn weighted_languages(list: &str) -> Vec<LanguageIdentifier> {
    let mut weighted: Vec<(f32, LanguageIdentifier)> = list
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let q = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|v| v.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            if q <= 0.0 {
                return None;
            }
            let langid = tag.parse::<LanguageIdentifier>().ok()?;
            Some((q, langid))
        })
        .collect();
    // stable: ties stay in list order
    weighted.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    weighted.into_iter().map(|(_, langid)| langid).collect()
}

fn locale_for_tag(code: &str, langid: &LanguageIdentifier) -> Locale {
    let (en, local) = display::names_for(langid).unwrap_or((code, code));
    Locale {
        code: code.to_string(),
        name_english: en.to_string(),
        name_local: local.to_string(),
    }
}

/// The supported locales, in configured order. The first is the default.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    locales: Vec<Locale>,
    tags: Vec<LanguageIdentifier>,
}

impl LocaleCatalog {
    /// Build the catalog from a list of codes. Fails on an empty list or on
    /// any code that is not a valid language tag.
    pub fn load<S: AsRef<str>>(codes: &[S]) -> Result<Self, CatalogError> {
        if codes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut locales = Vec::with_capacity(codes.len());
        let mut tags = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.as_ref().trim();
            if code.is_empty() {
                return Err(CatalogError::InvalidTag {
                    code: code.to_string(),
                    reason: "empty locale code".into(),
                });
            }
            let langid: LanguageIdentifier =
                code.parse().map_err(|e| CatalogError::InvalidTag {
                    code: code.to_string(),
                    reason: format!("{e}"),
                })?;
            locales.push(locale_for_tag(code, &langid));
            tags.push(langid);
        }

        Ok(Self { locales, tags })
    }

    /// Build the catalog from a comma separated list such as `"en,de,pt-BR"`.
    pub fn from_list(list: &str) -> Result<Self, CatalogError> {
        if list.trim().is_empty() {
            return Err(CatalogError::Empty);
        }
        let codes: Vec<&str> = list.split(',').collect();
        Self::load(&codes)
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn default_locale(&self) -> &Locale {
        // non-empty by construction
        &self.locales[0]
    }

    pub fn get(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.code == code)
    }

    pub fn is_default(&self, code: &str) -> bool {
        self.default_locale().code == code
    }

    /// Closest supported locale for the given preferences.
    ///
    /// `cookie` takes priority over `accept_language`; both may be
    /// weighted comma separated lists. Falls back to the default locale.
    pub fn match_locale(&self, cookie: Option<&str>, accept_language: Option<&str>) -> &Locale {
        let mut requested: Vec<LanguageIdentifier> = Vec::new();
        for pref in [cookie, accept_language].into_iter().flatten() {
            requested.extend(weighted_languages(pref));
        }
        if requested.is_empty() {
            return self.default_locale();
        }

        let matched = negotiate_languages(
            &requested,
            &self.tags,
            self.tags.first(),
            NegotiationStrategy::Lookup,
        );

        matched
            .first()
            .and_then(|tag| self.tags.iter().position(|t| std::ptr::eq(t, *tag)))
            .map(|idx| &self.locales[idx])
            .unwrap_or_else(|| self.default_locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LocaleCatalog {
        LocaleCatalog::from_list("en,de,fr,es,pt,pt-BR").unwrap()
    }

    #[test]
    fn load_preserves_order_and_default_is_first() {
        let codes = ["de", "en", "zh"];
        let catalog = LocaleCatalog::load(&codes).unwrap();
        let loaded: Vec<&str> = catalog.locales().iter().map(|l| l.code.as_str()).collect();
        assert_eq!(loaded, codes);
        assert_eq!(catalog.default_locale().code, "de");
        assert!(catalog.is_default("de"));
        assert!(!catalog.is_default("en"));
    }

    #[test]
    fn load_rejects_empty_list() {
        let none: [&str; 0] = [];
        assert!(matches!(LocaleCatalog::load(&none), Err(CatalogError::Empty)));
        assert!(matches!(LocaleCatalog::from_list("  "), Err(CatalogError::Empty)));
    }

    #[test]
    fn load_rejects_invalid_tag() {
        let err = LocaleCatalog::from_list("en,--").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTag { ref code, .. } if code == "--"));

        let err = LocaleCatalog::from_list("en,,de").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTag { .. }));
    }

    #[test]
    fn load_resolves_display_names() {
        let catalog = catalog();
        let de = catalog.get("de").unwrap();
        assert_eq!(de.name_english, "German");
        assert_eq!(de.name_local, "Deutsch");
        assert_eq!(de.label(), "German (Deutsch)");
        let br = catalog.get("pt-BR").unwrap();
        assert_eq!(br.name_english, "Brazilian Portuguese");
    }

    #[test]
    fn locale_from_code_table() {
        let cases = [
            ("en", "English", "English"),
            ("de", "German", "Deutsch"),
            ("fr", "French", "français"),
            ("es", "Spanish", "español"),
            ("it", "Italian", "italiano"),
            ("pt", "Portuguese", "português"),
            ("pt-BR", "Brazilian Portuguese", "português"),
            ("no", "Norwegian Bokmål", "norsk bokmål"),
            ("ru", "Russian", "русский"),
            ("ar", "Arabic", "العربية"),
            ("zh", "Chinese", "中文"),
            ("--", "", ""),
        ];
        for (code, en, local) in cases {
            let locale = locale_from_code(code);
            assert_eq!(locale.code, code);
            assert_eq!(locale.name_english, en, "english name for {code}");
            assert_eq!(locale.name_local, local, "local name for {code}");
        }
    }

    #[test]
    fn match_without_preferences_is_default() {
        assert_eq!(catalog().match_locale(None, None).code, "en");
        assert_eq!(catalog().match_locale(Some(""), Some("")).code, "en");
    }

    #[test]
    fn match_exact_tag() {
        assert_eq!(catalog().match_locale(None, Some("fr")).code, "fr");
        assert_eq!(catalog().match_locale(None, Some("pt-BR")).code, "pt-BR");
    }

    #[test]
    fn match_language_only() {
        assert_eq!(catalog().match_locale(None, Some("de-AT,de;q=0.8")).code, "de");
    }

    #[test]
    fn match_unsupported_falls_back_to_default() {
        assert_eq!(catalog().match_locale(None, Some("ja,ko;q=0.5")).code, "en");
    }

    #[test]
    fn cookie_takes_priority_over_header() {
        assert_eq!(catalog().match_locale(Some("es"), Some("de")).code, "es");
        // an unusable cookie defers to the header
        assert_eq!(catalog().match_locale(Some("ja"), Some("de")).code, "de");
    }

    #[test]
    fn header_weights_outrank_header_order() {
        let catalog = LocaleCatalog::from_list("en,de,fr").unwrap();
        assert_eq!(catalog.match_locale(None, Some("fr;q=0.1, de;q=0.9")).code, "de");
        assert_eq!(catalog.match_locale(None, Some("fr;q=0.5, de;q=0.5")).code, "fr");
        // a cookie still beats any header weight
        assert_eq!(catalog.match_locale(Some("fr"), Some("de;q=1.0")).code, "fr");
    }

    #[test]
    fn weighted_languages_ordering() {
        let header = "da, en-GB;q=0.8, en;q=0.7, fr;q=0.8, ja;q=0, *;q=0.1";
        let tags: Vec<String> = weighted_languages(header)
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(tags, vec!["da", "en-GB", "fr", "en"]);

        let tags: Vec<String> = weighted_languages("de;q=abc, !!, nl;q=0.3")
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(tags, vec!["de", "nl"]);
    }

    #[test]
    fn locale_json_omits_empty_names() {
        let json = serde_json::to_string(&Locale::from_code_only("en")).unwrap();
        assert_eq!(json, r#"{"code":"en"}"#);
        let json = serde_json::to_string(&locale_from_code("de")).unwrap();
        assert_eq!(json, r#"{"code":"de","name_en":"German","name_local":"Deutsch"}"#);
    }
}
