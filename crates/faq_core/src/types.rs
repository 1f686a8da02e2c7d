//! FAQ entities as they travel between the store, the handlers and the wire.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Store-assigned FAQ identifier (always > 0 once persisted).
pub type FaqId = i64;

/// One locale's question/answer pair for a FAQ.
///
/// Unique per `(faq_id, locale.code)` in the store: saving again overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqText {
    pub locale: Locale,
    pub question: String,
    pub answer: String,
}

impl FaqText {
    pub fn new(
        locale_code: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            locale: Locale::from_code_only(locale_code),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// A blank text for `locale`, used to render empty edit forms.
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            question: String::new(),
            answer: String::new(),
        }
    }
}

/// A FAQ and all of its localized texts.
///
/// A FAQ with zero texts exists in the store but is invisible to readers:
/// every read endpoint treats it as not found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: FaqId,
    pub texts: Vec<FaqText>,
}

impl Faq {
    pub fn new(id: FaqId) -> Self {
        Self {
            id,
            texts: Vec::new(),
        }
    }

    pub fn with_texts(id: FaqId, texts: Vec<FaqText>) -> Self {
        Self { id, texts }
    }

    pub fn is_visible(&self) -> bool {
        !self.texts.is_empty()
    }

    pub fn text_for(&self, locale_code: &str) -> Option<&FaqText> {
        self.texts.iter().find(|t| t.locale.code == locale_code)
    }

    /// The text in `default_locale`, or an empty text carrying that locale.
    pub fn text_in_default_locale(&self, default_locale: &Locale) -> FaqText {
        self.text_for(&default_locale.code)
            .cloned()
            .unwrap_or_else(|| FaqText::empty(default_locale.clone()))
    }

    /// Best text to show for `locale_code`: exact, then default locale, then first stored.
    pub fn best_text(&self, locale_code: &str, default_code: &str) -> Option<&FaqText> {
        self.text_for(locale_code)
            .or_else(|| self.text_for(default_code))
            .or_else(|| self.texts.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Faq {
        Faq::with_texts(
            7,
            vec![
                FaqText::new("en", "question?", "answer!"),
                FaqText::new("de", "Frage?", "Antwort!"),
            ],
        )
    }

    #[test]
    fn new_faq_is_invisible() {
        assert!(!Faq::new(1).is_visible());
        assert!(sample().is_visible());
    }

    #[test]
    fn text_in_default_locale_falls_back_to_empty() {
        let faq = sample();
        let en = Locale::from_code_only("en");
        assert_eq!(faq.text_in_default_locale(&en).question, "question?");

        let fr = Locale::from_code_only("fr");
        let blank = faq.text_in_default_locale(&fr);
        assert_eq!(blank.locale.code, "fr");
        assert!(blank.question.is_empty());
    }

    #[test]
    fn best_text_prefers_exact_then_default_then_first() {
        let faq = sample();
        assert_eq!(faq.best_text("de", "en").map(|t| t.answer.as_str()), Some("Antwort!"));
        assert_eq!(faq.best_text("fr", "en").map(|t| t.answer.as_str()), Some("answer!"));
        assert_eq!(faq.best_text("fr", "es").map(|t| t.answer.as_str()), Some("answer!"));
        assert!(Faq::new(1).best_text("en", "en").is_none());
    }

    #[test]
    fn serializes_locale_code_only_for_stored_texts() {
        let faq = Faq::with_texts(3, vec![FaqText::new("en", "Q1", "A1")]);
        let json = serde_json::to_string(&faq).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"texts":[{"locale":{"code":"en"},"question":"Q1","answer":"A1"}]}"#
        );
    }

    #[test]
    fn empty_faq_serializes_texts_as_array() {
        let json = serde_json::to_string(&Faq::new(456)).unwrap();
        assert_eq!(json, r#"{"id":456,"texts":[]}"#);
    }
}
