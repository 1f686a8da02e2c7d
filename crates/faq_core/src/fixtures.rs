//! Fixed-response repositories for handler tests.
//!
//! [`FixtureRepository`] serves a small constant data set and ignores
//! writes; [`BrokenRepository`] fails every call.

use async_trait::async_trait;

use crate::error::FaqError;
use crate::locale::Locale;
use crate::ports::{FaqRepository, Result};
use crate::types::{Faq, FaqId, FaqText};

pub const FIXTURE_FAQ_ID: FaqId = 123;
pub const SOME_DB_ERROR: &str = "some DB error";

fn fixture_text(code: &str, name_local: &str, question: &str, answer: &str) -> FaqText {
    FaqText {
        locale: Locale {
            name_local: name_local.to_string(),
            ..Locale::from_code_only(code)
        },
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// Three FAQs: 123 with an English and a German text, 456 and 789 empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRepository;

impl FixtureRepository {
    fn faqs() -> Vec<Faq> {
        vec![
            Faq::with_texts(
                FIXTURE_FAQ_ID,
                vec![
                    fixture_text("en", "English", "question?", "answer!"),
                    fixture_text("de", "Deutsch", "Frage?", "Antwort!"),
                ],
            ),
            Faq::new(456),
            Faq::new(789),
        ]
    }
}

#[async_trait]
impl FaqRepository for FixtureRepository {
    async fn all_faqs(&self) -> Result<Vec<Faq>> {
        Ok(Self::faqs())
    }

    async fn faq_by_id(&self, id: FaqId) -> Result<Faq> {
        Ok(Self::faqs()
            .into_iter()
            .find(|f| f.id == id)
            .unwrap_or_else(|| Faq::new(id)))
    }

    async fn search_faqs(&self, _locale: &str, _query: &str) -> Result<Vec<Faq>> {
        Ok(Self::faqs())
    }

    async fn update_search_index(&self) -> Result<()> {
        Ok(())
    }

    async fn create_faq(&self) -> Result<Faq> {
        Ok(Faq::new(FIXTURE_FAQ_ID))
    }

    async fn save_faq_text(&self, _faq_id: FaqId, _text: &FaqText) -> Result<()> {
        Ok(())
    }

    async fn delete_faq(&self, _faq_id: FaqId) -> Result<()> {
        Ok(())
    }

    async fn clear_db(&self) -> Result<()> {
        Ok(())
    }
}

/// Every call fails with a storage error.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrokenRepository;

#[async_trait]
impl FaqRepository for BrokenRepository {
    async fn all_faqs(&self) -> Result<Vec<Faq>> {
        Err(FaqError::storage(SOME_DB_ERROR))
    }

    async fn faq_by_id(&self, _id: FaqId) -> Result<Faq> {
        Err(FaqError::storage(SOME_DB_ERROR))
    }

    async fn search_faqs(&self, _locale: &str, _query: &str) -> Result<Vec<Faq>> {
        Err(FaqError::storage(SOME_DB_ERROR))
    }

    async fn update_search_index(&self) -> Result<()> {
        Err(FaqError::storage(SOME_DB_ERROR))
    }

    async fn create_faq(&self) -> Result<Faq> {
        Err(FaqError::storage(SOME_DB_ERROR))
    }

    async fn save_faq_text(&self, _faq_id: FaqId, _text: &FaqText) -> Result<()> {
        Err(FaqError::storage(SOME_DB_ERROR))
    }

    async fn delete_faq(&self, _faq_id: FaqId) -> Result<()> {
        Err(FaqError::storage(SOME_DB_ERROR))
    }

    async fn clear_db(&self) -> Result<()> {
        Err(FaqError::storage(SOME_DB_ERROR))
    }
}
