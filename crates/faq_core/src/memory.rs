//! In-memory `FaqRepository` with real write semantics.
//!
//! Behaves like the Postgres adapter for everything callers can observe:
//! sequential ids, upsert per `(faq_id, locale)`, and a search index that is
//! a snapshot rebuilt only by `update_search_index`. Ranking is a term
//! frequency count, which is enough for ordering tests and local runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::FaqError;
use crate::ports::{FaqRepository, Result};
use crate::types::{Faq, FaqId, FaqText};

#[derive(Debug)]
struct IndexedText {
    faq_id: FaqId,
    locale: String,
    terms: Vec<String>,
}

#[derive(Debug, Default)]
struct State {
    last_id: FaqId,
    faqs: BTreeMap<FaqId, Vec<FaqText>>,
    index: Vec<IndexedText>,
}

#[derive(Debug, Default)]
pub struct InMemoryFaqRepository {
    state: RwLock<State>,
}

impl InMemoryFaqRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn terms(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[async_trait]
impl FaqRepository for InMemoryFaqRepository {
    async fn all_faqs(&self) -> Result<Vec<Faq>> {
        let state = self.state.read().await;
        Ok(state
            .faqs
            .iter()
            .map(|(id, texts)| Faq::with_texts(*id, texts.clone()))
            .collect())
    }

    async fn faq_by_id(&self, id: FaqId) -> Result<Faq> {
        let state = self.state.read().await;
        let texts = state.faqs.get(&id).cloned().unwrap_or_default();
        Ok(Faq::with_texts(id, texts))
    }

    async fn search_faqs(&self, locale: &str, query: &str) -> Result<Vec<Faq>> {
        let wanted = terms(query);
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let state = self.state.read().await;
        let mut ranked: Vec<(usize, FaqId)> = state
            .index
            .iter()
            .filter(|entry| entry.locale == locale)
            .filter(|entry| wanted.iter().all(|w| entry.terms.contains(w)))
            .map(|entry| {
                let hits = entry.terms.iter().filter(|t| wanted.contains(t)).count();
                (hits, entry.faq_id)
            })
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        Ok(ranked
            .into_iter()
            .filter_map(|(_, id)| {
                state
                    .faqs
                    .get(&id)
                    .map(|texts| Faq::with_texts(id, texts.clone()))
            })
            .collect())
    }

    async fn update_search_index(&self) -> Result<()> {
        let mut state = self.state.write().await;
        let index = state
            .faqs
            .iter()
            .flat_map(|(id, texts)| {
                texts.iter().map(move |t| IndexedText {
                    faq_id: *id,
                    locale: t.locale.code.clone(),
                    terms: terms(&format!("{} {}", t.question, t.answer)),
                })
            })
            .collect();
        state.index = index;
        Ok(())
    }

    async fn create_faq(&self) -> Result<Faq> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id;
        state.faqs.insert(id, Vec::new());
        Ok(Faq::new(id))
    }

    async fn save_faq_text(&self, faq_id: FaqId, text: &FaqText) -> Result<()> {
        let mut state = self.state.write().await;
        let texts = state
            .faqs
            .get_mut(&faq_id)
            .ok_or_else(|| FaqError::storage(format!("faq {faq_id} does not exist")))?;
        let stored = FaqText::new(text.locale.code.clone(), &*text.question, &*text.answer);
        match texts.iter_mut().find(|t| t.locale.code == text.locale.code) {
            Some(existing) => *existing = stored,
            None => texts.push(stored),
        }
        Ok(())
    }

    async fn delete_faq(&self, faq_id: FaqId) -> Result<()> {
        self.state.write().await.faqs.remove(&faq_id);
        Ok(())
    }

    async fn clear_db(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.faqs.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_positive_id_without_texts() {
        let repo = InMemoryFaqRepository::new();
        let faq = repo.create_faq().await.unwrap();
        assert!(faq.id > 0);
        assert!(faq.texts.is_empty());

        let fetched = repo.faq_by_id(faq.id).await.unwrap();
        assert_eq!(fetched.id, faq.id);
        assert!(!fetched.is_visible());
    }

    #[tokio::test]
    async fn save_then_get_round_trip() {
        let repo = InMemoryFaqRepository::new();
        let faq = repo.create_faq().await.unwrap();
        repo.save_faq_text(faq.id, &FaqText::new("en", "Q", "A"))
            .await
            .unwrap();

        let fetched = repo.faq_by_id(faq.id).await.unwrap();
        assert_eq!(fetched.texts, vec![FaqText::new("en", "Q", "A")]);
    }

    #[tokio::test]
    async fn save_is_an_upsert() {
        let repo = InMemoryFaqRepository::new();
        let faq = repo.create_faq().await.unwrap();
        let text = FaqText::new("en", "Q", "A");
        repo.save_faq_text(faq.id, &text).await.unwrap();
        repo.save_faq_text(faq.id, &text).await.unwrap();
        assert_eq!(repo.faq_by_id(faq.id).await.unwrap().texts.len(), 1);

        repo.save_faq_text(faq.id, &FaqText::new("en", "Q2", "A2"))
            .await
            .unwrap();
        let texts = repo.faq_by_id(faq.id).await.unwrap().texts;
        assert_eq!(texts, vec![FaqText::new("en", "Q2", "A2")]);
    }

    #[tokio::test]
    async fn save_for_unknown_faq_fails() {
        let repo = InMemoryFaqRepository::new();
        let err = repo
            .save_faq_text(99, &FaqText::new("en", "Q", "A"))
            .await
            .unwrap_err();
        assert!(matches!(err, FaqError::Storage(_)));
    }

    #[tokio::test]
    async fn delete_leaves_nothing_visible() {
        let repo = InMemoryFaqRepository::new();
        let faq = repo.create_faq().await.unwrap();
        repo.save_faq_text(faq.id, &FaqText::new("en", "Q", "A"))
            .await
            .unwrap();
        repo.delete_faq(faq.id).await.unwrap();

        assert!(!repo.faq_by_id(faq.id).await.unwrap().is_visible());
        assert!(repo.all_faqs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn all_faqs_groups_locales_and_orders_by_id() {
        let repo = InMemoryFaqRepository::new();
        let first = repo.create_faq().await.unwrap();
        let second = repo.create_faq().await.unwrap();
        repo.save_faq_text(second.id, &FaqText::new("en", "q2", "a2"))
            .await
            .unwrap();
        repo.save_faq_text(first.id, &FaqText::new("en", "question", "answer"))
            .await
            .unwrap();
        repo.save_faq_text(first.id, &FaqText::new("de", "frage", "antwort"))
            .await
            .unwrap();

        let faqs = repo.all_faqs().await.unwrap();
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].id, first.id);
        assert_eq!(faqs[0].texts.len(), 2);
        assert_eq!(faqs[1].id, second.id);
    }

    #[tokio::test]
    async fn search_is_scoped_to_locale() {
        let repo = InMemoryFaqRepository::new();
        let faq = repo.create_faq().await.unwrap();
        repo.save_faq_text(faq.id, &FaqText::new("en", "question", "answer"))
            .await
            .unwrap();
        repo.update_search_index().await.unwrap();

        assert!(repo.search_faqs("de", "answer").await.unwrap().is_empty());
        assert!(repo.search_faqs("en", "foobar").await.unwrap().is_empty());

        let hits = repo.search_faqs("en", "Answer").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].texts[0].question, "question");
    }

    #[tokio::test]
    async fn search_returns_all_texts_of_matched_faq() {
        let repo = InMemoryFaqRepository::new();
        let faq = repo.create_faq().await.unwrap();
        repo.save_faq_text(faq.id, &FaqText::new("en", "question", "answer"))
            .await
            .unwrap();
        repo.save_faq_text(faq.id, &FaqText::new("de", "frage", "antwort"))
            .await
            .unwrap();
        repo.update_search_index().await.unwrap();

        let hits = repo.search_faqs("de", "antwort").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].texts.len(), 2);
    }

    #[tokio::test]
    async fn search_ranks_more_hits_first() {
        let repo = InMemoryFaqRepository::new();
        let weak = repo.create_faq().await.unwrap();
        let strong = repo.create_faq().await.unwrap();
        repo.save_faq_text(weak.id, &FaqText::new("en", "billing", "once"))
            .await
            .unwrap();
        repo.save_faq_text(
            strong.id,
            &FaqText::new("en", "billing questions", "billing is monthly billing"),
        )
        .await
        .unwrap();
        repo.update_search_index().await.unwrap();

        let ids: Vec<FaqId> = repo
            .search_faqs("en", "billing")
            .await
            .unwrap()
            .iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![strong.id, weak.id]);
    }

    #[tokio::test]
    async fn clear_db_removes_everything() {
        let repo = InMemoryFaqRepository::new();
        let faq = repo.create_faq().await.unwrap();
        repo.save_faq_text(faq.id, &FaqText::new("en", "Q", "A"))
            .await
            .unwrap();
        repo.clear_db().await.unwrap();
        assert!(repo.all_faqs().await.unwrap().is_empty());
    }
}
