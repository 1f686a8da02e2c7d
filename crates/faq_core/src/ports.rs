//! Port trait for FAQ persistence.
//!
//! Implementations: `faq_postgres::PgFaqRepository` (production),
//! [`crate::memory::InMemoryFaqRepository`], and the fixed doubles in
//! [`crate::fixtures`]. The composition root picks one and hands it out as
//! `Arc<dyn FaqRepository>`.

use async_trait::async_trait;

use crate::error::FaqError;
use crate::types::{Faq, FaqId, FaqText};

pub type Result<T> = std::result::Result<T, FaqError>;

#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// All FAQs ordered by id ascending, each with all of its texts.
    async fn all_faqs(&self) -> Result<Vec<Faq>>;

    /// The FAQ with `id`. An unknown id or a FAQ without texts comes back
    /// with empty `texts`; callers check [`Faq::is_visible`].
    async fn faq_by_id(&self, id: FaqId) -> Result<Faq>;

    /// Full-text search over texts in `locale`, best match first.
    ///
    /// The locale decides which FAQs match; each result carries all of its
    /// texts. `query` must already be non-blank. Reflects the index as of
    /// the last [`FaqRepository::update_search_index`].
    async fn search_faqs(&self, locale: &str, query: &str) -> Result<Vec<Faq>>;

    /// Rebuild the search index in full.
    async fn update_search_index(&self) -> Result<()>;

    /// Allocate a new FAQ with a store-assigned id and no texts.
    async fn create_faq(&self) -> Result<Faq>;

    /// Insert or overwrite the text for `(faq_id, text.locale.code)`.
    async fn save_faq_text(&self, faq_id: FaqId, text: &FaqText) -> Result<()>;

    /// Remove a FAQ and all of its texts atomically.
    async fn delete_faq(&self, faq_id: FaqId) -> Result<()>;

    /// Remove every text and FAQ. Test setup only.
    async fn clear_db(&self) -> Result<()>;
}
