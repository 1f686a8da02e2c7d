//! SearchIndexRefresher: full search index rebuild after every write.

use std::sync::Arc;
use std::time::Instant;

use crate::ports::{FaqRepository, Result};

/// Rebuilds the search index through the repository, synchronously.
///
/// Writers call [`SearchIndexRefresher::refresh`] right after a successful
/// create/update/delete; searches do not see the change before that.
#[derive(Clone)]
pub struct SearchIndexRefresher {
    repo: Arc<dyn FaqRepository>,
}

impl SearchIndexRefresher {
    pub fn new(repo: Arc<dyn FaqRepository>) -> Self {
        Self { repo }
    }

    pub async fn refresh(&self) -> Result<()> {
        let started = Instant::now();
        match self.repo.update_search_index().await {
            Ok(()) => {
                tracing::debug!(elapsed = ?started.elapsed(), "search index refreshed");
                Ok(())
            }
            Err(e) => {
                tracing::error!("search index refresh failed: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::BrokenRepository;
    use crate::memory::InMemoryFaqRepository;
    use crate::types::FaqText;

    #[tokio::test]
    async fn refresh_makes_writes_searchable() {
        let repo = Arc::new(InMemoryFaqRepository::new());
        let refresher = SearchIndexRefresher::new(repo.clone());

        let faq = repo.create_faq().await.unwrap();
        repo.save_faq_text(faq.id, &FaqText::new("en", "How?", "Like this"))
            .await
            .unwrap();
        assert!(repo.search_faqs("en", "this").await.unwrap().is_empty());

        refresher.refresh().await.unwrap();
        assert_eq!(repo.search_faqs("en", "this").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn refresh_propagates_store_errors() {
        let refresher = SearchIndexRefresher::new(Arc::new(BrokenRepository));
        assert!(refresher.refresh().await.is_err());
    }
}
