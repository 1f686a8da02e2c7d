//! Postgres implementation of `FaqRepository`.
//!
//! Newtype over `PgPool`. All SQL is runtime-checked (`sqlx::query`, not
//! `sqlx::query!`) so building does not need a live database.

use std::collections::BTreeMap;

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::PgPool;

use faq_core::error::FaqError;
use faq_core::ports::{FaqRepository, Result};
use faq_core::types::{Faq, FaqId, FaqText};

/// Log the failing operation and wrap the driver error.
fn storage(op: &'static str, e: sqlx::Error) -> FaqError {
    tracing::error!(op, "faq store error: {e}");
    FaqError::Storage(anyhow!(e).context(op))
}

type TextRow = (FaqId, String, String, String);

fn group_texts(rows: Vec<TextRow>) -> BTreeMap<FaqId, Vec<FaqText>> {
    let mut grouped: BTreeMap<FaqId, Vec<FaqText>> = BTreeMap::new();
    for (faq_id, locale, question, answer) in rows {
        grouped
            .entry(faq_id)
            .or_default()
            .push(FaqText::new(locale, question, answer));
    }
    grouped
}

/// Postgres-backed FAQ store.
#[derive(Clone)]
pub struct PgFaqRepository {
    pool: PgPool,
}

impl PgFaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded schema migrations.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    async fn texts_for(&self, ids: &[FaqId]) -> Result<BTreeMap<FaqId, Vec<FaqText>>> {
        let rows = sqlx::query_as::<_, TextRow>(
            r#"
            SELECT faq_id, locale, question, answer
            FROM faq_texts
            WHERE faq_id = ANY($1)
            ORDER BY faq_id, id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage("texts_for", e))?;
        Ok(group_texts(rows))
    }
}

#[async_trait]
impl FaqRepository for PgFaqRepository {
    async fn all_faqs(&self) -> Result<Vec<Faq>> {
        let ids = sqlx::query_scalar::<_, FaqId>("SELECT id FROM faqs ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage("all_faqs", e))?;

        let rows = sqlx::query_as::<_, TextRow>(
            r#"
            SELECT faq_id, locale, question, answer
            FROM faq_texts
            ORDER BY faq_id, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage("all_faqs", e))?;
        let mut texts = group_texts(rows);

        Ok(ids
            .into_iter()
            .map(|id| Faq::with_texts(id, texts.remove(&id).unwrap_or_default()))
            .collect())
    }

    async fn faq_by_id(&self, id: FaqId) -> Result<Faq> {
        let mut texts = self.texts_for(&[id]).await?;
        Ok(Faq::with_texts(id, texts.remove(&id).unwrap_or_default()))
    }

    async fn search_faqs(&self, locale: &str, query: &str) -> Result<Vec<Faq>> {
        let ids = sqlx::query_scalar::<_, FaqId>(
            r#"
            SELECT search_index.faq_id
            FROM search_index
            JOIN faq_texts ON faq_texts.id = search_index.id
            WHERE search_index.document @@ plainto_tsquery('simple', $1)
              AND faq_texts.locale = $2
            ORDER BY ts_rank(search_index.document, plainto_tsquery('simple', $1)) DESC,
                     search_index.faq_id
            "#,
        )
        .bind(query)
        .bind(locale)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage("search_faqs", e))?;

        let mut texts = self.texts_for(&ids).await?;
        Ok(ids
            .into_iter()
            .filter_map(|id| texts.remove(&id).map(|t| Faq::with_texts(id, t)))
            .collect())
    }

    async fn update_search_index(&self) -> Result<()> {
        sqlx::query("REFRESH MATERIALIZED VIEW search_index")
            .execute(&self.pool)
            .await
            .map_err(|e| storage("update_search_index", e))?;
        Ok(())
    }

    async fn create_faq(&self) -> Result<Faq> {
        let id = sqlx::query_scalar::<_, FaqId>("INSERT INTO faqs DEFAULT VALUES RETURNING id")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage("create_faq", e))?;
        Ok(Faq::new(id))
    }

    async fn save_faq_text(&self, faq_id: FaqId, text: &FaqText) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO faq_texts (faq_id, locale, question, answer)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT ON CONSTRAINT texts_faq_id_locale
            DO UPDATE SET question = EXCLUDED.question,
                          answer = EXCLUDED.answer
            "#,
        )
        .bind(faq_id)
        .bind(&text.locale.code)
        .bind(&text.question)
        .bind(&text.answer)
        .execute(&self.pool)
        .await
        .map_err(|e| storage("save_faq_text", e))?;
        Ok(())
    }

    async fn delete_faq(&self, faq_id: FaqId) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage("delete_faq", e))?;

        // texts first: faq_texts.faq_id references faqs.id
        sqlx::query("DELETE FROM faq_texts WHERE faq_id = $1")
            .bind(faq_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage("delete_faq", e))?;
        sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(faq_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage("delete_faq", e))?;

        tx.commit().await.map_err(|e| storage("delete_faq", e))?;
        Ok(())
    }

    async fn clear_db(&self) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage("clear_db", e))?;
        sqlx::query("DELETE FROM faq_texts")
            .execute(&mut *tx)
            .await
            .map_err(|e| storage("clear_db", e))?;
        sqlx::query("DELETE FROM faqs")
            .execute(&mut *tx)
            .await
            .map_err(|e| storage("clear_db", e))?;
        tx.commit().await.map_err(|e| storage("clear_db", e))?;
        Ok(())
    }
}
