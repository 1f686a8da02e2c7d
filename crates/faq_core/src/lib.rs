//! faq_core: pure domain for the FAQ service.
//!
//! Holds the entity types, the locale catalog, the [`ports::FaqRepository`]
//! port trait and the non-persistent repository implementations used by
//! tests and local runs. No sqlx here; the Postgres adapter lives in
//! `faq_postgres`.

pub mod display;
pub mod error;
pub mod fixtures;
pub mod index;
pub mod locale;
pub mod memory;
pub mod ports;
pub mod types;

pub use error::{CatalogError, FaqError};
pub use index::SearchIndexRefresher;
pub use locale::{Locale, LocaleCatalog};
pub use ports::FaqRepository;
pub use types::{Faq, FaqId, FaqText};
