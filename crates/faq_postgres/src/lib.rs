//! faq_postgres: PostgreSQL adapter for the `faq_core` repository port.

pub mod store;

pub use store::PgFaqRepository;
