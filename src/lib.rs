//! faqaas: FAQ-as-a-service HTTP server.
//!
//! Serves localized FAQs as a JSON API (`/api/*`, API key), as public HTML
//! pages (`/faqs/*`, `/faq/*`) and through a password-protected admin
//! console (`/admin/*`, JWT session cookie). Persistence goes through the
//! `faq_core::FaqRepository` port; `main` wires in `faq_postgres`.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod slug;
pub mod state;
pub mod templates;
