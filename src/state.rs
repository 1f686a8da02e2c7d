//! Shared, read-only request context.

use std::path::PathBuf;
use std::sync::Arc;

use faq_core::{FaqRepository, LocaleCatalog, SearchIndexRefresher};

use crate::auth::AuthSettings;
use crate::config::Config;
use crate::middleware::jwt::JwtConfig;
use crate::templates::{TemplateError, Templates};

/// Everything a handler needs, built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn FaqRepository>,
    pub indexer: SearchIndexRefresher,
    pub locales: Arc<LocaleCatalog>,
    pub auth: Arc<AuthSettings>,
    pub templates: Arc<Templates>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn from_config(
        repo: Arc<dyn FaqRepository>,
        config: &Config,
    ) -> Result<Self, TemplateError> {
        let auth = AuthSettings {
            jwt: JwtConfig::from_secret(config.jwt_key.as_bytes()),
            admin_password_hash: config.admin_password_hash.clone(),
            api_key: config.api_key.clone(),
            http_allowed: config.http_allowed,
        };
        Ok(Self {
            indexer: SearchIndexRefresher::new(Arc::clone(&repo)),
            repo,
            locales: Arc::new(config.locales.clone()),
            auth: Arc::new(auth),
            templates: Arc::new(Templates::new()?),
            static_dir: config.static_dir.clone(),
        })
    }
}
