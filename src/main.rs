//! faqaas server.
//!
//! Configuration comes from the environment (and `.env` when present):
//!   DATABASE_URL, JWT_KEY, ADMIN_PASSWORD, API_KEY, SUPPORTED_LOCALES (required)
//!   PORT (8080), HTTP_ALLOWED, FAQAAS_STATIC_DIR, DATABASE_MAX_CONNECTIONS, RUST_LOG

use std::sync::Arc;

use anyhow::Context;
use faq_core::FaqRepository;
use faq_postgres::PgFaqRepository;
use faqaas::config::Config;
use faqaas::router::build_router;
use faqaas::state::AppState;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,faqaas=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(?config, "configuration loaded");
    if config.admin_password_hash.is_none() {
        tracing::warn!("admin password check disabled");
    }
    if config.api_key.is_none() {
        tracing::warn!("API key check disabled");
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Connected to database");

    let store = PgFaqRepository::new(pool);
    store.migrate().await.context("failed to run migrations")?;
    let repo: Arc<dyn FaqRepository> = Arc::new(store);

    let state = AppState::from_config(repo, &config).context("failed to load templates")?;
    // the view may be stale after a restore or a manual edit
    if let Err(e) = state.indexer.refresh().await {
        tracing::warn!("initial search index refresh failed: {e}");
    }

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!("faqaas listening on {addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
