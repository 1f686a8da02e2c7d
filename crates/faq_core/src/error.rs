use thiserror::Error;

/// Errors surfaced by [`crate::ports::FaqRepository`] implementations.
#[derive(Debug, Error)]
pub enum FaqError {
    /// Connectivity or query failure in the backing store.
    #[error("storage: {0}")]
    Storage(#[from] anyhow::Error),
}

impl FaqError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(anyhow::anyhow!(msg.into()))
    }
}

/// Errors raised while loading the configured locale list.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no supported locales configured")]
    Empty,

    #[error("invalid locale code {code:?}: {reason}")]
    InvalidTag { code: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_display_carries_detail() {
        let err = FaqError::storage("connection refused");
        assert_eq!(err.to_string(), "storage: connection refused");
    }

    #[test]
    fn invalid_tag_display_names_the_code() {
        let err = CatalogError::InvalidTag {
            code: "--".into(),
            reason: "bad subtag".into(),
        };
        assert!(err.to_string().contains("\"--\""));
    }
}
