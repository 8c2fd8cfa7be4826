//! Typed errors for the fact-checking library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! pattern-match on the failure they care about.

use thiserror::Error;

/// Errors that can occur in the fact-checking pipeline.
#[derive(Debug, Error)]
pub enum FactCheckError {
    /// News search request failed
    #[error("search failed: {0}")]
    Search(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Completion model unavailable or failed
    #[error("model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The model produced no verifiable claims for an article
    #[error("no verifiable claims extracted")]
    NoClaims,

    /// Article search returned an empty result set
    #[error("no articles found for query: {query}")]
    NoArticles { query: String },

    /// Fallacy taxonomy could not be read
    #[error("fallacy data error: {0}")]
    FallacyData(#[from] std::io::Error),

    /// Configuration error (missing API key, bad parameter)
    #[error("config error: {0}")]
    Config(String),
}

impl FactCheckError {
    /// Wrap a plain message as a search failure.
    pub fn search(msg: impl Into<String>) -> Self {
        Self::Search(Box::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            msg.into(),
        )))
    }

    /// Wrap a plain message as a model failure.
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(Box::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            msg.into(),
        )))
    }
}

/// Result type alias for fact-checking operations.
pub type Result<T> = std::result::Result<T, FactCheckError>;
