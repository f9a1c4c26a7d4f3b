use thiserror::Error;

/// Errors that can occur while building a mapping table or handling its
/// configuration. Resolution itself never fails.
#[derive(Error, Debug)]
pub enum DocRefError {
    #[error("pattern error: {message} (pattern: {pattern})")]
    Pattern { pattern: String, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `DocRefError`.
pub type Result<T> = std::result::Result<T, DocRefError>;
