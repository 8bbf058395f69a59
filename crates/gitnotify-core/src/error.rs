use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("commit at position {index} has no sha")]
    MissingSha { index: usize },

    #[error("malformed event: {0}")]
    Json(#[from] serde_json::Error),
}
