use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("artifact shape mismatch: expected {expected}, got {got}")]
    Shape { expected: usize, got: usize },

    #[error("invalid vocabulary: {0}")]
    Vocabulary(String),
}
