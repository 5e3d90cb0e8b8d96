use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpressionError {
    #[error("failed to encode expression as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
