use listkit_shared::GridError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("{name} must be a boolean, got '{value}'")]
    InvalidBool { name: &'static str, value: String },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("invalid item fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("item {index}: {source}")]
    Grid { index: usize, source: GridError },
}
