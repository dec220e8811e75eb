use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a run before or outside of the per-URL pipeline
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of the audit collaborator for a single URL
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to spawn `{cmd}`: {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: io::Error,
    },
    #[error("audit exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("audit output is not valid JSON: {0}")]
    InvalidOutput(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// Data-quality problems found while reading category scores
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("audit result is malformed: {0}")]
    MalformedDocument(String),
    #[error("audit result is missing categories: {}", .0.join(", "))]
    MissingCategories(Vec<String>),
    #[error("category '{0}' has no score")]
    MissingScore(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum BadgeError {
    #[error("badge value {0} is outside 0..=100")]
    ValueOutOfRange(u8),
    #[error("badge label is empty")]
    EmptyLabel,
}

/// A single artifact that could not be persisted
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteFailure {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
