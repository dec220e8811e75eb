use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use url::Url;

use crate::types::{AuditError, BadgeError, ContentHash, ExtractError, WriteFailure};

/// An artifact that was persisted successfully
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrittenArtifact {
    pub path: PathBuf,
    pub sha256: ContentHash,
}

/// Result of one writer call: every write is attempted
#[derive(Debug, Default)]
pub struct WriteSummary {
    pub written: Vec<WrittenArtifact>,
    pub failures: Vec<WriteFailure>,
}

/// A non-fatal failure isolated to one URL or one artifact
#[derive(Debug)]
pub enum Failure {
    Audit { url: Url, error: AuditError },
    Extract { url: Url, error: ExtractError },
    Badge { url: Url, label: String, error: BadgeError },
    Write(WriteFailure),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Audit { url, error } => write!(f, "audit of {url} failed: {error}"),
            Failure::Extract { url, error } => write!(f, "scores of {url} unusable: {error}"),
            Failure::Badge { url, label, error } => {
                write!(f, "badge '{label}' for {url} not rendered: {error}")
            }
            Failure::Write(error) => write!(f, "{error}"),
        }
    }
}

/// Everything a pipeline run produced
#[derive(Debug, Default)]
pub struct RunSummary {
    pub artifacts: Vec<WrittenArtifact>,
    pub failures: Vec<Failure>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn absorb_writes(&mut self, writes: WriteSummary) {
        self.artifacts.extend(writes.written);
        self.failures
            .extend(writes.failures.into_iter().map(Failure::Write));
    }
}
