use std::io;
use std::path::Path;

use async_trait::async_trait;
use url::Url;

use crate::types::{AuditError, BadgeError, BadgeSpec, RawAuditResult};

/// Runs the audit engine against one URL
#[async_trait]
pub trait Auditor: Send + Sync {
    /// Short name used in logs (e.g., "lighthouse")
    fn name(&self) -> &str;

    /// Audit `url` and return the engine's raw result document
    async fn audit(&self, url: &Url) -> Result<RawAuditResult, AuditError>;
}

/// Turns a raw audit result into a self-contained HTML document
pub trait ReportRenderer: Send + Sync {
    fn render(&self, raw: &RawAuditResult) -> String;
}

/// Turns a label, a score and a style hint into an SVG document
pub trait BadgeRenderer: Send + Sync {
    fn render(&self, spec: &BadgeSpec) -> Result<String, BadgeError>;
}

/// Write primitive used for every artifact
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    /// Write `contents` to `path`; the destination is either fully written or untouched
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}
