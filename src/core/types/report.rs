use url::Url;

/// Outcome of report materialization for one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// No report was requested
    Skipped,
    /// A complete, self-contained HTML document
    Rendered(String),
}

impl Report {
    pub fn html(&self) -> Option<&str> {
        match self {
            Report::Skipped => None,
            Report::Rendered(html) => Some(html),
        }
    }
}

/// The report produced for exactly one audited URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub url: Url,
    pub report: Report,
}

impl ReportEntry {
    pub fn new(url: Url, report: Report) -> Self {
        Self { url, report }
    }
}
