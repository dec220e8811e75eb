use url::Url;

use crate::core::engine::extract::extract_metrics;
use crate::core::engine::report::materialize_report;
use crate::core::engine::traits::ReportRenderer;
use crate::types::{ExtractError, MetricsMap, RawAuditResult, ReportEntry};

/// Metrics and report produced for one audited URL
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedResult {
    pub metrics: MetricsMap,
    pub report: ReportEntry,
}

/// Turn one raw audit result into its metrics and report entry. No I/O.
pub fn process_result(
    raw: &RawAuditResult,
    url: &Url,
    save_report: bool,
    renderer: &dyn ReportRenderer,
) -> Result<ProcessedResult, ExtractError> {
    let metrics = extract_metrics(raw)?;
    let report = materialize_report(Some(raw), save_report, renderer);
    Ok(ProcessedResult {
        metrics,
        report: ReportEntry::new(url.clone(), report),
    })
}
