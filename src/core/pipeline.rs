use std::sync::Arc;

use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use url::Url;

use crate::core::engine::badges::render_badges;
use crate::core::engine::process::{ProcessedResult, process_result};
use crate::core::engine::traits::{ArtifactSink, Auditor, BadgeRenderer, ReportRenderer};
use crate::core::writer::ArtifactWriter;
use crate::types::config::RunParameters;
use crate::types::{Failure, ReportEntry, RunSummary};

/// Outcome of the audit stage for one URL
enum UrlOutcome {
    Processed(ProcessedResult),
    Failed(Failure),
}

/// Runs audits for every URL and turns the results into badges and reports.
///
/// Every collaborator is injected so the whole pipeline can run against
/// in-memory substitutes.
#[derive(Clone)]
pub struct Pipeline {
    auditor: Arc<dyn Auditor>,
    report_renderer: Arc<dyn ReportRenderer>,
    badge_renderer: Arc<dyn BadgeRenderer>,
    writer: ArtifactWriter,
}

impl Pipeline {
    pub fn new(
        auditor: Arc<dyn Auditor>,
        report_renderer: Arc<dyn ReportRenderer>,
        badge_renderer: Arc<dyn BadgeRenderer>,
        sink: Arc<dyn ArtifactSink>,
    ) -> Self {
        Self {
            auditor,
            report_renderer,
            badge_renderer,
            writer: ArtifactWriter::new(sink),
        }
    }

    /// Audit all URLs concurrently, wait for all of them, then write artifacts.
    ///
    /// Failures of one URL or one artifact never stop the others; they are
    /// collected in the returned summary.
    pub async fn run(&self, params: &RunParameters) -> RunSummary {
        info!(
            "Auditing {} URL(s) with {} ({} badges, report: {})",
            params.urls.len(),
            self.auditor.name(),
            params.mode,
            if params.save_report { "yes" } else { "no" }
        );

        let progress = if params.progress {
            let bar = ProgressBar::new(params.urls.len() as u64);
            let template = "{spinner} [{bar:30}] {pos}/{len} {msg}";
            if let Ok(style) = ProgressStyle::with_template(template) {
                bar.set_style(style.progress_chars("=> "));
            }
            bar
        } else {
            ProgressBar::hidden()
        };

        let outcomes = join_all(
            params
                .urls
                .iter()
                .map(|url| self.audit_one(url, params.save_report, &progress)),
        )
        .await;
        progress.finish_and_clear();

        let mut summary = RunSummary::default();
        let mut reports: Vec<ReportEntry> = Vec::new();
        let mut badges = Vec::new();

        for outcome in outcomes {
            let processed = match outcome {
                UrlOutcome::Processed(processed) => processed,
                UrlOutcome::Failed(failure) => {
                    summary.failures.push(failure);
                    continue;
                }
            };

            let url = &processed.report.url;
            for (label, rendered) in render_badges(
                url,
                &processed.metrics,
                params.style,
                params.mode,
                &params.output,
                self.badge_renderer.as_ref(),
            ) {
                match rendered {
                    Ok(badge) => badges.push(Some(badge)),
                    Err(error) => {
                        warn!("Skipping badge '{label}' for {url}: {error}");
                        summary.failures.push(Failure::Badge {
                            url: url.clone(),
                            label,
                            error,
                        });
                        badges.push(None);
                    }
                }
            }
            reports.push(processed.report);
        }

        let (report_writes, badge_writes) = futures::join!(
            self.writer.write_reports(&reports, &params.output),
            self.writer.write_badges(&badges),
        );
        summary.absorb_writes(report_writes);
        summary.absorb_writes(badge_writes);

        summary
    }

    async fn audit_one(&self, url: &Url, save_report: bool, progress: &ProgressBar) -> UrlOutcome {
        debug!("Starting audit of {url}");
        let result = self.auditor.audit(url).await;
        progress.inc(1);
        progress.set_message(url.to_string());

        let raw = match result {
            Ok(raw) => raw,
            Err(error) => {
                return UrlOutcome::Failed(Failure::Audit {
                    url: url.clone(),
                    error,
                });
            }
        };

        match process_result(&raw, url, save_report, self.report_renderer.as_ref()) {
            Ok(processed) => {
                debug!(
                    "Scores for {url}: {}",
                    serde_json::to_string(&processed.metrics).unwrap_or_default()
                );
                UrlOutcome::Processed(processed)
            }
            Err(error) => UrlOutcome::Failed(Failure::Extract {
                url: url.clone(),
                error,
            }),
        }
    }
}
