mod common;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lighthouse_badges::integrations::html::HtmlReportRenderer;
use lighthouse_badges::integrations::svg::SvgBadgeRenderer;
use lighthouse_badges::types::{BadgeMode, Failure, RawAuditResult};
use lighthouse_badges::{FsSink, Pipeline};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use common::{FixtureAuditor, RecordingSink, fixture, params};

fn pipeline(auditor: FixtureAuditor, sink: Arc<RecordingSink>) -> Pipeline {
    Pipeline::new(
        Arc::new(auditor),
        Arc::new(HtmlReportRenderer::new()),
        Arc::new(SvgBadgeRenderer::new()),
        sink,
    )
}

async fn count_artifacts(urls: &[&str], mode: BadgeMode, save_report: bool) -> usize {
    let sink = Arc::new(RecordingSink::default());
    let summary = pipeline(FixtureAuditor::new(), sink.clone())
        .run(&params(urls, mode, save_report, Path::new("out")))
        .await;
    assert!(summary.is_success(), "unexpected failures: {:?}", summary.failures);
    assert_eq!(summary.artifacts.len(), sink.count());
    sink.count()
}

#[tokio::test]
async fn test_single_badge_with_report() {
    let count = count_artifacts(&["https://example.org"], BadgeMode::Single, true).await;
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_multiple_badges_with_report() {
    let count = count_artifacts(&["https://example.org"], BadgeMode::Multi, true).await;
    assert_eq!(count, 6);
}

#[tokio::test]
async fn test_single_badge_without_report() {
    let count = count_artifacts(&["https://example.org"], BadgeMode::Single, false).await;
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_multiple_badges_without_report() {
    let count = count_artifacts(&["https://example.org"], BadgeMode::Multi, false).await;
    assert_eq!(count, 5);
}

#[tokio::test]
async fn test_artifact_count_scales_with_urls() {
    let urls = [
        "https://example.org",
        "https://example.org/blog",
        "https://example.com",
    ];
    assert_eq!(count_artifacts(&urls, BadgeMode::Multi, true).await, 3 * 5 + 3);
    assert_eq!(count_artifacts(&urls, BadgeMode::Single, false).await, 3);
}

#[tokio::test]
async fn test_badge_paths_do_not_collide() {
    let sink = Arc::new(RecordingSink::default());
    pipeline(FixtureAuditor::new(), sink.clone())
        .run(&params(
            &["https://example.org", "https://example.org/blog"],
            BadgeMode::Multi,
            true,
            Path::new("out"),
        ))
        .await;

    let mut paths = sink.paths();
    let total = paths.len();
    paths.dedup();
    assert_eq!(paths.len(), total);
    assert!(paths.contains(&PathBuf::from("out/example_org_blog.html")));
    assert!(paths.contains(&PathBuf::from(
        "out/example_org_lighthouse_best-practices.svg"
    )));
}

#[tokio::test]
async fn test_failed_audit_is_isolated() {
    let sink = Arc::new(RecordingSink::default());
    let auditor = FixtureAuditor::failing_for(&["https://example.org/broken"]);
    let summary = pipeline(auditor, sink.clone())
        .run(&params(
            &[
                "https://example.org",
                "https://example.org/broken",
                "https://example.com",
            ],
            BadgeMode::Multi,
            true,
            Path::new("out"),
        ))
        .await;

    assert_eq!(sink.count(), 2 * 6);
    assert_eq!(summary.failures.len(), 1);
    match &summary.failures[0] {
        Failure::Audit { url, .. } => assert_eq!(url.as_str(), "https://example.org/broken"),
        other => panic!("unexpected failure: {other}"),
    }
    assert!(
        !sink
            .paths()
            .iter()
            .any(|p| p.to_string_lossy().contains("broken"))
    );
}

#[tokio::test]
async fn test_missing_category_skips_artifacts_for_that_url() {
    let mut document = fixture().as_value().clone();
    document["categories"]
        .as_object_mut()
        .unwrap()
        .remove("seo");
    let auditor = FixtureAuditor::with_document(RawAuditResult::new(document));
    let sink = Arc::new(RecordingSink::default());

    let summary = pipeline(auditor, sink.clone())
        .run(&params(
            &["https://example.org"],
            BadgeMode::Multi,
            true,
            Path::new("out"),
        ))
        .await;

    assert_eq!(sink.count(), 0);
    assert_eq!(summary.failures.len(), 1);
    assert!(matches!(summary.failures[0], Failure::Extract { .. }));
    assert!(summary.failures[0].to_string().contains("seo"));
}

#[tokio::test]
async fn test_write_failure_is_reported_and_others_written() {
    let failing = PathBuf::from("out/example_org_lighthouse.svg");
    let sink = Arc::new(RecordingSink::failing_for(&[failing.clone()]));

    let summary = pipeline(FixtureAuditor::new(), sink.clone())
        .run(&params(
            &["https://example.org", "https://example.com"],
            BadgeMode::Single,
            true,
            Path::new("out"),
        ))
        .await;

    assert_eq!(sink.count(), 3);
    assert_eq!(summary.failures.len(), 1);
    match &summary.failures[0] {
        Failure::Write(write) => assert_eq!(write.path, failing),
        other => panic!("unexpected failure: {other}"),
    }
}

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            (
                entry.file_name().to_string_lossy().to_string(),
                fs::read(entry.path()).unwrap(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_repeated_runs_are_idempotent() {
    let dir = tempdir().expect("Failed to create temp directory");
    let pipeline = Pipeline::new(
        Arc::new(FixtureAuditor::new()),
        Arc::new(HtmlReportRenderer::new()),
        Arc::new(SvgBadgeRenderer::new()),
        Arc::new(FsSink),
    );
    let run_params = params(
        &["https://example.org", "https://example.org/cv"],
        BadgeMode::Multi,
        true,
        dir.path(),
    );

    let first = pipeline.run(&run_params).await;
    let after_first = snapshot(dir.path());
    let second = pipeline.run(&run_params).await;
    let after_second = snapshot(dir.path());

    assert!(first.is_success());
    assert!(second.is_success());
    assert_eq!(after_first.len(), 12);
    assert_eq!(after_first, after_second);

    let first_hashes: Vec<_> = first.artifacts.iter().map(|a| a.sha256.clone()).collect();
    let second_hashes: Vec<_> = second.artifacts.iter().map(|a| a.sha256.clone()).collect();
    assert_eq!(first_hashes, second_hashes);
}
