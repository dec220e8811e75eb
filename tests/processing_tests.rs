mod common;

use lighthouse_badges::integrations::html::HtmlReportRenderer;
use lighthouse_badges::types::{ExtractError, MetricsMap, RawAuditResult, Report, ReportEntry};
use lighthouse_badges::{ReportRenderer, extract_metrics, materialize_report, process_result};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{fixture, url};

fn expected_metrics() -> MetricsMap {
    [
        ("lighthouse performance", 98),
        ("lighthouse accessibility", 100),
        ("lighthouse best-practices", 93),
        ("lighthouse seo", 100),
        ("lighthouse pwa", 85),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_extract_metrics_from_fixture() {
    let metrics = extract_metrics(&fixture()).expect("fixture has all categories");
    assert_eq!(metrics, expected_metrics());
    assert_eq!(metrics.len(), 5);
    assert!(metrics.iter().all(|m| m.score <= 100));
}

#[test]
fn test_process_result_without_report() {
    let url = url("https://emanuelemazzotta.com");
    let result = process_result(&fixture(), &url, false, &HtmlReportRenderer::new()).unwrap();

    assert_eq!(result.metrics, expected_metrics());
    assert_eq!(result.report, ReportEntry::new(url, Report::Skipped));
}

#[test]
fn test_process_result_with_report() {
    let url = url("https://emanuelemazzotta.com");
    let renderer = HtmlReportRenderer::new();
    let expected_html = renderer.render(&fixture());

    let result = process_result(&fixture(), &url, true, &renderer).unwrap();

    assert_eq!(result.metrics, expected_metrics());
    assert_eq!(
        result.report,
        ReportEntry::new(url, Report::Rendered(expected_html))
    );
}

#[test]
fn test_materialize_report_is_gated() {
    let renderer = HtmlReportRenderer::new();
    assert_eq!(materialize_report(None, false, &renderer), Report::Skipped);
    assert_eq!(
        materialize_report(Some(&fixture()), false, &renderer),
        Report::Skipped
    );
    let rendered = materialize_report(Some(&fixture()), true, &renderer);
    assert_eq!(rendered.html(), Some(renderer.render(&fixture()).as_str()));
}

#[test]
fn test_process_result_reports_missing_category() {
    let mut document = fixture().as_value().clone();
    document["categories"]
        .as_object_mut()
        .unwrap()
        .remove("pwa");
    let raw = RawAuditResult::new(document);

    let err = process_result(
        &raw,
        &url("https://example.org"),
        true,
        &HtmlReportRenderer::new(),
    )
    .unwrap_err();
    assert_eq!(err, ExtractError::MissingCategories(vec!["pwa".to_string()]));
}

#[test]
fn test_extra_categories_are_kept_in_order() {
    let mut document = fixture().as_value().clone();
    document["categories"]
        .as_object_mut()
        .unwrap()
        .insert("lighthouse-plugin-field".to_string(), json!({ "title": "Field", "score": 0.5 }));

    let metrics = extract_metrics(&RawAuditResult::new(document)).unwrap();
    assert_eq!(metrics.len(), 6);
    assert_eq!(
        metrics.names().last(),
        Some(&"lighthouse lighthouse-plugin-field")
    );
    assert_eq!(metrics.get("lighthouse lighthouse-plugin-field"), Some(50));
}

#[test]
fn test_extra_category_without_score_is_ignored() {
    let mut document = fixture().as_value().clone();
    document["categories"]
        .as_object_mut()
        .unwrap()
        .insert("lighthouse-plugin-field".to_string(), json!({ "title": "Field", "score": null }));

    let metrics = extract_metrics(&RawAuditResult::new(document))
        .expect("required categories are all scored");
    assert_eq!(metrics, expected_metrics());
    assert_eq!(metrics.get("lighthouse lighthouse-plugin-field"), None);
}
