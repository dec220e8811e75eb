use crate::core::engine::traits::ReportRenderer;
use crate::types::{RawAuditResult, Report};

/// Render the report only when one was requested.
///
/// The document is not looked at when `save` is false, so callers that do not
/// save reports may pass `None`.
pub fn materialize_report(
    raw: Option<&RawAuditResult>,
    save: bool,
    renderer: &dyn ReportRenderer,
) -> Report {
    if !save {
        return Report::Skipped;
    }
    match raw {
        Some(raw) => Report::Rendered(renderer.render(raw)),
        None => Report::Skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoRenderer;

    impl ReportRenderer for EchoRenderer {
        fn render(&self, raw: &RawAuditResult) -> String {
            format!("<html>{}</html>", raw.as_value())
        }
    }

    #[test]
    fn test_skipped_without_document() {
        assert_eq!(
            materialize_report(None, false, &EchoRenderer),
            Report::Skipped
        );
    }

    #[test]
    fn test_skipped_ignores_invalid_document() {
        let raw = RawAuditResult::new(json!("garbage"));
        assert_eq!(
            materialize_report(Some(&raw), false, &EchoRenderer),
            Report::Skipped
        );
    }

    #[test]
    fn test_rendered_is_renderer_output() {
        let raw = RawAuditResult::new(json!({ "categories": {} }));
        let expected = EchoRenderer.render(&raw);
        assert_eq!(
            materialize_report(Some(&raw), true, &EchoRenderer),
            Report::Rendered(expected)
        );
    }
}
