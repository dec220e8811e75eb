//! Self-contained HTML rendering of an audit result.
//!
//! The page carries its own stylesheet, a score card per category, the audits
//! referenced by each category and the complete audit document as JSON so the
//! report can be re-processed later.

use serde_json::Value;

use crate::core::engine::extract::percentage;
use crate::core::engine::traits::ReportRenderer;
use crate::integrations::svg::score_color;
use crate::types::{AuditRef, Category, RawAuditResult};
use crate::utils::escape_xml;

const STYLESHEET: &str = r#"
:root{--fg:#212121;--muted:#757575;--bg:#fff;--line:#e0e0e0}
*{box-sizing:border-box}
body{margin:0;font:14px/1.5 -apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,Helvetica,Arial,sans-serif;color:var(--fg);background:var(--bg)}
header{padding:24px 32px;border-bottom:1px solid var(--line)}
header h1{margin:0;font-size:20px}
header .meta{color:var(--muted);font-size:12px}
main{padding:24px 32px;max-width:1100px}
.scores{display:flex;flex-wrap:wrap;gap:24px;margin-bottom:32px}
.score{text-align:center;width:120px}
.gauge{width:80px;height:80px;border-radius:50%;margin:0 auto 8px;display:flex;align-items:center;justify-content:center;font-size:24px;font-weight:600;color:#fff}
section{margin-bottom:32px}
section h2{font-size:16px;border-bottom:1px solid var(--line);padding-bottom:4px}
table{border-collapse:collapse;width:100%}
td{padding:4px 8px;border-bottom:1px solid var(--line);vertical-align:top}
td.value{width:80px;text-align:right;font-variant-numeric:tabular-nums}
.na{color:var(--muted)}
"#;

/// Escapes a JSON payload for embedding inside a `<script>` block
fn escape_json_for_script(s: &str) -> String {
    s.replace("</", "<\\/")
}

/// Default report renderer producing a single HTML document with inline styles
#[derive(Debug, Clone, Default)]
pub struct HtmlReportRenderer;

impl HtmlReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn score_card(name: &str, category: &Category) -> String {
        let title = if category.title.is_empty() {
            name
        } else {
            category.title.as_str()
        };
        match category.score {
            Some(score) => {
                let value = percentage(score);
                format!(
                    r#"<div class="score"><div class="gauge" style="background:{}">{value}</div>{}</div>"#,
                    score_color(value),
                    escape_xml(title)
                )
            }
            None => format!(
                r#"<div class="score"><div class="gauge" style="background:#9e9e9e">?</div>{}</div>"#,
                escape_xml(title)
            ),
        }
    }

    fn audit_row(audit_ref: &AuditRef, audit: Option<&Value>) -> String {
        let id = audit_ref.id.as_str();
        let title = audit
            .and_then(|a| a.get("title"))
            .and_then(Value::as_str)
            .unwrap_or(id);
        let display = audit
            .and_then(|a| a.get("displayValue"))
            .and_then(Value::as_str)
            .unwrap_or("");
        let score = match audit.and_then(|a| a.get("score")).and_then(Value::as_f64) {
            Some(score) => percentage(score).to_string(),
            None => r#"<span class="na">n/a</span>"#.to_string(),
        };
        // Audits with weight 0 are informative and do not count towards the score
        let weight = if audit_ref.weight > 0.0 {
            format!("&times;{}", audit_ref.weight)
        } else {
            r#"<span class="na">info</span>"#.to_string()
        };
        format!(
            "<tr><td>{}</td><td>{}</td><td class=\"value\">{score}</td><td class=\"value\">{weight}</td></tr>",
            escape_xml(title),
            escape_xml(display)
        )
    }

    fn category_section(&self, raw: &RawAuditResult, name: &str, category: &Category) -> String {
        let audits = raw.audits();
        let rows: String = category
            .audit_refs
            .iter()
            .map(|audit_ref| Self::audit_row(audit_ref, audits.and_then(|a| a.get(&audit_ref.id))))
            .collect();
        let title = if category.title.is_empty() {
            name
        } else {
            category.title.as_str()
        };
        format!(
            "<section id=\"{}\"><h2>{}</h2><table>{rows}</table></section>",
            escape_xml(name),
            escape_xml(title)
        )
    }
}

impl ReportRenderer for HtmlReportRenderer {
    fn render(&self, raw: &RawAuditResult) -> String {
        let url = raw.final_url().unwrap_or("unknown URL");
        let fetch_time = raw.fetch_time().unwrap_or("");
        let categories = raw.categories().unwrap_or_default();

        let mut html = String::with_capacity(16_384);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!(
            "<title>Lighthouse Report - {}</title>\n<style>{STYLESHEET}</style>\n</head>\n<body>\n",
            escape_xml(url)
        ));
        html.push_str(&format!(
            "<header><h1>{}</h1><div class=\"meta\">{}</div></header>\n<main>\n",
            escape_xml(url),
            escape_xml(fetch_time)
        ));

        html.push_str("<div class=\"scores\">");
        for (name, category) in &categories {
            html.push_str(&Self::score_card(name, category));
        }
        html.push_str("</div>\n");

        for (name, category) in &categories {
            html.push_str(&self.category_section(raw, name, category));
            html.push('\n');
        }

        let document = serde_json::to_string(raw.as_value()).unwrap_or_else(|_| "null".to_string());
        html.push_str("</main>\n<script type=\"application/json\" id=\"audit-result\">");
        html.push_str(&escape_json_for_script(&document));
        html.push_str("</script>\n</body>\n</html>\n");
        html
    }
}
