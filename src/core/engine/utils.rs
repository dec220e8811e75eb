use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Filesystem-safe stem for a URL: host, path and query with every run of
/// other characters collapsed to `_`. The scheme is dropped.
pub fn url_slug(url: &Url) -> String {
    let mut raw = String::new();
    raw.push_str(url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        raw.push_str(&format!("_{port}"));
    }
    raw.push_str(url.path());
    if let Some(query) = url.query() {
        raw.push('_');
        raw.push_str(query);
    }
    NON_ALNUM
        .replace_all(&raw, "_")
        .trim_matches('_')
        .to_lowercase()
}

/// File stem for a badge label, e.g. `lighthouse best-practices` -> `lighthouse_best-practices`
pub fn label_stem(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Destination of the badge `label` rendered for `url`
pub fn badge_path(output: &Path, url: &Url, label: &str) -> PathBuf {
    output.join(format!("{}_{}.svg", url_slug(url), label_stem(label)))
}

/// Destination of the HTML report for `url`
pub fn report_path(output: &Path, url: &Url) -> PathBuf {
    output.join(format!("{}.html", url_slug(url)))
}

/// Escape text for inclusion in HTML/SVG element content and attribute values
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
