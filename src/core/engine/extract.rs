use log::warn;

use crate::types::{ExtractError, MetricsMap, REQUIRED_CATEGORIES, RawAuditResult};

/// Prefix shared by every metric name
pub const METRIC_NAMESPACE: &str = "lighthouse";

/// Metric name for a category key, e.g. `best-practices` -> `lighthouse best-practices`
pub fn metric_name(category: &str) -> String {
    let normalized = category
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{METRIC_NAMESPACE} {normalized}")
}

/// Convert a fractional score in [0, 1] into an integer percentage
pub fn percentage(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Read every category score of an audit result into a metrics map.
///
/// All required categories must be present with a score; missing ones are
/// reported together instead of being defaulted. Other categories without a
/// score are left out.
pub fn extract_metrics(raw: &RawAuditResult) -> Result<MetricsMap, ExtractError> {
    let categories = raw.categories()?;

    let missing: Vec<String> = REQUIRED_CATEGORIES
        .iter()
        .filter(|required| !categories.iter().any(|(name, _)| name == *required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ExtractError::MissingCategories(missing));
    }

    let mut metrics = MetricsMap::new();
    for (name, category) in &categories {
        let score = match category.score {
            Some(score) => score,
            None if REQUIRED_CATEGORIES.contains(&name.as_str()) => {
                return Err(ExtractError::MissingScore(name.clone()));
            }
            None => {
                warn!("Ignoring category '{name}' without a score");
                continue;
            }
        };
        metrics.insert(metric_name(name), percentage(score));
    }
    Ok(metrics)
}
