use std::path::Path;

use url::Url;

use crate::core::engine::extract::METRIC_NAMESPACE;
use crate::core::engine::traits::BadgeRenderer;
use crate::types::{BadgeError, BadgeFile, BadgeMode, BadgeSpec, BadgeStyle, MetricsMap};
use crate::utils::badge_path;

/// Badge requests for one URL's metrics, in metrics order
pub fn badge_specs(metrics: &MetricsMap, style: BadgeStyle, mode: BadgeMode) -> Vec<BadgeSpec> {
    match mode {
        BadgeMode::Multi => metrics
            .iter()
            .map(|metric| BadgeSpec {
                label: metric.name.clone(),
                value: metric.score,
                style,
            })
            .collect(),
        BadgeMode::Single => vec![BadgeSpec {
            label: METRIC_NAMESPACE.to_string(),
            value: metrics.mean(),
            style,
        }],
    }
}

/// Render every badge of one URL and attach its destination path.
///
/// A badge the renderer rejects is returned as an error in its slot; the
/// others are unaffected.
pub fn render_badges(
    url: &Url,
    metrics: &MetricsMap,
    style: BadgeStyle,
    mode: BadgeMode,
    output: &Path,
    renderer: &dyn BadgeRenderer,
) -> Vec<(String, Result<BadgeFile, BadgeError>)> {
    badge_specs(metrics, style, mode)
        .into_iter()
        .map(|spec| {
            let rendered = renderer.render(&spec).map(|contents| BadgeFile {
                path: badge_path(output, url, &spec.label),
                contents,
            });
            (spec.label, rendered)
        })
        .collect()
}
