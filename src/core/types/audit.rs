use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{AuditError, ExtractError};

/// Categories every well-formed audit result must carry
pub const REQUIRED_CATEGORIES: [&str; 5] =
    ["performance", "accessibility", "best-practices", "seo", "pwa"];

/// Raw audit document as emitted by the audit engine.
///
/// The document is kept whole so that report rendering sees everything the
/// engine produced; only `categories` is interpreted by this crate. Key order
/// is preserved, which keeps the engine's category order intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAuditResult(Value);

/// A single category entry of the audit document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: String,
    pub score: Option<f64>,
    #[serde(default, rename = "auditRefs")]
    pub audit_refs: Vec<AuditRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuditRef {
    pub id: String,
    #[serde(default)]
    pub weight: f64,
}

impl RawAuditResult {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn from_json(json: &str) -> Result<Self, AuditError> {
        Ok(Self(serde_json::from_str(json)?))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The URL the engine ended up auditing, if the document records one
    pub fn final_url(&self) -> Option<&str> {
        self.0
            .get("finalDisplayedUrl")
            .or_else(|| self.0.get("finalUrl"))
            .or_else(|| self.0.get("requestedUrl"))
            .and_then(Value::as_str)
    }

    pub fn fetch_time(&self) -> Option<&str> {
        self.0.get("fetchTime").and_then(Value::as_str)
    }

    pub fn audits(&self) -> Option<&Map<String, Value>> {
        self.0.get("audits").and_then(Value::as_object)
    }

    /// Categories in the order the engine emitted them, keyed by their name
    pub fn categories(&self) -> Result<Vec<(String, Category)>, ExtractError> {
        let categories = self
            .0
            .get("categories")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                ExtractError::MalformedDocument("no 'categories' object".to_string())
            })?;

        categories
            .iter()
            .map(|(name, entry)| {
                Category::deserialize(entry)
                    .map(|category| (name.clone(), category))
                    .map_err(|e| {
                        ExtractError::MalformedDocument(format!("category '{name}': {e}"))
                    })
            })
            .collect()
    }
}

/// A single named score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub name: String,
    pub score: u8,
}

/// Metric name to score in 0..=100, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsMap {
    metrics: Vec<Metric>,
}

impl MetricsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a metric, replacing the score of an existing one in place
    pub fn insert(&mut self, name: impl Into<String>, score: u8) {
        let name = name.into();
        match self.metrics.iter_mut().find(|m| m.name == name) {
            Some(existing) => existing.score = score,
            None => self.metrics.push(Metric { name, score }),
        }
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Arithmetic mean of all scores, rounded half away from zero
    pub fn mean(&self) -> u8 {
        if self.metrics.is_empty() {
            return 0;
        }
        let sum: u32 = self.metrics.iter().map(|m| u32::from(m.score)).sum();
        (f64::from(sum) / self.metrics.len() as f64).round() as u8
    }
}

impl<N: Into<String>> FromIterator<(N, u8)> for MetricsMap {
    fn from_iter<I: IntoIterator<Item = (N, u8)>>(iter: I) -> Self {
        let mut map = MetricsMap::new();
        for (name, score) in iter {
            map.insert(name, score);
        }
        map
    }
}

impl Serialize for MetricsMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.metrics.iter().map(|m| (&m.name, m.score)))
    }
}
