#![allow(dead_code)]

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use lighthouse_badges::types::{AuditError, BadgeMode, BadgeStyle, RawAuditResult};
use lighthouse_badges::types::config::RunParameters;
use lighthouse_badges::{ArtifactSink, Auditor};
use url::Url;

pub const FIXTURE: &str = include_str!("../fixtures/emanuelemazzotta.com.json");

pub fn fixture() -> RawAuditResult {
    RawAuditResult::from_json(FIXTURE).expect("fixture is valid JSON")
}

pub fn url(s: &str) -> Url {
    Url::parse(s).expect("valid test URL")
}

pub fn params(urls: &[&str], mode: BadgeMode, save_report: bool, output: &Path) -> RunParameters {
    RunParameters {
        urls: urls.iter().map(|u| url(u)).collect(),
        mode,
        save_report,
        style: BadgeStyle::Flat,
        output: output.to_path_buf(),
        progress: false,
    }
}

/// Returns the fixture for every URL except the ones listed as failing
pub struct FixtureAuditor {
    pub failing: HashSet<String>,
    pub document: RawAuditResult,
}

impl FixtureAuditor {
    pub fn new() -> Self {
        Self {
            failing: HashSet::new(),
            document: fixture(),
        }
    }

    pub fn failing_for(urls: &[&str]) -> Self {
        Self {
            failing: urls.iter().map(|u| url(u).to_string()).collect(),
            document: fixture(),
        }
    }

    pub fn with_document(document: RawAuditResult) -> Self {
        Self {
            failing: HashSet::new(),
            document,
        }
    }
}

#[async_trait]
impl Auditor for FixtureAuditor {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn audit(&self, url: &Url) -> Result<RawAuditResult, AuditError> {
        if self.failing.contains(url.as_str()) {
            return Err(AuditError::Other(format!("connection refused: {url}")));
        }
        Ok(self.document.clone())
    }
}

/// Records writes in memory instead of touching the filesystem
#[derive(Default)]
pub struct RecordingSink {
    pub writes: Mutex<Vec<(PathBuf, Vec<u8>)>>,
    pub failing: HashSet<PathBuf>,
}

impl RecordingSink {
    pub fn failing_for(paths: &[PathBuf]) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            failing: paths.iter().cloned().collect(),
        }
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .writes
            .lock()
            .unwrap()
            .iter()
            .map(|(p, _)| p.clone())
            .collect();
        paths.sort();
        paths
    }

    pub fn count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

#[async_trait]
impl ArtifactSink for RecordingSink {
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.failing.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), contents.to_vec()));
        Ok(())
    }
}
