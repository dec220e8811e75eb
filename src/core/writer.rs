use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::debug;
use tempfile::NamedTempFile;

use crate::core::engine::traits::ArtifactSink;
use crate::types::{
    BadgeFile, ContentHash, ReportEntry, WriteFailure, WriteSummary, WrittenArtifact,
};
use crate::utils::report_path;

/// Filesystem sink writing through a uniquely named temporary sibling and a rename
#[derive(Debug, Clone, Default)]
pub struct FsSink;

impl FsSink {
    fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(contents)?;
        temp.flush()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[async_trait]
impl ArtifactSink for FsSink {
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let path = path.to_path_buf();
        let contents = contents.to_vec();
        tokio::task::spawn_blocking(move || Self::write_atomic(&path, &contents))
            .await
            .map_err(io::Error::other)?
    }
}

/// Persists reports and badges, attempting every write before reporting
#[derive(Clone)]
pub struct ArtifactWriter {
    sink: Arc<dyn ArtifactSink>,
}

impl ArtifactWriter {
    pub fn new(sink: Arc<dyn ArtifactSink>) -> Self {
        Self { sink }
    }

    /// Write every rendered report under `output`; skipped reports are ignored
    pub async fn write_reports(&self, entries: &[ReportEntry], output: &Path) -> WriteSummary {
        let jobs = entries
            .iter()
            .filter_map(|entry| {
                entry
                    .report
                    .html()
                    .map(|html| (report_path(output, &entry.url), html.as_bytes()))
            })
            .collect();
        self.write_all(jobs).await
    }

    /// Write every present badge; `None` slots are ignored
    pub async fn write_badges(&self, badges: &[Option<BadgeFile>]) -> WriteSummary {
        let jobs = badges
            .iter()
            .flatten()
            .map(|badge| (badge.path.clone(), badge.contents.as_bytes()))
            .collect();
        self.write_all(jobs).await
    }

    async fn write_all(&self, jobs: Vec<(PathBuf, &[u8])>) -> WriteSummary {
        let results = join_all(jobs.into_iter().map(|(path, contents)| async move {
            let result = self.sink.write(&path, contents).await;
            (path, contents, result)
        }))
        .await;

        let mut summary = WriteSummary::default();
        for (path, contents, result) in results {
            match result {
                Ok(()) => {
                    let sha256 = ContentHash::digest(contents);
                    debug!("Wrote {} ({})", path.display(), sha256.short());
                    summary.written.push(WrittenArtifact { path, sha256 });
                }
                Err(source) => summary.failures.push(WriteFailure { path, source }),
            }
        }
        summary
    }
}
