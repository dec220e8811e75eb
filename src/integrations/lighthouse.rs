//! Audit collaborator backed by the `lighthouse` command line tool.

use std::process::Stdio;

use async_trait::async_trait;
use log::debug;
use tokio::process::Command;
use url::Url;

use crate::core::engine::traits::Auditor;
use crate::types::config::LighthouseConfig;
use crate::types::{AuditError, RawAuditResult};

/// Spawns `lighthouse` once per URL and parses the JSON it prints
#[derive(Debug, Clone)]
pub struct LighthouseCli {
    /// Command to run; may contain leading words such as `npx lighthouse`
    cmd: String,
    chrome_flags: String,
}

impl LighthouseCli {
    pub fn new(cmd: impl Into<String>, chrome_flags: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            chrome_flags: chrome_flags.into(),
        }
    }

    pub fn from_config(config: &LighthouseConfig) -> Self {
        Self::new(config.cmd(), config.chrome_flags())
    }

    /// Program and arguments for auditing `url`
    pub fn command_line(&self, url: &Url) -> (String, Vec<String>) {
        let mut words = self.cmd.split_whitespace().map(str::to_string);
        let program = words.next().unwrap_or_else(|| "lighthouse".to_string());
        let mut args: Vec<String> = words.collect();
        args.push(url.to_string());
        args.push("--output=json".to_string());
        args.push("--output-path=stdout".to_string());
        args.push("--quiet".to_string());
        if !self.chrome_flags.trim().is_empty() {
            args.push(format!("--chrome-flags={}", self.chrome_flags.trim()));
        }
        (program, args)
    }
}

#[async_trait]
impl Auditor for LighthouseCli {
    fn name(&self) -> &str {
        "lighthouse"
    }

    async fn audit(&self, url: &Url) -> Result<RawAuditResult, AuditError> {
        let (program, args) = self.command_line(url);
        debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| AuditError::Spawn {
                cmd: program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AuditError::Failed {
                status: output.status.to_string(),
                stderr: if stderr.is_empty() {
                    "no error output".to_string()
                } else {
                    stderr
                },
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let raw = RawAuditResult::from_json(&stdout)?;
        if let Some(error) = raw.as_value().get("runtimeError") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("runtime error");
            return Err(AuditError::Other(format!("lighthouse reported: {message}")));
        }
        Ok(raw)
    }
}
