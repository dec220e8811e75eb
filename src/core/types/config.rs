use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::{AppError, AppResult, BadgeMode, BadgeStyle};
use crate::utils::url_slug;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct LighthouseConfig {
    pub cmd: Option<String>,
    pub chrome_flags: Option<String>,
}

impl LighthouseConfig {
    pub fn cmd(&self) -> &str {
        self.cmd.as_deref().unwrap_or("lighthouse")
    }

    pub fn chrome_flags(&self) -> &str {
        self.chrome_flags
            .as_deref()
            .unwrap_or("--headless --no-sandbox")
    }

    pub fn to_effective(&self) -> Self {
        Self {
            cmd: Some(self.cmd().to_string()),
            chrome_flags: Some(self.chrome_flags().to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    // Top-level fields
    pub output: Option<String>,
    pub style: Option<BadgeStyle>,
    pub single_badge: Option<bool>,
    pub save_report: Option<bool>,

    // Nested sections
    pub log: Option<LogConfig>,
    pub lighthouse: Option<LighthouseConfig>,
}

impl Config {
    /// Output directory; `None` means the current working directory
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn style(&self) -> BadgeStyle {
        self.style.unwrap_or_default()
    }

    pub fn single_badge(&self) -> bool {
        self.single_badge.unwrap_or(false)
    }

    pub fn save_report(&self) -> bool {
        self.save_report.unwrap_or(false)
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn lighthouse(&self) -> LighthouseConfig {
        self.lighthouse.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            output: Some(self.output().unwrap_or(".").to_string()),
            style: Some(self.style()),
            single_badge: Some(self.single_badge()),
            save_report: Some(self.save_report()),
            log: Some(self.log().to_effective()),
            lighthouse: Some(self.lighthouse().to_effective()),
        }
    }

    /// Validate the requested URLs and combine them with this configuration.
    ///
    /// Fails before any audit is attempted if no URL was given, a URL does not
    /// parse, or two URLs would write to the same artifact names.
    pub fn resolve_run_parameters(&self, urls: &[String]) -> AppResult<RunParameters> {
        if urls.is_empty() {
            return Err(AppError::Config("at least one URL is required".to_string()));
        }

        let mut parsed: Vec<Url> = Vec::with_capacity(urls.len());
        for raw in urls {
            let url = Url::parse(raw.trim())
                .map_err(|e| AppError::Config(format!("invalid URL '{raw}': {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::Config(format!(
                    "unsupported URL scheme '{}' in '{raw}'",
                    url.scheme()
                )));
            }
            if parsed.contains(&url) {
                log::warn!("Ignoring duplicate URL {url}");
                continue;
            }
            parsed.push(url);
        }

        let mut slugs: HashMap<String, &Url> = HashMap::new();
        for url in &parsed {
            let slug = url_slug(url);
            if let Some(other) = slugs.insert(slug.clone(), url) {
                return Err(AppError::Config(format!(
                    "{other} and {url} would both be written as '{slug}'"
                )));
            }
        }

        let output = match self.output() {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };

        Ok(RunParameters {
            urls: parsed,
            mode: BadgeMode::from_single_flag(self.single_badge()),
            save_report: self.save_report(),
            style: self.style(),
            output,
            progress: false,
        })
    }
}

/// Validated parameters of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct RunParameters {
    pub urls: Vec<Url>,
    pub mode: BadgeMode,
    pub save_report: bool,
    pub style: BadgeStyle,
    pub output: PathBuf,
    pub progress: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<String>,
    pub style: Option<String>,
    pub single_badge: bool, // flags can only switch on
    pub save_report: bool,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub lighthouse_cmd: Option<String>,
    pub chrome_flags: Option<String>,
}

/// Name of the config file looked up from the working directory upwards
pub const CONFIG_FILENAME: &str = "lighthouse-badges.toml";

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Resolve the global configuration: defaults, then the config file, then CLI.
///
/// `explicit` names a config file that must exist; otherwise the nearest
/// config file walking up from the working directory is used, if any.
pub fn init_with_overrides(explicit: Option<&Path>, overrides: &CliOverrides) -> AppResult<()> {
    let file_cfg = match explicit {
        Some(path) => Some(read_config_file(path)?),
        None => match find_nearest_config_file() {
            Some(path) => Some(read_config_file(&path)?),
            None => None,
        },
    };

    let cfg = build_config(file_cfg.as_ref(), overrides)?;
    let _ = CONFIG.set(cfg);
    Ok(())
}

/// Merge an optional file configuration and CLI overrides over the defaults
pub fn build_config(file: Option<&Config>, overrides: &CliOverrides) -> AppResult<Config> {
    let mut cfg = Config::default();
    if let Some(file_cfg) = file {
        apply_file_config(&mut cfg, file_cfg);
    }
    apply_cli_overrides(&mut cfg, overrides)?;
    Ok(cfg)
}

pub fn parse_config(contents: &str) -> AppResult<Config> {
    toml::from_str::<Config>(contents).map_err(|e| AppError::Config(e.to_string()))
}

fn read_config_file(path: &Path) -> AppResult<Config> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("cannot read config file {}: {e}", path.display()))
    })?;
    toml::from_str::<Config>(&contents)
        .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    // Merge top-level fields
    if file.output.is_some() {
        cfg.output = file.output.clone();
    }
    if file.style.is_some() {
        cfg.style = file.style;
    }
    if file.single_badge.is_some() {
        cfg.single_badge = file.single_badge;
    }
    if file.save_report.is_some() {
        cfg.save_report = file.save_report;
    }

    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    // Merge lighthouse section
    if let Some(file_lh) = &file.lighthouse {
        let mut lighthouse = cfg.lighthouse.clone().unwrap_or_default();
        if file_lh.cmd.as_ref().is_some_and(|c| !c.trim().is_empty()) {
            lighthouse.cmd = file_lh.cmd.clone();
        }
        if file_lh.chrome_flags.is_some() {
            lighthouse.chrome_flags = file_lh.chrome_flags.clone();
        }
        cfg.lighthouse = Some(lighthouse);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) -> AppResult<()> {
    // Top-level overrides
    if overrides.output.is_some() {
        cfg.output = overrides.output.clone();
    }
    if let Some(style) = &overrides.style {
        let parsed = BadgeStyle::from_str(style.trim()).map_err(|_| {
            AppError::Config(format!(
                "unknown badge style '{style}' (expected one of: {})",
                BadgeStyle::variants()
            ))
        })?;
        cfg.style = Some(parsed);
    }
    if overrides.single_badge {
        cfg.single_badge = Some(true);
    }
    if overrides.save_report {
        cfg.save_report = Some(true);
    }

    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        log.color = match color_str.trim().to_lowercase().as_str() {
            "on" => Some(true),
            "off" => Some(false),
            _ => {
                return Err(AppError::Config(format!(
                    "unknown log color '{color_str}' (expected one of: on, off)"
                )));
            }
        };
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    // Lighthouse overrides
    let mut lighthouse = cfg.lighthouse.clone().unwrap_or_default();
    if let Some(cmd) = &overrides.lighthouse_cmd
        && !cmd.trim().is_empty()
    {
        lighthouse.cmd = Some(cmd.clone());
    }
    if overrides.chrome_flags.is_some() {
        lighthouse.chrome_flags = overrides.chrome_flags.clone();
    }
    if overrides.lighthouse_cmd.is_some() || overrides.chrome_flags.is_some() {
        cfg.lighthouse = Some(lighthouse);
    }

    Ok(())
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
