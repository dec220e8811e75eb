use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URL(s) to audit; one set of badges is generated per URL
    #[arg(long, value_name = "URL", num_args = 1.., required = true)]
    pub urls: Vec<String>,

    /// Generate a single badge per URL with the mean of all category scores
    #[arg(long)]
    pub single_badge: bool,

    /// Also save the full audit of each URL as an HTML report
    #[arg(long)]
    pub save_report: bool,

    /// Badge style: flat, flat-square, plastic, for-the-badge or social.
    /// Replaces config `style` if provided (default: flat).
    #[arg(long)]
    pub style: Option<String>,

    /// Directory to write badges and reports into.
    /// Replaces config `output` if provided (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub output: Option<String>,

    /// Configuration file to use instead of the nearest lighthouse-badges.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Command used to run Lighthouse (e.g. "npx lighthouse").
    /// Replaces config [lighthouse].cmd if provided.
    #[arg(long = "lighthouse.cmd")]
    pub lighthouse_cmd: Option<String>,

    /// Flags passed to Chrome by Lighthouse.
    /// Replaces config [lighthouse].chrome-flags if provided.
    #[arg(long = "lighthouse.chrome-flags", allow_hyphen_values = true)]
    pub chrome_flags: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level")]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color")]
    pub log_color: Option<String>,

    /// Do not show a progress bar while audits are running
    #[arg(long)]
    pub no_progress: bool,
}
