use std::sync::Arc;

use clap::Parser;
use log::{debug, error, info};

use crate::core::cli::Args;
use crate::core::logging::init_logging;
use crate::core::pipeline::Pipeline;
use crate::core::writer::FsSink;
use crate::integrations::html::HtmlReportRenderer;
use crate::integrations::lighthouse::LighthouseCli;
use crate::integrations::svg::SvgBadgeRenderer;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides};

/// Exit code used when some URLs or artifacts failed
pub const EXIT_PARTIAL_FAILURE: i32 = 1;

/// Exit code used when the run could not start, e.g. on a configuration error
pub const EXIT_FATAL: i32 = 2;

pub async fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        output: args.output.clone(),
        style: args.style.clone(),
        single_badge: args.single_badge,
        save_report: args.save_report,
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
        lighthouse_cmd: args.lighthouse_cmd.clone(),
        chrome_flags: args.chrome_flags.clone(),
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(args.config.as_deref(), &cli_overrides)?;

    // Initialize logging after config so level/color are applied
    init_logging();
    if let Ok(effective) = toml::to_string(&config().to_effective()) {
        debug!("Effective configuration:\n{}", effective.trim_end());
    }

    // Configuration errors are fatal before any audit starts
    let mut params = config().resolve_run_parameters(&args.urls)?;
    params.progress = !args.no_progress && console::Term::stderr().is_term();
    debug!("Writing artifacts to {}", params.output.display());

    let pipeline = Pipeline::new(
        Arc::new(LighthouseCli::from_config(&config().lighthouse())),
        Arc::new(HtmlReportRenderer::new()),
        Arc::new(SvgBadgeRenderer::new()),
        Arc::new(FsSink),
    );
    let summary = pipeline.run(&params).await;

    for artifact in &summary.artifacts {
        info!("Wrote {}", artifact.path.display());
    }

    if !summary.is_success() {
        error!("{} failure(s):", summary.failures.len());
        for failure in &summary.failures {
            error!("  {failure}");
        }
        std::process::exit(EXIT_PARTIAL_FAILURE);
    }

    Ok(())
}
