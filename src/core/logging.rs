use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Install the global logger using the resolved `[log]` configuration.
///
/// Info lines are printed bare since they are the tool's normal output;
/// everything else carries a timestamp and the level.
pub fn init_logging() {
    let log_cfg = config().log();
    let level = parse_level(log_cfg.level());
    let color = colors_enabled();

    let result = fern::Dispatch::new()
        .format(move |out, message, record| {
            if record.level() == Level::Info {
                out.finish(format_args!("{message}"));
                return;
            }
            let level = record.level().to_string();
            let level = if color {
                match record.level() {
                    Level::Error => style(level).red().bold().to_string(),
                    Level::Warn => style(level).yellow().to_string(),
                    _ => style(level).dim().to_string(),
                }
            } else {
                level
            };
            out.finish(format_args!(
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                level,
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();

    if result.is_err() {
        // A logger was already installed (e.g. by a test harness)
        log::debug!("Logger already initialized");
    }
}
