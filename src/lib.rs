pub mod core;
pub mod integrations;

// Re-export key items for easy importing in this crate
pub use core::types;
pub use core::engine::utils;

// Re-export key items for easy importing in other crates
pub use core::engine::badges::{badge_specs, render_badges};
pub use core::engine::extract::extract_metrics;
pub use core::engine::process::{ProcessedResult, process_result};
pub use core::engine::report::materialize_report;
pub use core::engine::traits::{ArtifactSink, Auditor, BadgeRenderer, ReportRenderer};
pub use core::main_shared::run_main;
pub use core::pipeline::Pipeline;
pub use core::writer::{ArtifactWriter, FsSink};
