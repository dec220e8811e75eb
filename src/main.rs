use lighthouse_badges::core::logging::init_logging;
use lighthouse_badges::core::main_shared::EXIT_FATAL;
use lighthouse_badges::run_main;

#[tokio::main]
async fn main() {
    if let Err(e) = run_main().await {
        // Configuration errors can happen before the logger is installed
        init_logging();
        log::error!("{e}");
        std::process::exit(EXIT_FATAL);
    }
}
