//! lemscope - emotion, needs and strategy markers for web pages
//!
//! Main entry point for the lemscope CLI.

mod cli;
mod cmd_analyze;
mod cmd_config;
mod cmd_slice;

use clap::Parser;
use tracing::debug;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use lemscope_config::{ConfigLoader, LoggingConfig};

use crate::cli::{Cli, Commands};

/// Initialize tracing with console and optional file output.
///
/// Console output goes to stderr so JSON on stdout stays clean. `RUST_LOG`
/// wins over the configured level.
fn init_tracing(
    logging: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = level_override.unwrap_or(&logging.level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = if logging.file {
        let log_dir = logging.log_dir();
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("lemscope")
            .filename_suffix("log")
            .max_log_files(14)
            .build(&log_dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Flushes pending lines on exit.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging, cli.log_level.as_deref())?;
    debug!("Configuration: {}", cli.config.display());

    match cli.command {
        Commands::Analyze { url, image, output } => {
            cmd_analyze::handle_analyze(&config, &url, image.as_deref(), output.as_deref()).await
        }
        Commands::Slice { image, out_dir } => {
            cmd_slice::handle_slice(&config, &image, out_dir.as_deref())
        }
        Commands::ConfigCheck => cmd_config::handle_config_check(&cli.config, &config),
    }
}
