//! Logging configuration using tracing
//!
//! The terminal belongs to the TUI, so logs only ever go to a file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "ghlookup.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/ghlookup/logs/`
/// Log level is controlled by `GHLOOKUP_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GHLOOKUP_LOG=debug ghlookup octocat
/// GHLOOKUP_LOG=ghlookup_client=trace ghlookup
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via GHLOOKUP_LOG
    let env_filter = EnvFilter::try_from_env("GHLOOKUP_LOG").unwrap_or_else(|_| {
        EnvFilter::new("ghlookup=info,ghlookup_app=info,ghlookup_client=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("ghlookup starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Directory holding the daily log files (`ghlookup.log.YYYY-MM-DD`)
pub fn log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("ghlookup").join("logs"))
}
