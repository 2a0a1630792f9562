//! File logging
//!
//! The terminal belongs to the TUI, or to the frame `--print` writes, so log
//! output only ever goes to a daily rolling file. A run started with
//! `--config-dir` keeps its logs next to its config and preferences; every
//! other run logs under the platform data directory.

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "FOLIO_LOG";

/// Prefix of the rolling log files; the appender adds the date
pub const LOG_FILE_PREFIX: &str = "folio.log";

/// Filter used when `FOLIO_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "folio=info,folio_app=info,folio_tui=info,warn";

/// Directory the log files go to
///
/// `config_dir` is the `--config-dir` override, if one was given.
pub fn log_dir(config_dir: Option<&Path>) -> PathBuf {
    match config_dir {
        Some(dir) => dir.join("logs"),
        None => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("logs"),
    }
}

/// Start logging into `dir`
///
/// ```bash
/// FOLIO_LOG=debug folio
/// FOLIO_LOG=folio_app=trace folio --print projects
/// ```
pub fn init(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::diagnostics(format!("log subscriber: {}", e)))?;

    tracing::info!(
        "folio {} starting, logging to {}",
        env!("CARGO_PKG_VERSION"),
        dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_dir_under_data_dir() {
        assert!(log_dir(None).ends_with("folio/logs"));
    }

    #[test]
    fn test_config_override_keeps_logs_beside_config() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(log_dir(Some(dir.path())), dir.path().join("logs"));
    }

    // The only test in this crate that installs the global subscriber
    #[test]
    fn test_init_creates_rolling_file() {
        let dir = tempfile::tempdir().unwrap();
        let logs = log_dir(Some(dir.path()));

        init(&logs).unwrap();
        tracing::warn!("written by the logging test");

        let names: Vec<String> = std::fs::read_dir(&logs)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().any(|name| name.starts_with(LOG_FILE_PREFIX)));

        // A second subscriber is refused instead of panicking
        assert!(matches!(init(&logs), Err(Error::Diagnostics { .. })));
    }
}
