//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty console) and production
//! (JSON lines, optional daily rotating files).

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

use crate::core::ResolverConfig;

/// Prefix of rolling log files: `stay-resolver.YYYY-MM-DD.log`
const LOG_FILE_PREFIX: &str = "stay-resolver";
const LOG_FILE_SUFFIX: &str = "log";

/// Initialize the logger from the resolver configuration
pub fn init_logger(config: &ResolverConfig) -> anyhow::Result<()> {
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug"); `RUST_LOG` wins when set
/// * `json_format` - JSON lines instead of the pretty console format
/// * `log_dir` - Optional directory for daily rotating log files
///
/// Fails when a global subscriber is already installed.
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix(LOG_FILE_SUFFIX)
                .build(log_dir)?;
            let writer = std::sync::Mutex::new(appender);

            let layer = if json_format {
                fmt::layer().json().with_target(true).with_writer(writer).boxed()
            } else {
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(writer)
                    .boxed()
            };
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Delete rolling log files older than `keep_days` relative to `today`
///
/// Returns the number of files removed. Files not matching the
/// `stay-resolver.YYYY-MM-DD.log` pattern are left alone.
pub fn cleanup_old_logs(log_dir: &Path, keep_days: i64, today: NaiveDate) -> anyhow::Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }

    let cutoff = today - chrono::Duration::days(keep_days);
    let mut removed = 0;

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(date_part) = name
            .strip_prefix(LOG_FILE_PREFIX)
            .and_then(|d| d.strip_prefix('.'))
            .and_then(|d| d.strip_suffix(LOG_FILE_SUFFIX))
            .and_then(|d| d.strip_suffix('.'))
            && let Ok(file_date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && file_date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            removed += 1;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_old_logs() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "stay-resolver.2024-01-01.log",
            "stay-resolver.2024-03-09.log",
            "stay-resolver.2024-03-10.log",
            "unrelated.2024-01-01.log",
        ] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let removed = cleanup_old_logs(dir.path(), 14, today).unwrap();

        assert_eq!(removed, 1);
        assert!(!dir.path().join("stay-resolver.2024-01-01.log").exists());
        assert!(dir.path().join("stay-resolver.2024-03-09.log").exists());
        assert!(dir.path().join("unrelated.2024-01-01.log").exists());
    }

    #[test]
    fn test_cleanup_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(cleanup_old_logs(&missing, 14, today).unwrap(), 0);
    }
}
