//! Tracing setup: console output plus a daily log file in `.vitalis/logs`.
//!
//! The `[logging]` section of `config.toml` sets the default filter and the
//! file retention; `RUST_LOG` overrides the filter when set.

use std::{path::Path, path::PathBuf, sync::OnceLock};

use serde::{Deserialize, Serialize};
use time::{UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Registry, filter::ParseError, fmt, prelude::*};

use crate::app_dirs::{AppDirError, AppPaths};

const LOG_FILE_PREFIX: &str = "vitalis";
const LOG_FILE_SUFFIX: &str = "log";

/// Set once the global subscriber is installed; holds the file writer's guard.
static INSTALLED: OnceLock<Option<WorkerGuard>> = OnceLock::new();

/// `[logging]` settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive, e.g. `info` or `vitalis=debug,ureq=warn`.
    pub level: String,
    /// Write a daily file under `logs/` besides the console.
    pub to_file: bool,
    /// Daily files kept before the oldest is removed.
    pub max_files: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: true,
            max_files: 7,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter {level:?}: {source}")]
    InvalidLevel { level: String, source: ParseError },
    #[error(transparent)]
    AppDir(#[from] AppDirError),
    #[error("Failed to open log file in {path}: {source}")]
    FileAppender { path: PathBuf, source: InitError },
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber. Later calls are no-ops.
///
/// Errors leave the app without logging; callers report them and continue.
pub fn init(settings: &LogSettings) -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(&settings.level)?,
    };
    let timer = build_timer();
    let stdout_layer = fmt::layer()
        .with_timer(timer.clone())
        .with_writer(std::io::stdout);

    let (file_layer, guard, log_dir) = if settings.to_file {
        let log_dir = AppPaths::resolve()?.logs_dir()?;
        let (writer, guard) =
            tracing_appender::non_blocking(file_appender(&log_dir, settings.max_files)?);
        let layer = fmt::layer()
            .with_ansi(false)
            .with_timer(timer)
            .with_writer(writer);
        (Some(layer), Some(guard), Some(log_dir))
    } else {
        (None, None, None)
    };

    let subscriber = Registry::default()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = INSTALLED.set(guard);

    match log_dir {
        Some(dir) => tracing::info!(
            level = %settings.level,
            log_dir = %dir.display(),
            max_files = settings.max_files,
            "Logging initialized"
        ),
        None => tracing::info!(level = %settings.level, "Logging initialized without log file"),
    }
    Ok(())
}

fn configured_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidLevel {
        level: level.to_string(),
        source,
    })
}

/// Daily `vitalis.<date>.log` files; the appender deletes the oldest past `max_files`.
fn file_appender(dir: &Path, max_files: usize) -> Result<RollingFileAppender, LoggingError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(max_files.max(1))
        .build(dir)
        .map_err(|source| LoggingError::FileAppender {
            path: dir.to_path_buf(),
            source,
        })
}

fn build_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn defaults_log_info_to_file() {
        let settings = LogSettings::default();
        assert_eq!(settings.level, "info");
        assert!(settings.to_file);
        assert_eq!(settings.max_files, 7);
    }

    #[test]
    fn filter_accepts_levels_and_per_target_directives() {
        assert!(configured_filter("info").is_ok());
        assert!(configured_filter("vitalis=debug,ureq=warn").is_ok());
    }

    #[test]
    fn filter_rejects_unknown_level() {
        let err = configured_filter("vitalis=loud").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel { ref level, .. } if level == "vitalis=loud"));
    }

    #[test]
    fn file_appender_writes_dated_vitalis_log() {
        let dir = tempdir().unwrap();
        let mut appender = file_appender(dir.path(), 3).unwrap();
        appender.write_all(b"Prediction request sent\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1, "files: {names:?}");
        assert!(names[0].starts_with("vitalis."));
        assert!(names[0].ends_with(".log"));
        let text = std::fs::read_to_string(dir.path().join(&names[0])).unwrap();
        assert!(text.contains("Prediction request sent"));
    }
}
