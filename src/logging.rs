//! Tracing subscriber setup.
//!
//! The interactive UI owns the terminal, so it only logs to a file. The
//! catalog prints to stdout and logs to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides `logging.level`.
pub const LOG_ENV_VAR: &str = "LIKE_COUNTER_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Log to `logging.file` only; stay silent without one.
    FileOnly,
    /// Log to `logging.file` if set, stderr otherwise.
    FileOrStderr,
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Returns `Ok(false)` when nothing was
/// installed, either because there is nowhere to log to or because a
/// global subscriber is already set.
pub fn init(config: &LoggingConfig, target: LogTarget) -> io::Result<bool> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    match (&config.file, target) {
        (Some(path), _) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok())
        }
        (None, LogTarget::FileOrStderr) => {
            Ok(builder.with_writer(io::stderr).try_init().is_ok())
        }
        (None, LogTarget::FileOnly) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_only_without_file_installs_nothing() {
        let installed = init(&LoggingConfig::default(), LogTarget::FileOnly).unwrap();
        assert!(!installed);
    }

    #[test]
    fn creates_log_file_and_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("like.log");
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(path.clone()),
        };
        init(&config, LogTarget::FileOnly).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn second_init_reports_nothing_installed() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some(dir.path().join("twice.log")),
        };
        // Whichever call wins, the global subscriber is taken afterwards.
        init(&config, LogTarget::FileOnly).unwrap();
        assert!(!init(&config, LogTarget::FileOnly).unwrap());
        assert!(!init(&LoggingConfig::default(), LogTarget::FileOrStderr).unwrap());
    }
}
