//! Logging setup of the certify tools.

use std::io::stderr;

pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::env::FromString;
use crate::{ApiError, Result};

mod env_variables;
mod logging_configuration;

pub use logging_configuration::{LevelVar, LoggingConfiguration, CERTIFY_CRATES};

pub struct Logging;

impl Logging {
    /// Install the global subscriber described by `configuration`.
    ///
    /// Returns `None` when logging is disabled. The returned guard must be kept
    /// alive until the program ends so that buffered lines get written.
    pub fn setup(configuration: &LoggingConfiguration) -> Result<Option<LoggingGuard>> {
        if !configuration.is_enabled() {
            return Ok(None);
        }

        let subscriber = tracing_subscriber::registry().with(configuration.env_filter());

        let (appender, guard) = match configuration.log_dir() {
            // Without a log directory, log to stderr
            None => {
                let (n, guard) = tracing_appender::non_blocking(stderr());
                let appender = layer()
                    .with_ansi(configuration.is_colored())
                    .with_writer(n);
                (appender, guard)
            }
            Some(log_dir) => {
                let r = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .max_log_files(configuration.max_files() as usize)
                    .filename_prefix("certify")
                    .filename_suffix("log")
                    .build(log_dir)
                    .map_err(|e| {
                        ApiError::message(format!("failed to create the log file appender: {e}"))
                    })?;
                let (n, guard) = tracing_appender::non_blocking(r);
                let appender = layer().with_ansi(false).with_writer(n);
                (appender, guard)
            }
        };
        let res = match configuration.format() {
            LogFormat::Pretty => subscriber.with(appender.pretty()).try_init(),
            LogFormat::Json => subscriber.with(appender.json()).try_init(),
            LogFormat::Default => subscriber.with(appender).try_init(),
        };
        res.map_err(|e| ApiError::message(format!("failed to initialize logging: {e}")))?;

        debug!(%configuration, "logging initialized");
        Ok(Some(LoggingGuard {
            _worker_guard: guard,
        }))
    }
}

/// Flushes pending log lines when dropped
#[derive(Debug)]
pub struct LoggingGuard {
    _worker_guard: WorkerGuard,
}

/// Options for selecting the log format used in files or in the console
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Default,
    Pretty,
    Json,
}

impl FromString for LogFormat {
    fn from_string(s: &str) -> Result<Self> {
        match s {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Ok(LogFormat::Default),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LogFormat::Default => write!(f, "default"),
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}
