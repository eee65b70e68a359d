use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use tracing_core::Level;
use tracing_subscriber::EnvFilter;

use crate::env::{get_env, get_env_with_default, FromString};
use crate::logs::env_variables::*;
use crate::logs::LogFormat;
use crate::{ApiError, Result};

/// Crates for which log messages are kept
pub const CERTIFY_CRATES: [&str; 2] = ["certify_api", "certify_command"];

/// List of all the configuration parameters relevant for configuring the logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfiguration {
    enabled: bool,
    level: Level,
    max_files: u64,
    format: LogFormat,
    colored: bool,
    /// Directory where log files must be created.
    /// If no directory is defined then log messages are written to stderr
    log_dir: Option<PathBuf>,
    crates: Vec<String>,
}

impl LoggingConfiguration {
    pub fn new(
        enabled: bool,
        level: Level,
        max_files: u64,
        format: LogFormat,
        colored: bool,
        log_dir: Option<PathBuf>,
    ) -> LoggingConfiguration {
        LoggingConfiguration {
            enabled,
            level,
            max_files,
            format,
            colored,
            log_dir,
            crates: CERTIFY_CRATES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Create the logging configuration of a command.
    ///
    /// Logging is enabled by the verbose flag, or else by setting `CERTIFY_LOG_LEVEL`.
    /// The quiet flag always disables it.
    pub fn from_env(verbose: u8, quiet: bool, colored: bool) -> Result<LoggingConfiguration> {
        let env_level = get_env::<LevelVar>(CERTIFY_LOG_LEVEL)?.map(|l| l.level);
        let (enabled, level) = enabled_and_level(verbose, quiet, env_level);
        Ok(LoggingConfiguration::new(
            enabled,
            level,
            get_env_with_default(CERTIFY_LOG_MAX_FILES, DEFAULT_LOG_MAX_FILES)?,
            get_env_with_default(CERTIFY_LOG_FORMAT, LogFormat::Default)?,
            colored,
            get_env::<PathBuf>(CERTIFY_LOG_DIR)?,
        ))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_files(&self) -> u64 {
        self.max_files
    }

    pub fn format(&self) -> LogFormat {
        self.format.clone()
    }

    /// Return true if color can be used for log lines
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir.clone()
    }

    /// Set a specific log directory
    pub fn set_log_directory(self, log_dir: PathBuf) -> LoggingConfiguration {
        LoggingConfiguration {
            log_dir: Some(log_dir),
            ..self
        }
    }

    /// Create an EnvFilter which keeps only the log messages
    ///
    ///  - for the configured level
    ///  - for the configured crates
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(tracing_core::LevelFilter::OFF.into())
            .parse_lossy(
                self.crates
                    .iter()
                    .map(|c| format!("{c}={}", self.level))
                    .collect::<Vec<_>>()
                    .join(","),
            )
    }
}

impl Display for LoggingConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingConfiguration")
            .field("enabled", &self.enabled)
            .field("level", &self.level.to_string())
            .field("max_files", &self.max_files)
            .field("format", &self.format.to_string())
            .field("colored", &self.colored)
            .field("log_dir", &self.log_dir)
            .field("crates", &self.crates)
            .finish()
    }
}

/// -v, -vv and -vvv select info, debug and trace. Without the flag the
/// environment level is used, if any.
fn enabled_and_level(verbose: u8, quiet: bool, env_level: Option<Level>) -> (bool, Level) {
    let level = match verbose {
        0 => env_level.unwrap_or(DEFAULT_LOG_LEVEL),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let enabled = !quiet && (verbose > 0 || env_level.is_some());
    (enabled, level)
}

/// This struct can be used to parse environment variables representing a log level
pub struct LevelVar {
    pub level: Level,
}

impl FromString for LevelVar {
    fn from_string(s: &str) -> Result<Self> {
        Ok(LevelVar {
            level: Level::from_str(s.trim())
                .map_err(|e| ApiError::message(format!("{e}: {s}")))?,
        })
    }
}
