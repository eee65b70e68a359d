///
/// LOGGING
///

/// Log level of the certify crates. Setting it enables logging without `-v`.
/// Accepted values: see [tracing_core::Level]. For example: trace, debug, info
pub(crate) const CERTIFY_LOG_LEVEL: &str = "CERTIFY_LOG_LEVEL";

/// Log format: default, pretty or json
pub(crate) const CERTIFY_LOG_FORMAT: &str = "CERTIFY_LOG_FORMAT";

/// Directory receiving daily rotated log files instead of stderr
pub(crate) const CERTIFY_LOG_DIR: &str = "CERTIFY_LOG_DIR";

/// Maximum number of rotated log files to keep
pub(crate) const CERTIFY_LOG_MAX_FILES: &str = "CERTIFY_LOG_MAX_FILES";

/// Default values
pub(crate) const DEFAULT_LOG_MAX_FILES: u64 = 7;
pub(crate) const DEFAULT_LOG_LEVEL: tracing_core::Level = tracing_core::Level::INFO;
