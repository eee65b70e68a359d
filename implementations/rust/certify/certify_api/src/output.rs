//! Output formats shared by everything printing certificates.

use crate::certificate::CertificateRecord;
use crate::render::CertificateDetails;
use crate::Result;

/// How the result of a command is printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json { compact: bool },
}

/// Types with a plain-text representation for terminal output
pub trait Output {
    fn item(&self) -> Result<String>;
}

impl Output for CertificateRecord {
    fn item(&self) -> Result<String> {
        Ok(CertificateDetails(self).to_string())
    }
}

impl OutputFormat {
    /// Serialize `value` as JSON, pretty printed unless `compact` is set.
    pub fn json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = match self {
            OutputFormat::Json { compact: true } => serde_json::to_string(value)?,
            _ => serde_json::to_string_pretty(value)?,
        };
        Ok(json)
    }
}
