use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ApiError, Result};

/// The key a certificate is looked up by.
///
/// Surrounding whitespace is dropped and the remaining value can't be empty.
/// `.` and `..` are rejected: they can't be sent as a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialId(String);

impl CredentialId {
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(ApiError::EmptyCredentialId);
        }
        if matches!(id, "." | "..") {
            return Err(ApiError::InvalidCredentialId { id: id.to_string() });
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CredentialId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CredentialId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let id = CredentialId::new("  SLIIT-2024-001\n").unwrap();
        assert_eq!(id.as_str(), "SLIIT-2024-001");
    }

    #[test]
    fn rejects_blank_values() {
        assert!(matches!(
            CredentialId::new(""),
            Err(ApiError::EmptyCredentialId)
        ));
        assert!(matches!(
            "   \t".parse::<CredentialId>(),
            Err(ApiError::EmptyCredentialId)
        ));
    }

    #[test]
    fn rejects_dot_segments() {
        for id in [".", " .. "] {
            assert!(matches!(
                CredentialId::new(id),
                Err(ApiError::InvalidCredentialId { .. })
            ));
        }
        assert_eq!(CredentialId::new("...").unwrap().as_str(), "...");
        assert_eq!(CredentialId::new("./a").unwrap().as_str(), "./a");
    }
}
