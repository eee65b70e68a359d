use miette::Diagnostic;

/// The ways a certificate lookup can fail.
///
/// Only two messages ever reach the user: any non-success response reads as
/// "Certificate not found", everything else as "Error fetching certificate".
/// The underlying cause is kept as the error source for logging.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum FetchError {
    #[error("Certificate not found")]
    #[diagnostic(code(certify::fetch::not_found))]
    NotFound { credential_id: String, status: u16 },

    #[error("Error fetching certificate")]
    #[diagnostic(code(certify::fetch::transport))]
    Transport(#[source] reqwest::Error),

    #[error("Error fetching certificate")]
    #[diagnostic(code(certify::fetch::decode))]
    Decode(#[source] serde_json::Error),

    #[error("Error fetching certificate")]
    #[diagnostic(code(certify::fetch::url))]
    InvalidUrl { credential_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    NotFound,
    Generic,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::NotFound { .. } => FetchErrorKind::NotFound,
            FetchError::Transport(_) | FetchError::Decode(_) | FetchError::InvalidUrl { .. } => {
                FetchErrorKind::Generic
            }
        }
    }
}
