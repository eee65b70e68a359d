use core::fmt;
use miette::Diagnostic;

use crate::certificate::FetchError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Potential API errors
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ApiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fetch(#[from] FetchError),

    #[error("a credential ID is required")]
    #[diagnostic(
        code(certify::credential_id::empty),
        help("pass the credential ID as an argument, or `-` to read it from stdin")
    )]
    EmptyCredentialId,

    #[error("`{id}` is not a valid credential ID")]
    #[diagnostic(code(certify::credential_id::invalid))]
    InvalidCredentialId { id: String },

    #[error("invalid API base URL `{url}`: {reason}")]
    #[diagnostic(code(certify::config::base_url))]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid value for the environment variable {var}")]
    #[diagnostic(code(certify::config::env))]
    Env {
        var: String,
        #[source]
        source: Box<ApiError>,
    },

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl ApiError {
    pub fn message<T: fmt::Display>(m: T) -> ApiError {
        ApiError::Message(m.to_string())
    }
}
