use std::error::Error as _;
use std::fmt::{Debug, Display, Formatter};

use certify_api::certificate::{FetchError, FetchErrorKind};
use certify_api::ApiError;
use miette::Diagnostic;

use crate::util::exitcode::{self, ExitCode};

pub type Result<T> = std::result::Result<T, Error>;

/// An error reported to the user, with the exit code of the process
#[derive(Debug)]
pub struct Error {
    code: ExitCode,
    description: String,
    cause: Option<String>,
    help: Option<String>,
}

impl Error {
    pub fn new(code: ExitCode, description: impl Display) -> Self {
        assert_ne!(code, exitcode::OK, "Error's exit code can't be OK");
        Self {
            code,
            description: description.to_string(),
            cause: None,
            help: None,
        }
    }

    pub fn code(&self) -> ExitCode {
        self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    fn with_cause(self, cause: Option<String>) -> Self {
        Self { cause, ..self }
    }

    fn with_help(self, help: Option<String>) -> Self {
        Self { help, ..self }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(cause) = &self.cause {
            write!(f, "{}. Caused by: {}", self.description, cause)?;
        } else {
            write!(f, "{}", self.description)?;
        }
        if let Some(help) = &self.help {
            write!(f, "\n{help}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// Only the user facing message is kept; the cause of a failed lookup is logged
/// by the API client.
impl From<FetchError> for Error {
    fn from(e: FetchError) -> Self {
        let code = match e.kind() {
            FetchErrorKind::NotFound => exitcode::NOINPUT,
            FetchErrorKind::Generic => exitcode::UNAVAILABLE,
        };
        Error::new(code, e)
    }
}

impl From<ApiError> for Error {
    fn from(e: ApiError) -> Self {
        if let ApiError::Fetch(fetch) = e {
            return fetch.into();
        }
        let code = match &e {
            ApiError::Fetch(_) => exitcode::UNAVAILABLE,
            ApiError::EmptyCredentialId | ApiError::InvalidCredentialId { .. } => {
                exitcode::USAGE
            }
            ApiError::InvalidBaseUrl { .. } | ApiError::Env { .. } => exitcode::CONFIG,
            ApiError::Io(_) => exitcode::IOERR,
            ApiError::SerdeJson(_) => exitcode::DATAERR,
            ApiError::Message(_) => exitcode::SOFTWARE,
        };
        let cause = e.source().map(|s| s.to_string());
        let help = e.help().map(|h| h.to_string());
        Error::new(code, &e).with_cause(cause).with_help(help)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::new(exitcode::IOERR, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::new(exitcode::DATAERR, e)
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::new(exitcode::IOERR, e)
    }
}
