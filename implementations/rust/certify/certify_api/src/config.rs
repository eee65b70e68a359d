//! Configuration of the certificate API access, read from the environment.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::env::{get_env, FromString};
use crate::{ApiError, Result};

/// Environment variable holding the base address of the certificate API
pub const API_BASE_URL_ENV: &str = "CERTIFY_API_BASE_URL";

/// Address used when [`API_BASE_URL_ENV`] is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// An absolute `http` or `https` URL the API paths can be appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    pub fn into_url(self) -> Url {
        self.0
    }
}

impl FromStr for ApiBaseUrl {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| ApiError::InvalidBaseUrl {
            url: s.to_string(),
            reason: reason.to_string(),
        };
        let url = Url::parse(s.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("only http and https are supported"));
        }
        if url.cannot_be_a_base() || url.host().is_none() {
            return Err(invalid("a host is required"));
        }
        Ok(ApiBaseUrl(url))
    }
}

impl FromString for ApiBaseUrl {
    fn from_string(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Runtime configuration of the certify tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertifyConfig {
    api_base_url: ApiBaseUrl,
}

impl CertifyConfig {
    /// Load the configuration from the environment, falling back to the defaults
    pub fn load() -> Result<Self> {
        Self::from_base_url(get_env::<ApiBaseUrl>(API_BASE_URL_ENV)?)
    }

    pub fn from_base_url(api_base_url: Option<ApiBaseUrl>) -> Result<Self> {
        let api_base_url = match api_base_url {
            Some(url) => url,
            None => DEFAULT_API_BASE_URL.parse()?,
        };
        debug!(%api_base_url, "Loaded configuration");
        Ok(Self { api_base_url })
    }

    pub fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }
}
