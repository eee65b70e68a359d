use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::certificate::{CertificateRecord, CredentialId, FetchError};
use crate::config::ApiBaseUrl;
use crate::{ApiError, Result};

/// Read access to the certificate API.
#[async_trait]
pub trait CertificateApi {
    /// Fetch the certificate identified by `credential_id`.
    ///
    /// Exactly one request is sent; there are no retries and nothing is cached.
    async fn get_certificate(
        &self,
        credential_id: &CredentialId,
    ) -> std::result::Result<CertificateRecord, FetchError>;
}

/// HTTP implementation of [`CertificateApi`], sending
/// `GET {base_url}/api/certificate/{credential_id}`.
#[derive(Debug, Clone)]
pub struct CertificateApiClient {
    http_client: Client,
    base_url: Url,
}

impl CertificateApiClient {
    pub fn new(base_url: ApiBaseUrl) -> Result<Self> {
        let base_url = base_url.into_url();
        debug!(%base_url, "Creating CertificateApiClient");
        let http_client = reqwest::ClientBuilder::new()
            .user_agent(concat!("certify/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::message(format!("Failed to create http client: {e}")))?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// The credential ID is appended as a single, percent-encoded path segment.
    pub fn certificate_url(
        &self,
        credential_id: &CredentialId,
    ) -> std::result::Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                error!(base_url = %self.base_url, "The API base URL can't have a path");
                FetchError::InvalidUrl {
                    credential_id: credential_id.to_string(),
                }
            })?
            .pop_if_empty()
            .extend(["api", "certificate", credential_id.as_str()]);
        Ok(url)
    }

    async fn parse_response(
        res: reqwest::Response,
    ) -> std::result::Result<CertificateRecord, FetchError> {
        let bytes = res.bytes().await.map_err(|e| {
            error!("Failed to read the certificate API response: {e:?}");
            FetchError::Transport(e)
        })?;
        serde_json::from_slice::<CertificateRecord>(&bytes).map_err(|e| {
            let text = String::from_utf8_lossy(&bytes);
            error!("Failed to parse the certificate API response {text}\n with err {e:?}");
            FetchError::Decode(e)
        })
    }
}

#[async_trait]
impl CertificateApi for CertificateApiClient {
    async fn get_certificate(
        &self,
        credential_id: &CredentialId,
    ) -> std::result::Result<CertificateRecord, FetchError> {
        let url = self.certificate_url(credential_id)?;
        debug!(%url, "Fetching certificate");
        let res = match self.http_client.get(url).send().await {
            Ok(res) => res,
            Err(e) => {
                error!("Failed to reach the certificate API: {e:?}");
                return Err(FetchError::Transport(e));
            }
        };

        let status = res.status();
        if !status.is_success() {
            warn!(%status, %credential_id, "Certificate not found");
            return Err(FetchError::NotFound {
                credential_id: credential_id.to_string(),
                status: status.as_u16(),
            });
        }

        let record = Self::parse_response(res).await?;
        info!(%credential_id, "Certificate fetched");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CertificateApiClient {
        CertificateApiClient::new(base.parse().unwrap()).unwrap()
    }

    #[test]
    fn certificate_url_appends_the_api_path() {
        let id = CredentialId::new("SLIIT-001").unwrap();
        assert_eq!(
            client("http://localhost:8000").certificate_url(&id).unwrap().as_str(),
            "http://localhost:8000/api/certificate/SLIIT-001"
        );
        assert_eq!(
            client("https://certs.example.org/").certificate_url(&id).unwrap().as_str(),
            "https://certs.example.org/api/certificate/SLIIT-001"
        );
    }

    #[test]
    fn certificate_url_keeps_a_base_path() {
        let id = CredentialId::new("abc").unwrap();
        assert_eq!(
            client("https://example.org/certify/").certificate_url(&id).unwrap().as_str(),
            "https://example.org/certify/api/certificate/abc"
        );
    }

    #[test]
    fn credential_id_is_a_single_encoded_segment() {
        let id = CredentialId::new("a/b c?d").unwrap();
        assert_eq!(
            client("http://localhost:8000").certificate_url(&id).unwrap().as_str(),
            "http://localhost:8000/api/certificate/a%2Fb%20c%3Fd"
        );
    }

    #[test]
    fn dotted_credential_ids_keep_their_segment() {
        let client = client("http://localhost:8000");
        for (id, expected) in [
            ("...", "/api/certificate/..."),
            ("./x", "/api/certificate/.%2Fx"),
            ("v1.2", "/api/certificate/v1.2"),
        ] {
            let url = client
                .certificate_url(&CredentialId::new(id).unwrap())
                .unwrap();
            assert_eq!(url.path(), expected);
            assert_eq!(url.path_segments().unwrap().count(), 3);
        }
    }
}
