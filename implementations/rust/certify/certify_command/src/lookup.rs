use std::io::stdin;

use certify_api::certificate::{
    CertificateApi, CertificateApiClient, CertificateRecord, CredentialId,
};
use certify_api::ApiError;
use clap::Args;
use dialoguer::Input;
use indicatif::ProgressBar;

use crate::{CommandGlobalOpts, Result};

/// The credential ID of the certificate to look up
#[derive(Clone, Debug, Args)]
pub struct CredentialIdArg {
    /// Credential ID of the certificate. Use `-` to read it from stdin.
    /// When omitted on a terminal, it is asked for.
    #[arg(value_name = "CREDENTIAL_ID")]
    credential_id: Option<String>,
}

impl CredentialIdArg {
    pub fn resolve(&self, opts: &CommandGlobalOpts) -> Result<CredentialId> {
        let credential_id = match self.credential_id.as_deref() {
            Some("-") => {
                let mut buffer = String::new();
                stdin().read_line(&mut buffer)?;
                CredentialId::new(buffer)?
            }
            Some(credential_id) => CredentialId::new(credential_id)?,
            None if opts.terminal.can_ask_for_user_input() => {
                let credential_id: String = Input::new()
                    .with_prompt("Enter Credential ID")
                    .interact_text()?;
                CredentialId::new(credential_id)?
            }
            None => return Err(ApiError::EmptyCredentialId.into()),
        };
        debug!(%credential_id, "Looking up certificate");
        Ok(credential_id)
    }
}

/// Fetch a certificate from the configured API, showing a spinner meanwhile.
pub async fn fetch_certificate(
    opts: &CommandGlobalOpts,
    credential_id: &CredentialId,
) -> Result<CertificateRecord> {
    let config = opts.config()?;
    let client = CertificateApiClient::new(config.api_base_url().clone())?;
    fetch_with(&client, opts.terminal.progress_spinner(), credential_id).await
}

async fn fetch_with<A: CertificateApi + Sync>(
    api: &A,
    spinner: Option<ProgressBar>,
    credential_id: &CredentialId,
) -> Result<CertificateRecord> {
    if let Some(spinner) = spinner.as_ref() {
        spinner.set_message("Loading...");
    }
    let result = api.get_certificate(credential_id).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::exitcode;
    use async_trait::async_trait;
    use certify_api::certificate::FetchError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Knows a single certificate and counts the lookups
    struct OneCertificate {
        record: CertificateRecord,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl CertificateApi for OneCertificate {
        async fn get_certificate(
            &self,
            credential_id: &CredentialId,
        ) -> std::result::Result<CertificateRecord, FetchError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if credential_id.as_str() == self.record.credential_id {
                Ok(self.record.clone())
            } else {
                Err(FetchError::NotFound {
                    credential_id: credential_id.to_string(),
                    status: 404,
                })
            }
        }
    }

    fn api() -> OneCertificate {
        let record = serde_json::from_value(serde_json::json!({
            "credentialId": "SLIIT-001",
            "name": "Ishara Gunawardena",
            "course": "Git Basics",
            "dateIssued": "2024-02-01",
            "issuer": "SLIIT Mozilla Campus Club"
        }))
        .unwrap();
        OneCertificate {
            record,
            lookups: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn a_single_request_per_lookup() {
        let api = api();
        let id = CredentialId::new(" SLIIT-001 ").unwrap();
        let record = fetch_with(&api, None, &id).await.unwrap();
        assert_eq!(record.name, "Ishara Gunawardena");
        assert_eq!(api.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn an_unknown_certificate_exits_with_noinput() {
        let api = api();
        let id = CredentialId::new("SLIIT-404").unwrap();
        let error = fetch_with(&api, Some(ProgressBar::hidden()), &id)
            .await
            .unwrap_err();
        assert_eq!(error.code(), exitcode::NOINPUT);
        assert_eq!(error.to_string(), "Certificate not found");
    }
}
