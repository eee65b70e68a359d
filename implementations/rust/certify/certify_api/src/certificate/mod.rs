//! The certificate record and the client fetching it from the certificate API.

mod api_client;
mod credential_id;
mod error;
mod record;

pub use api_client::{CertificateApi, CertificateApiClient};
pub use credential_id::CredentialId;
pub use error::{FetchError, FetchErrorKind};
pub use record::{CertificateRecord, IssueDate, Signatory};
