use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Body text of certificates which don't carry a description
pub const DEFAULT_DESCRIPTION: &str =
    "We give this certificate because the recipient has participated in a social event that we organize.";

/// A certificate as returned by the certificate API.
///
/// Records are created by the API and only ever read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub credential_id: String,
    pub name: String,
    pub course: String,
    pub date_issued: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_left_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_right_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_right: Option<String>,
}

/// Someone signing the certificate: a name, a role and an optional signature image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signatory {
    pub name: String,
    pub role: String,
    /// Image reference usable as an SVG/HTML `href` (always a `data:` URI)
    pub signature: Option<String>,
}

impl CertificateRecord {
    pub fn issue_date(&self) -> IssueDate {
        IssueDate::parse(&self.date_issued)
    }

    /// Body text of the visual certificate
    pub fn description(&self) -> &str {
        non_blank(&self.description).unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn category_code(&self) -> Option<&str> {
        non_blank(&self.category_code)
    }

    /// The left and right issuers when the record names them, otherwise a
    /// single signatory built from `issuer`.
    pub fn signatories(&self) -> Vec<Signatory> {
        let left_signature = signature_href(&self.signature_left);
        let right_signature = signature_href(&self.signature_right);

        let mut signatories = Vec::with_capacity(2);
        if let Some(name) = non_blank(&self.issuer_left) {
            signatories.push(Signatory {
                name: name.to_string(),
                role: non_blank(&self.issuer_left_role)
                    .unwrap_or_default()
                    .to_string(),
                signature: left_signature.clone(),
            });
        }
        if let Some(name) = non_blank(&self.issuer_right) {
            signatories.push(Signatory {
                name: name.to_string(),
                role: non_blank(&self.issuer_right_role)
                    .unwrap_or_default()
                    .to_string(),
                signature: right_signature.clone(),
            });
        }
        if signatories.is_empty() {
            signatories.push(Signatory {
                name: self.issuer.clone(),
                role: "Issuer".to_string(),
                signature: left_signature.or(right_signature),
            });
        }
        signatories
    }
}

/// The issue date of a certificate, as displayed.
///
/// Dates are shown as `M/D/YYYY`. Values which are neither RFC 3339
/// timestamps nor `YYYY-MM-DD` dates are kept as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueDate {
    Date(Date),
    Unparsed(String),
}

impl IssueDate {
    pub fn parse(value: &str) -> IssueDate {
        let value = value.trim();
        if let Ok(timestamp) = OffsetDateTime::parse(value, &Rfc3339) {
            return IssueDate::Date(timestamp.date());
        }
        // a bare date, possibly followed by a time without offset
        let date_part = match value.get(10..11) {
            Some("T") | Some(" ") => value.get(..10),
            None if value.len() == 10 => Some(value),
            _ => None,
        };
        date_part
            .and_then(|d| Date::parse(d, format_description!("[year]-[month]-[day]")).ok())
            .map(IssueDate::Date)
            .unwrap_or_else(|| IssueDate::Unparsed(value.to_string()))
    }
}

impl fmt::Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueDate::Date(date) => {
                match date.format(format_description!(
                    "[month padding:none]/[day padding:none]/[year]"
                )) {
                    Ok(formatted) => f.write_str(&formatted),
                    Err(_) => write!(f, "{date}"),
                }
            }
            IssueDate::Unparsed(value) => f.write_str(value),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Signature images arrive either as `data:` URIs or as bare base64 PNG data.
fn signature_href(value: &Option<String>) -> Option<String> {
    non_blank(value).map(|v| {
        if v.starts_with("data:") {
            v.to_string()
        } else {
            format!("data:image/png;base64,{v}")
        }
    })
}
