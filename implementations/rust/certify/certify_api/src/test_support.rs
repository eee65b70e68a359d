use crate::certificate::CertificateRecord;

pub(crate) const RECORD_JSON: &str = r#"{
    "credentialId": "SLIIT-MOZ-2024-0042",
    "name": "Nimali Fernando",
    "course": "Open Source Hacktoberfest Workshop",
    "dateIssued": "2024-10-05T09:30:00.000Z",
    "issuer": "SLIIT Mozilla Campus Club",
    "_id": "66ff1a2b3c4d5e6f70819203"
}"#;

pub(crate) fn record() -> CertificateRecord {
    serde_json::from_str(RECORD_JSON).unwrap()
}
