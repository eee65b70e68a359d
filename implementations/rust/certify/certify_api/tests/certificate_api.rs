use std::net::TcpListener;
use std::str::FromStr;
use std::sync::mpsc;
use std::thread;

use certify_api::certificate::{
    CertificateApi, CertificateApiClient, CredentialId, FetchError, FetchErrorKind,
};
use certify_api::config::ApiBaseUrl;
use tiny_http::{Header, Response, Server};

const CERTIFICATE: &str = r#"{
    "credentialId": "HACK-2024-007",
    "name": "Tharindu Perera",
    "course": "Intro to Rust",
    "dateIssued": "2024-08-20",
    "issuer": "Campus Club",
    "categoryCode": "completion",
    "issuerLeft": "Dilini Jayasuriya",
    "issuerLeftRole": "President"
}"#;

/// A certificate API answering a single request with `status` and `body`.
///
/// Returns the base URL and a channel receiving the requested path.
fn stub_api(status: u16, body: &'static str) -> (ApiBaseUrl, mpsc::Receiver<String>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let address = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Ok(request) = server.recv() {
            tx.send(request.url().to_string()).unwrap();
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(Header::from_str("Content-Type: application/json").unwrap());
            request.respond(response).unwrap();
        }
    });
    let base_url = format!("http://{address}").parse().unwrap();
    (base_url, rx)
}

fn client(base_url: ApiBaseUrl) -> CertificateApiClient {
    CertificateApiClient::new(base_url).unwrap()
}

#[tokio::test]
async fn fetches_a_certificate() {
    let (base_url, requests) = stub_api(200, CERTIFICATE);
    let credential_id = CredentialId::new("HACK-2024-007").unwrap();

    let record = client(base_url)
        .get_certificate(&credential_id)
        .await
        .unwrap();

    assert_eq!(requests.recv().unwrap(), "/api/certificate/HACK-2024-007");
    assert_eq!(record.credential_id, "HACK-2024-007");
    assert_eq!(record.name, "Tharindu Perera");
    assert_eq!(record.category_code(), Some("completion"));
    assert_eq!(record.issue_date().to_string(), "8/20/2024");
}

#[tokio::test]
async fn the_credential_id_is_percent_encoded() {
    let (base_url, requests) = stub_api(200, CERTIFICATE);
    let credential_id = CredentialId::new("club/2024 #7").unwrap();

    client(base_url)
        .get_certificate(&credential_id)
        .await
        .unwrap();

    assert_eq!(
        requests.recv().unwrap(),
        "/api/certificate/club%2F2024%20%237"
    );
}

#[tokio::test]
async fn a_missing_certificate_is_not_found() {
    let (base_url, _requests) = stub_api(404, r#"{"message":"Certificate not found"}"#);
    let credential_id = CredentialId::new("UNKNOWN").unwrap();

    let error = client(base_url)
        .get_certificate(&credential_id)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), FetchErrorKind::NotFound);
    assert_eq!(error.to_string(), "Certificate not found");
}

#[tokio::test]
async fn any_other_failure_status_is_not_found_too() {
    let (base_url, _requests) = stub_api(500, "internal error");
    let credential_id = CredentialId::new("HACK-2024-007").unwrap();

    let error = client(base_url)
        .get_certificate(&credential_id)
        .await
        .unwrap_err();

    assert!(matches!(error, FetchError::NotFound { status: 500, .. }));
}

#[tokio::test]
async fn an_unreadable_body_is_a_fetch_error() {
    let (base_url, _requests) = stub_api(200, "<html>not json</html>");
    let credential_id = CredentialId::new("HACK-2024-007").unwrap();

    let error = client(base_url)
        .get_certificate(&credential_id)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), FetchErrorKind::Generic);
    assert_eq!(error.to_string(), "Error fetching certificate");
}

#[tokio::test]
async fn an_unreachable_api_is_a_fetch_error() {
    // reserve a port, then free it so that nothing listens there
    let address = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let base_url = format!("http://{address}").parse().unwrap();
    let credential_id = CredentialId::new("HACK-2024-007").unwrap();

    let error = client(base_url)
        .get_certificate(&credential_id)
        .await
        .unwrap_err();

    assert!(matches!(error, FetchError::Transport(_)));
    assert_eq!(error.to_string(), "Error fetching certificate");
}
