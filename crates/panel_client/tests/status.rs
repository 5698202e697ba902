use std::time::Duration;

use panel_client::{
    BatchStatus, ClientSettings, HttpStatusClient, StatusClient, StatusError, STATUS_PATH,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn status_payload_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "processing",
            "progress": 37.5,
            "current_file": 3,
            "total_files": 8,
            "current_filename": "bearing_outer.wav",
            "completed_files": ["motor_a.wav", "motor_b.wav"],
            "errors": ["Error processing clipped.wav: unreadable"],
        })))
        .mount(&server)
        .await;

    let client = HttpStatusClient::new(&server.uri()).expect("client");
    let status = client.fetch_status().await.expect("status ok");

    assert_eq!(
        status,
        BatchStatus {
            status: "processing".to_string(),
            progress: 37.5,
            current_file: 3,
            total_files: 8,
            current_filename: "bearing_outer.wav".to_string(),
            completed_files: vec!["motor_a.wav".to_string(), "motor_b.wav".to_string()],
            errors: vec!["Error processing clipped.wav: unreadable".to_string()],
        }
    );
}

#[tokio::test]
async fn sparse_payload_decodes_with_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .mount(&server)
        .await;

    let client = HttpStatusClient::new(&server.uri()).expect("client");
    let status = client.fetch_status().await.expect("status ok");

    assert_eq!(status.status, "pending");
    assert_eq!(status.progress, 0.0);
    assert_eq!(status.total_files, 0);
    assert!(status.completed_files.is_empty());
    assert!(status.errors.is_empty());
}

#[tokio::test]
async fn http_error_statuses_are_reported_as_such() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = HttpStatusClient::new(&server.uri()).expect("client");
    let err = client.fetch_status().await.unwrap_err();

    assert_eq!(err, StatusError::HttpStatus(404));
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = HttpStatusClient::new(&server.uri()).expect("client");
    let err = client.fetch_status().await.unwrap_err();

    assert!(matches!(err, StatusError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"status": "processing"})),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let client = HttpStatusClient::with_settings(&server.uri(), settings).expect("client");
    let err = client.fetch_status().await.unwrap_err();

    assert_eq!(err, StatusError::Timeout);
}

#[test]
fn endpoint_is_joined_onto_the_origin() {
    let client = HttpStatusClient::new("http://localhost:5000").expect("client");
    assert_eq!(client.endpoint().as_str(), "http://localhost:5000/batch_status");

    let err = HttpStatusClient::new("not a url").unwrap_err();
    assert!(matches!(err, StatusError::Endpoint(_)));
}
