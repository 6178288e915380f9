use nwatch_domain::config::ApiConfig;
use nwatch_registration::{
    HttpUserGateway, RegistrationError, SubmissionResult, UserGateway, UserPayload,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> HttpUserGateway {
    let config = ApiConfig { base_url: server.uri(), timeout_ms: Some(5_000) };
    HttpUserGateway::new(&config).unwrap()
}

fn payload() -> UserPayload {
    UserPayload::new("Jo", "Li", "jo@example.com", true)
}

#[tokio::test]
async fn test_created_response_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "fullName": "Jo Li",
            "email": "jo@example.com",
            "notificationEnabled": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12,
            "fullName": "Jo Li",
            "email": "jo@example.com",
            "notificationEnabled": true,
            "createdAt": "2026-10-19T10:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registered = gateway_for(&server).register(&payload()).await.unwrap();

    assert_eq!(registered.status, 201);
    assert_eq!(registered.user.map(|user| user.id), Some(12));
}

#[tokio::test]
async fn test_success_without_body_is_still_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let registered = gateway_for(&server).register(&payload()).await.unwrap();

    assert_eq!(registered.status, 200);
    assert!(registered.user.is_none());
}

#[tokio::test]
async fn test_conflict_is_classified_as_duplicate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "error": "exists" })))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway_for(&server).register(&payload()).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Rejected { status: 409, .. }));
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.classify(), SubmissionResult::DuplicateConflict);
}

#[tokio::test]
async fn test_other_statuses_are_generic_failures() {
    for status in [400_u16, 404, 500, 503] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;

        let err = gateway_for(&server).register(&payload()).await.unwrap_err();

        assert_eq!(err.status(), Some(status));
        assert_eq!(err.classify(), SubmissionResult::GenericFailure, "status {status}");
    }
}

#[tokio::test]
async fn test_unreachable_service_is_generic_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let gateway = HttpUserGateway::new(&ApiConfig { base_url, timeout_ms: Some(2_000) }).unwrap();
    let err = gateway.register(&payload()).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Transport { context: Some(_), .. }));
    assert_eq!(err.classify(), SubmissionResult::GenericFailure);
}

#[test]
fn test_endpoint_from_config() {
    let gateway = HttpUserGateway::new(&ApiConfig::default()).unwrap();
    assert_eq!(gateway.endpoint().as_str(), "http://localhost:8081/api/users");
}
