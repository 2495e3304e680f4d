use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use session_cell::SessionService;
use shared_config::PortalConfig;
use shared_gateway::BackendClient;

fn service_for(api_base_url: String) -> SessionService {
    let config = PortalConfig {
        api_base_url,
        login_path: "/login/".to_string(),
    };
    let backend = BackendClient::new(&config).expect("client should build");
    SessionService::new(Arc::new(backend))
}

#[tokio::test]
async fn test_authenticated_session_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"is_authenticated": true})))
        .mount(&server)
        .await;

    assert!(service_for(server.uri()).check_login().await);
}

#[tokio::test]
async fn test_anonymous_session_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"is_authenticated": false})))
        .mount(&server)
        .await;

    assert!(!service_for(server.uri()).check_login().await);
}

#[tokio::test]
async fn test_http_failure_means_anonymous() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-login/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    assert!(!service_for(server.uri()).check_login().await);
}

#[tokio::test]
async fn test_undecodable_body_means_anonymous() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(!service_for(server.uri()).check_login().await);
}

#[tokio::test]
async fn test_connection_failure_means_anonymous() {
    assert!(
        !service_for("http://127.0.0.1:1".to_string())
            .check_login()
            .await
    );
}
