use reqwest::Method;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::PortalConfig;
use shared_gateway::BackendClient;

fn client_for(api_base_url: String) -> BackendClient {
    let config = PortalConfig {
        api_base_url,
        login_path: "/login/".to_string(),
    };
    BackendClient::new(&config).expect("client should build")
}

#[tokio::test]
async fn test_cookies_persist_across_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-login/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", "sessionid=abc123; Path=/")
                .set_body_json(json!({"is_authenticated": true})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/doctors/"))
        .and(header("Cookie", "sessionid=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());

    let _: Value = client
        .request(Method::GET, "/api/check-login/", None)
        .await
        .expect("probe should succeed");
    let _: Value = client
        .request(Method::GET, "/api/doctors/", None)
        .await
        .expect("directory fetch should carry the session cookie");
}

#[tokio::test]
async fn test_csrf_token_read_from_jar() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-login/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", "csrftoken=tok-2; Path=/")
                .set_body_json(json!({"is_authenticated": true})),
        )
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    assert_eq!(client.csrf_token(), None);

    let _: Value = client
        .request(Method::GET, "/api/check-login/", None)
        .await
        .expect("probe should succeed");

    assert_eq!(client.csrf_token(), Some("tok-2".to_string()));
}

#[tokio::test]
async fn test_mutating_requests_echo_the_csrf_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-login/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", "csrftoken=tok-3; Path=/")
                .set_body_json(json!({"is_authenticated": true})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/send-message/"))
        .and(header("X-CSRFToken", "tok-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let _: Value = client
        .request(Method::GET, "/api/check-login/", None)
        .await
        .expect("probe should succeed");
    let _: Value = client
        .request(Method::POST, "/send-message/", Some(json!({"subject": "s", "body": "b"})))
        .await
        .expect("post should succeed");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/doctors/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let result: Result<Value, _> = client.request(Method::GET, "/api/doctors/", None).await;

    let err = result.expect_err("404 should be an error");
    assert!(err.to_string().contains("Resource not found"));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/doctors/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(format!("{}/", server.uri()));
    let _: Value = client
        .request(Method::GET, "/api/doctors/", None)
        .await
        .expect("fetch should succeed");
}
