//! Integration tests for the HTTP transport.
//!
//! These tests run [`HttpClient`] against a local mock server and verify
//! parameter encoding, authentication headers, envelope decoding, and retry
//! behavior.

use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wish_api::clients::{HttpClient, HttpMethod, HttpRequest, RequestParams};
use wish_api::{
    AccessToken, Environment, HostUrl, HttpError, InvalidHttpRequestError, MerchantId, WishConfig,
};

/// Builds a config pointing at the mock server.
fn config_for(server: &MockServer, tries: u32, merchant_id: Option<&str>) -> WishConfig {
    let mut builder = WishConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .environment(Environment::Custom(
            HostUrl::new(format!("{}/api/v2", server.uri())).unwrap(),
        ))
        .tries(tries);
    if let Some(id) = merchant_id {
        builder = builder.merchant_id(MerchantId::new(id).unwrap());
    }
    builder.build().unwrap()
}

fn envelope(code: i64, data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({"code": code, "data": data, "message": ""})
}

// ============================================================================
// Request encoding
// ============================================================================

#[tokio::test]
async fn test_get_sends_query_params_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product"))
        .and(query_param("id", "p1"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(0, serde_json::json!({"Product": {"id": "p1"}}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 1, None));
    let request = HttpRequest::builder(HttpMethod::Get, "product")
        .param("id", "p1")
        .build()
        .unwrap();

    let envelope = client.request(request).await.unwrap();

    assert_eq!(envelope.code, 0);
    assert_eq!(envelope.records().len(), 1);
}

#[tokio::test]
async fn test_post_sends_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/variant/update-inventory"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("sku=MUG-1"))
        .and(body_string_contains("inventory=12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(0, serde_json::json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 1, None));
    let request = HttpRequest::builder(HttpMethod::Post, "variant/update-inventory")
        .param("sku", "MUG-1")
        .param("inventory", 12)
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_merchant_id_is_added_to_every_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/auth_test"))
        .and(query_param("merchant_id", "m-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(0, serde_json::json!("ok"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 1, Some("m-1")));
    let request = HttpRequest::builder(HttpMethod::Get, "auth_test")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_explicit_merchant_id_param_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/auth_test"))
        .and(query_param("merchant_id", "other"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(0, serde_json::json!("ok"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 1, Some("m-1")));
    let request = HttpRequest::builder(HttpMethod::Get, "auth_test")
        .param("merchant_id", "other")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

// ============================================================================
// Response decoding
// ============================================================================

#[tokio::test]
async fn test_envelope_on_error_status_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/auth_test"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("X-Request-Id", "req-401")
                .set_body_json(serde_json::json!({
                    "code": 1015,
                    "data": {},
                    "message": "Access token expired"
                })),
        )
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 1, None));
    let request = HttpRequest::builder(HttpMethod::Get, "auth_test")
        .build()
        .unwrap();

    let envelope = client.request(request).await.unwrap();

    assert_eq!(envelope.code, 1015);
    assert_eq!(envelope.http_status, 401);
    assert_eq!(envelope.message.as_deref(), Some("Access token expired"));
    assert_eq!(envelope.request_id.as_deref(), Some("req-401"));
}

#[tokio::test]
async fn test_non_envelope_error_body_is_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 1, None));
    let request = HttpRequest::builder(HttpMethod::Get, "product")
        .build()
        .unwrap();

    let result = client.request(request).await;

    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 502);
            assert!(e.message.contains("Bad Gateway"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_envelope_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 1, None));
    let request = HttpRequest::builder(HttpMethod::Get, "product")
        .build()
        .unwrap();

    let result = client.request(request).await;

    assert!(matches!(result, Err(HttpError::Decode { code: 200, .. })));
}

// ============================================================================
// Retries
// ============================================================================

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/auth_test"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/auth_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(0, serde_json::json!("ok"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 3, None));
    let request = HttpRequest::builder(HttpMethod::Get, "auth_test")
        .build()
        .unwrap();

    let envelope = client.request(request).await.unwrap();
    assert_eq!(envelope.code, 0);
}

#[tokio::test]
async fn test_exhausted_retries_return_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/auth_test"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(2)
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 2, None));
    let request = HttpRequest::builder(HttpMethod::Get, "auth_test")
        .build()
        .unwrap();

    let result = client.request(request).await;

    match result {
        Err(HttpError::MaxRetries(e)) => {
            assert_eq!(e.code, 429);
            assert_eq!(e.tries, 2);
        }
        other => panic!("expected max retries error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_try_does_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/auth_test"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 1, None));
    let request = HttpRequest::builder(HttpMethod::Get, "auth_test")
        .build()
        .unwrap();

    let result = client.request(request).await;

    assert!(matches!(result, Err(HttpError::Response(ref e)) if e.code == 500));
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&config_for(&server, 1, None));
    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "auth_test".to_string(),
        params: RequestParams::new().with("", "x"),
    };

    let result = client.request(request).await;

    assert!(matches!(
        result,
        Err(HttpError::InvalidRequest(InvalidHttpRequestError::EmptyParamName { .. }))
    ));
}
