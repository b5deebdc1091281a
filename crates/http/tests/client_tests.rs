//! Integration tests for the SmileCare API client

#![cfg(not(target_arch = "wasm32"))]

use reqwest::Method;
use serde_json::json;
use smilecare_http::error::ClientError;
use smilecare_http::types::{
    ApiResponse, Appointment, AppointmentUpdate, LoginData, LoginRequest, ServiceInfo,
    ServicePayload,
};
use smilecare_http::{AuthedApiClient, PublicApiClient};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn public_client_requires_base_url() {
    assert!(matches!(
        PublicApiClient::new(""),
        Err(ClientError::Configuration(_))
    ));
}

#[tokio::test]
async fn public_client_strips_trailing_slash() {
    let client = PublicApiClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn login_round_trip_decodes_identity_and_tokens() {
    let mock_server = MockServer::start().await;

    let response_body = json!({
        "data": {
            "user": {
                "userId": 7,
                "roleId": 2,
                "firstName": "Ana",
                "lastName": "Reyes",
                "email": "ana@example.com"
            },
            "tokens": { "accessToken": "tok-123" }
        }
    });

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri()).unwrap();
    let request = client
        .request(Method::POST, "/api/users/login")
        .json(&LoginRequest {
            email: "ana@example.com".into(),
            password: "hunter2".into(),
        });

    let response: ApiResponse<LoginData> = client.execute(request).await.unwrap();
    assert_eq!(response.data.user.first_name, "Ana");
    assert_eq!(response.data.tokens.access_token, "tok-123");
}

#[tokio::test]
async fn authed_client_attaches_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/appointments/7"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let client = AuthedApiClient::new(mock_server.uri(), "tok-123").unwrap();
    let request = client.request(Method::GET, "/api/appointments/7");
    let response: ApiResponse<Vec<Appointment>> = client.execute(request).await.unwrap();
    assert!(response.data.is_empty());
}

#[tokio::test]
async fn public_client_sends_no_authorization_header() {
    let mock_server = MockServer::start().await;

    // Reject any request carrying an Authorization header.
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri()).unwrap();
    let request = client.request(Method::GET, "/api/services");
    let response: ApiResponse<Vec<ServiceInfo>> = client.execute(request).await.unwrap();
    assert!(response.data.is_empty());
}

#[tokio::test]
async fn create_service_posts_once_and_returns_created_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/services"))
        .and(body_json(json!({ "description": "Cleaning" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "ServiceId": 9, "Description": "Cleaning" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthedApiClient::new(mock_server.uri(), "tok-123").unwrap();
    let request = client
        .request(Method::POST, "/api/services")
        .json(&ServicePayload {
            description: "Cleaning".into(),
        });

    let response: ApiResponse<ServiceInfo> = client.execute(request).await.unwrap();
    assert_eq!(response.data.service_id, 9);
    assert_eq!(response.data.description, "Cleaning");
}

#[tokio::test]
async fn cancel_sends_status_x() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/appointments/12"))
        .and(body_json(json!({
            "status": "X",
            "patientUserId": 7,
            "dentistUserId": 2,
            "appointmentDate": "2026-08-29T10:30"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthedApiClient::new(mock_server.uri(), "tok-123").unwrap();
    let request = client
        .request(Method::PUT, "/api/appointments/12")
        .json(&AppointmentUpdate {
            status: "X".into(),
            patient_user_id: 7,
            dentist_user_id: 2,
            appointment_date: "2026-08-29T10:30".into(),
        });

    let response: Result<ApiResponse<serde_json::Value>, _> = client.execute(request).await;
    assert!(response.is_ok());
}

#[tokio::test]
async fn error_bodies_surface_the_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri()).unwrap();
    let request = client
        .request(Method::POST, "/api/users/login")
        .json(&LoginRequest {
            email: "ana@example.com".into(),
            password: "wrong".into(),
        });

    let result: Result<ApiResponse<LoginData>, _> = client.execute(request).await;
    match result {
        Err(err @ ClientError::AuthenticationFailed(_)) => {
            assert_eq!(err.display_message(), "Invalid credentials");
        }
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
}
