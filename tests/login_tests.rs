// SPDX-License-Identifier: MIT

//! Login page tests: validation, invalid credentials, role-based redirects
//! and the session cookies issued on success.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

fn login_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_login_page_serves_empty_form() {
    let (app, _) = common::create_test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::json_body(response).await;
    assert_eq!(body["heading"], "Login");
    assert_eq!(body["register_href"], "/register");
    assert_eq!(body["errors"], json!({}));
}

#[tokio::test]
async fn test_login_blank_fields_fail_without_upstream_call() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (app, _) = common::create_test_app(&mock_server.uri());

    let response = app.oneshot(login_request(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::json_body(response).await;
    assert_eq!(body["errors"]["email"], "Email is required");
    assert_eq!(body["errors"]["password"], "Password is required");
}

#[tokio::test]
async fn test_login_invalid_credentials_reports_api_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Invalid Credentials"})),
        )
        .mount(&mock_server)
        .await;

    let (app, _) = common::create_test_app(&mock_server.uri());

    let response = app
        .oneshot(login_request(
            json!({"email": "asha@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // No session may be issued on a rejected login
    assert!(set_cookie_headers(&response).is_empty());

    let body = common::json_body(response).await;
    assert_eq!(body["errors"]["api"], "Invalid email or password.");
}

#[tokio::test]
async fn test_login_chef_gets_session_and_dashboard_redirect() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login Successful",
            "token": "upstream-token",
            "user": {
                "_id": "chef-1",
                "firstName": "Asha",
                "lastName": "Rao",
                "email": "asha@example.com",
                "mobileNumber": "9876543210",
                "role": "chef"
            }
        })))
        .mount(&mock_server)
        .await;

    let (app, _) = common::create_test_app(&mock_server.uri());

    let response = app
        .oneshot(login_request(
            json!({"email": "asha@example.com", "password": "secret123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/chef/dashboard"
    );

    let set_cookies = set_cookie_headers(&response);
    let session = set_cookies
        .iter()
        .find(|value| value.starts_with("cookistry_session="))
        .expect("session cookie should be set");
    assert!(session.contains("HttpOnly"));
    assert!(session.contains("Path=/"));
    assert!(session.contains("SameSite=Lax"));
    assert!(session.contains("Max-Age=2592000"));
    assert!(!session.contains("Secure"));

    let hint = set_cookies
        .iter()
        .find(|value| value.starts_with("cookistry_logged_in="))
        .expect("hint cookie should be set");
    assert!(hint.starts_with("cookistry_logged_in=1"));
    assert!(!hint.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_foodie_redirects_to_catalog() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login Successful",
            "token": "upstream-token",
            "user": {
                "_id": "user-7",
                "firstName": "Ben",
                "lastName": "Ng",
                "email": "ben@example.com",
                "mobileNumber": "9123456780",
                "role": "user"
            }
        })))
        .mount(&mock_server)
        .await;

    let (app, _) = common::create_test_app(&mock_server.uri());

    let response = app
        .oneshot(login_request(
            json!({"email": "ben@example.com", "password": "secret123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/foodie/dashboard"
    );
}

#[tokio::test]
async fn test_login_upstream_message_surfaces_on_the_form() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "User does not Exist"})),
        )
        .mount(&mock_server)
        .await;

    let (app, _) = common::create_test_app(&mock_server.uri());

    let response = app
        .oneshot(login_request(
            json!({"email": "nobody@example.com", "password": "secret123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::json_body(response).await;
    assert_eq!(body["errors"]["api"], "User does not Exist");
}

#[tokio::test]
async fn test_login_upstream_failure_without_message_uses_fallback() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream crashed"))
        .mount(&mock_server)
        .await;

    let (app, _) = common::create_test_app(&mock_server.uri());

    let response = app
        .oneshot(login_request(
            json!({"email": "asha@example.com", "password": "secret123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::json_body(response).await;
    assert_eq!(body["errors"]["api"], "An error occurred. Please try again.");
}
