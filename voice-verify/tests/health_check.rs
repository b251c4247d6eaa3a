mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{Outcome, TestApp};

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn(Outcome::Succeed, Outcome::Succeed);

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = TestApp::spawn(Outcome::Succeed, Outcome::Succeed);

    let response = tower::util::ServiceExt::oneshot(
        app.router.clone(),
        Request::builder()
            .uri("/")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["x-request-id"], "req-42");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let app = TestApp::spawn(Outcome::Succeed, Outcome::Succeed);

    let response = tower::util::ServiceExt::oneshot(
        app.router.clone(),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await
    .unwrap();

    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn metrics_report_verification_outcomes() {
    let app = TestApp::spawn(Outcome::Fail, Outcome::Succeed);

    app.post_form("/verify", "country_code=%2B1&phone_number=5551234")
        .await;
    let (status, body) = app.get("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"verification_attempts_total{outcome="failure",step="create"} 1"#));
    assert!(body.contains(r#"http_requests_total{method="POST",path="/verify",status="200"} 1"#));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::spawn(Outcome::Succeed, Outcome::Succeed);

    let (status, _) = app.get("/admin").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
