#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use reqwest::StatusCode as ProviderStatus;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;
use voice_verify::models::{Verification, VerificationRequest};
use voice_verify::services::{Metrics, Verifier, VerifyApi, VerifyError};
use voice_verify::startup::build_router;
use voice_verify::AppState;

/// How the stub answers each provider call.
#[derive(Clone, Copy)]
pub enum Outcome {
    Succeed,
    Fail,
}

pub struct StubVerifyApi {
    create: Outcome,
    confirm: Outcome,
    pub created: Mutex<Vec<VerificationRequest>>,
    pub confirmed: Mutex<Vec<(String, String)>>,
}

impl StubVerifyApi {
    pub fn new(create: Outcome, confirm: Outcome) -> Self {
        Self {
            create,
            confirm,
            created: Mutex::new(Vec::new()),
            confirmed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl VerifyApi for StubVerifyApi {
    async fn create(&self, request: &VerificationRequest) -> Result<Verification, VerifyError> {
        self.created.lock().unwrap().push(request.clone());
        match self.create {
            Outcome::Succeed => Ok(Verification {
                id: "abc123".to_string(),
                status: Some("sent".to_string()),
            }),
            Outcome::Fail => Err(VerifyError::Provider {
                status: ProviderStatus::UNPROCESSABLE_ENTITY,
                message: "stub-secret-detail: recipient rejected".to_string(),
            }),
        }
    }

    async fn confirm(&self, id: &str, token: &str) -> Result<Verification, VerifyError> {
        self.confirmed
            .lock()
            .unwrap()
            .push((id.to_string(), token.to_string()));
        match self.confirm {
            Outcome::Succeed => Ok(Verification {
                id: id.to_string(),
                status: Some("verified".to_string()),
            }),
            Outcome::Fail => Err(VerifyError::MalformedResponse(
                "stub-secret-detail: token invalid".to_string(),
            )),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub api: Arc<StubVerifyApi>,
}

impl TestApp {
    pub fn spawn(create: Outcome, confirm: Outcome) -> Self {
        let api = Arc::new(StubVerifyApi::new(create, confirm));
        let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));
        let state = AppState::new(Verifier::new(api.clone()), metrics);

        TestApp {
            router: build_router(state),
            api,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}
