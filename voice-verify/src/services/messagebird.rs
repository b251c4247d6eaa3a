//! MessageBird Verify API client.
//!
//! Covers the two calls the verification flow needs: creating a
//! verification (which places the voice call) and confirming the code.

use super::verify_client::{VerifyApi, VerifyError};
use crate::config::MessageBirdSettings;
use crate::models::{mask_recipient, Verification, VerificationRequest};
use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

pub struct MessageBirdClient {
    client: Client,
    base_url: Url,
    api_key: Secret<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct MessageBirdErrorBody {
    #[serde(default)]
    errors: Vec<MessageBirdErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct MessageBirdErrorDetail {
    code: i64,
    description: String,
    #[serde(default)]
    parameter: Option<String>,
}

impl MessageBirdClient {
    pub fn new(settings: MessageBirdSettings) -> Result<Self, VerifyError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| VerifyError::InvalidEndpoint(format!("{}: {}", settings.base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(VerifyError::InvalidEndpoint(settings.base_url));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: settings.api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base URL, escaping each one individually.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, VerifyError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| VerifyError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn access_key(&self) -> String {
        format!("AccessKey {}", self.api_key.expose_secret())
    }
}

#[async_trait]
impl VerifyApi for MessageBirdClient {
    async fn create(&self, request: &VerificationRequest) -> Result<Verification, VerifyError> {
        let url = self.endpoint(&["verify"])?;

        tracing::debug!(
            recipient = %mask_recipient(&request.recipient),
            "Creating MessageBird verification"
        );

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.access_key())
            .json(request)
            .send()
            .await?;

        let verification = read_verification(response).await?;

        tracing::info!(
            verification_id = %verification.id,
            status = ?verification.status,
            "MessageBird verification created"
        );

        Ok(verification)
    }

    async fn confirm(&self, id: &str, token: &str) -> Result<Verification, VerifyError> {
        let mut url = self.endpoint(&["verify", id])?;
        url.query_pairs_mut().append_pair("token", token);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.access_key())
            .send()
            .await?;

        let verification = read_verification(response).await?;

        tracing::info!(
            verification_id = %verification.id,
            status = ?verification.status,
            "MessageBird verification confirmed"
        );

        Ok(verification)
    }
}

async fn read_verification(response: reqwest::Response) -> Result<Verification, VerifyError> {
    let status = response.status();
    let body = response.text().await?;

    tracing::debug!(status = %status, "MessageBird verify response");

    if status.is_success() {
        serde_json::from_str(&body).map_err(|e| VerifyError::MalformedResponse(e.to_string()))
    } else {
        Err(VerifyError::Provider {
            status,
            message: provider_message(&body),
        })
    }
}

fn provider_message(body: &str) -> String {
    match serde_json::from_str::<MessageBirdErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed
            .errors
            .iter()
            .map(|e| match &e.parameter {
                Some(parameter) => format!("{} (code {}, {})", e.description, e.code, parameter),
                None => format!("{} (code {})", e.description, e.code),
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    }
}
