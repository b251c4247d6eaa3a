use crate::models::{Verification, VerificationRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to the verification provider.
///
/// Handlers treat every variant the same way; the split exists for logs.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Provider { status: StatusCode, message: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Invalid provider endpoint: {0}")]
    InvalidEndpoint(String),
}

// The request URL carries the user's code as a query parameter.
impl From<reqwest::Error> for VerifyError {
    fn from(err: reqwest::Error) -> Self {
        VerifyError::Transport(err.without_url())
    }
}

impl VerifyError {
    /// Stable classification used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            VerifyError::Transport(_) => "transport",
            VerifyError::Provider { .. } => "provider",
            VerifyError::MalformedResponse(_) => "malformed_response",
            VerifyError::InvalidEndpoint(_) => "invalid_endpoint",
        }
    }
}

/// The two provider operations this app consumes.
#[async_trait]
pub trait VerifyApi: Send + Sync {
    /// Starts a verification; the provider places the call and issues an id.
    async fn create(&self, request: &VerificationRequest) -> Result<Verification, VerifyError>;

    /// Checks `token` against the verification identified by `id`.
    async fn confirm(&self, id: &str, token: &str) -> Result<Verification, VerifyError>;
}
