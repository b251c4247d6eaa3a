use crate::handlers::app::StartTemplate;
use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(reason) => {
                tracing::warn!(reason = %reason, "Rejected form submission");
                (
                    StatusCode::BAD_REQUEST,
                    StartTemplate::with_error(MISSING_FIELDS_MESSAGE),
                )
                    .into_response()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl From<prometheus::Error> for AppError {
    fn from(err: prometheus::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

// Duplicate fields, wrong content type and undecodable bodies all land here.
impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
