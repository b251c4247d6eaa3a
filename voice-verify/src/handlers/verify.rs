use crate::error::AppError;
use crate::handlers::app::StartTemplate;
use crate::models::{
    ConfirmVerification, ConfirmVerificationForm, StartVerification, StartVerificationForm,
};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Response},
    Form,
};

pub const INITIATE_FAILED_MESSAGE: &str = "Could not initiate call.";
pub const CONFIRM_FAILED_MESSAGE: &str = "Verification has failed. Please try again.";

/// Code entry form; `id` is echoed back as a hidden field.
#[derive(Template)]
#[template(path = "verify.html")]
pub struct VerifyTemplate {
    pub id: String,
}

#[derive(Template)]
#[template(path = "confirm.html")]
pub struct ConfirmTemplate {}

#[tracing::instrument(skip(state, form))]
pub async fn start_verification(
    State(state): State<AppState>,
    form: Result<Form<StartVerificationForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let input = StartVerification::try_from(form)?;

    match state.verifier.initiate(&input).await {
        Ok(verification) => {
            state.metrics.record_verification("create", "success");
            Ok(VerifyTemplate {
                id: verification.id,
            }
            .into_response())
        }
        Err(e) => {
            state.metrics.record_verification("create", "failure");
            tracing::error!(
                error.kind = e.kind(),
                error.message = %e,
                "Failed to initiate verification call"
            );
            Ok(StartTemplate::with_error(INITIATE_FAILED_MESSAGE).into_response())
        }
    }
}

#[tracing::instrument(skip(state, form))]
pub async fn confirm_verification(
    State(state): State<AppState>,
    form: Result<Form<ConfirmVerificationForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let input = ConfirmVerification::try_from(form)?;

    // Wrong code and unknown or expired id are reported identically.
    match state.verifier.confirm(&input).await {
        Ok(_) => {
            state.metrics.record_verification("confirm", "success");
            Ok(ConfirmTemplate {}.into_response())
        }
        Err(e) => {
            state.metrics.record_verification("confirm", "failure");
            tracing::error!(
                verification_id = %input.id,
                error.kind = e.kind(),
                error.message = %e,
                "Failed to confirm verification code"
            );
            Ok(StartTemplate::with_error(CONFIRM_FAILED_MESSAGE).into_response())
        }
    }
}
