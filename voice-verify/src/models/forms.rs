use crate::error::AppError;
use serde::Deserialize;

/// Raw body of `POST /verify`.
#[derive(Debug, Default, Deserialize)]
pub struct StartVerificationForm {
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
}

/// Raw body of `POST /confirm`.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmVerificationForm {
    pub id: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartVerification {
    pub country_code: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmVerification {
    pub id: String,
    pub token: String,
}

impl TryFrom<StartVerificationForm> for StartVerification {
    type Error = AppError;

    fn try_from(form: StartVerificationForm) -> Result<Self, Self::Error> {
        Ok(Self {
            country_code: required(form.country_code, "country_code")?,
            phone_number: required(form.phone_number, "phone_number")?,
        })
    }
}

impl TryFrom<ConfirmVerificationForm> for ConfirmVerification {
    type Error = AppError;

    fn try_from(form: ConfirmVerificationForm) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required(form.id, "id")?,
            token: required(form.token, "token")?,
        })
    }
}

// Presence only: an empty phone number is still forwarded to the provider.
fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("missing form field `{}`", field)))
}
