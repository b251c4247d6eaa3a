use serde::{Deserialize, Serialize};

/// Spoken to the recipient; the provider substitutes `%token` with the code.
pub const MESSAGE_TEMPLATE: &str = "Your account security code is %token.";

/// Delivery mechanism for the one-time code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    /// Text-to-speech call. The provider falls back to SMS without it.
    #[serde(rename = "tts")]
    Voice,
}

/// Body of a create-verification call. Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationRequest {
    pub recipient: String,
    #[serde(rename = "type")]
    pub channel: Channel,
    pub template: String,
}

impl VerificationRequest {
    /// Voice-call verification for `recipient` using the fixed message template.
    pub fn voice(recipient: String) -> Self {
        Self {
            recipient,
            channel: Channel::Voice,
            template: MESSAGE_TEMPLATE.to_string(),
        }
    }
}

/// Verify object returned by the provider for both create and confirm.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verification {
    /// Opaque provider-issued id, round-tripped through the browser.
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Joins a country code and a local number, dropping one leading trunk zero.
///
/// No other validation happens here; malformed numbers are rejected by the provider.
pub fn normalize_recipient(country_code: &str, local_number: &str) -> String {
    let local = local_number.strip_prefix('0').unwrap_or(local_number);
    format!("{}{}", country_code, local)
}

/// Hides all digits except the last four so numbers can be logged.
pub fn mask_recipient(number: &str) -> String {
    let digits = number.chars().filter(|c| c.is_ascii_digit()).count();
    let mut seen = 0;
    number
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen + 4 > digits {
                c
            } else {
                '*'
            }
        })
        .collect()
}
