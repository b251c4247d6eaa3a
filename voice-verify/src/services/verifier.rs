use super::verify_client::{VerifyApi, VerifyError};
use crate::models::{
    mask_recipient, normalize_recipient, ConfirmVerification, StartVerification, Verification,
    VerificationRequest,
};
use std::sync::Arc;

/// Builds provider requests from form input and forwards them to the injected client.
///
/// Holds no state between calls; the verification id lives in the browser.
#[derive(Clone)]
pub struct Verifier {
    client: Arc<dyn VerifyApi>,
}

impl Verifier {
    pub fn new(client: Arc<dyn VerifyApi>) -> Self {
        Self { client }
    }

    pub async fn initiate(&self, input: &StartVerification) -> Result<Verification, VerifyError> {
        let recipient = normalize_recipient(&input.country_code, &input.phone_number);

        tracing::info!(
            recipient = %mask_recipient(&recipient),
            "Initiating voice verification"
        );

        self.client
            .create(&VerificationRequest::voice(recipient))
            .await
    }

    pub async fn confirm(&self, input: &ConfirmVerification) -> Result<Verification, VerifyError> {
        tracing::info!(verification_id = %input.id, "Confirming verification code");

        self.client.confirm(&input.id, &input.token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Channel;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        created: Mutex<Vec<VerificationRequest>>,
        confirmed: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl VerifyApi for RecordingClient {
        async fn create(&self, request: &VerificationRequest) -> Result<Verification, VerifyError> {
            self.created.lock().unwrap().push(request.clone());
            Ok(Verification {
                id: "abc123".to_string(),
                status: Some("sent".to_string()),
            })
        }

        async fn confirm(&self, id: &str, token: &str) -> Result<Verification, VerifyError> {
            self.confirmed
                .lock()
                .unwrap()
                .push((id.to_string(), token.to_string()));
            Err(VerifyError::MalformedResponse("empty".to_string()))
        }
    }

    #[tokio::test]
    async fn initiate_sends_normalized_voice_request() {
        let client = Arc::new(RecordingClient::default());
        let verifier = Verifier::new(client.clone());

        let verification = verifier
            .initiate(&StartVerification {
                country_code: "+31".to_string(),
                phone_number: "0612345678".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(verification.id, "abc123");
        let created = client.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].recipient, "+31612345678");
        assert_eq!(created[0].channel, Channel::Voice);
    }

    #[tokio::test]
    async fn confirm_passes_id_and_token_through() {
        let client = Arc::new(RecordingClient::default());
        let verifier = Verifier::new(client.clone());

        let err = verifier
            .confirm(&ConfirmVerification {
                id: "abc123".to_string(),
                token: "4242".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "malformed_response");
        assert_eq!(
            *client.confirmed.lock().unwrap(),
            vec![("abc123".to_string(), "4242".to_string())]
        );
    }
}
