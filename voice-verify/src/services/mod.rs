pub mod messagebird;
pub mod metrics;
pub mod verifier;
pub mod verify_client;

pub use messagebird::MessageBirdClient;
pub use metrics::Metrics;
pub use verifier::Verifier;
pub use verify_client::{VerifyApi, VerifyError};
