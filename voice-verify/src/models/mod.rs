pub mod forms;
pub mod verification;

pub use forms::{
    ConfirmVerification, ConfirmVerificationForm, StartVerification, StartVerificationForm,
};
pub use verification::{
    mask_recipient, normalize_recipient, Channel, Verification, VerificationRequest,
    MESSAGE_TEMPLATE,
};
