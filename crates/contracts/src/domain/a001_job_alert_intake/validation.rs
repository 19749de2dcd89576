use super::draft::IntakeDraft;
use thiserror::Error;

/// Local precondition failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide either WhatsApp number or email to receive alerts")]
    MissingContactChannel,
    #[error("Please provide either your CV or list your skills")]
    MissingProfileContent,
}

/// Check the draft before submitting. Contact channel is checked first.
pub fn validate<F>(draft: &IntakeDraft<F>) -> Result<(), ValidationError> {
    if !draft.has_contact_channel() {
        return Err(ValidationError::MissingContactChannel);
    }
    if !draft.has_profile_content() {
        return Err(ValidationError::MissingProfileContent);
    }
    Ok(())
}
