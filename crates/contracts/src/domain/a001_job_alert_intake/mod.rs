//! Job alert intake: the CV/skills + contact form submitted to the WorkAlert service.
//!
//! Structure:
//! - draft.rs: IntakeDraft and the CV file attachment
//! - validation.rs: local precondition checks
//! - status.rs: tagged submission status
//! - response.rs: upload response DTOs and interpretation
//! - form.rs: IntakeForm state machine with submission tickets
//! - transport.rs: UploadTransport seam and the async submission driver

pub mod draft;
pub mod form;
pub mod response;
pub mod status;
pub mod transport;
pub mod validation;

pub use draft::{CvFile, IntakeDraft, UploadPayload};
pub use form::{Completion, IntakeForm, PendingSubmission, SubmissionTicket, SubmitRejection};
pub use response::{
    interpret_response, HealthStatus, RawResponse, SubmissionOutcome, UploadEcho, UploadResponse,
};
pub use status::{MessageTone, SubmissionStatus};
pub use transport::{submit_draft, FormCell, SubmitReport, TransportError, UploadTransport};
pub use validation::{validate, ValidationError};

/// Multipart field names expected by the upload endpoint.
pub const FIELD_CV: &str = "cv";
pub const FIELD_SKILLS: &str = "skills";
pub const FIELD_WHATSAPP: &str = "whatsapp";
pub const FIELD_EMAIL: &str = "email";

/// Shown for any transport-level failure (network error, unreadable body).
pub const FAILED_TO_SUBMIT: &str = "Failed to submit form";

/// Shown when the server answers with a shape we do not understand.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";
