use super::draft::{CvFile, IntakeDraft, UploadPayload};
use super::response::{interpret_response, RawResponse, SubmissionOutcome};
use super::status::SubmissionStatus;
use super::transport::TransportError;
use super::validation::{validate, ValidationError};
use super::FAILED_TO_SUBMIT;

/// Id of one submission attempt. Strictly increasing per form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionTicket(pub u64);

impl SubmissionTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A validated submission waiting for its network round trip.
#[derive(Debug, Clone)]
pub struct PendingSubmission<F> {
    pub ticket: SubmissionTicket,
    pub payload: UploadPayload<F>,
}

/// Why `begin_submit` refused to start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    Invalid(ValidationError),
    AlreadyInFlight,
}

/// Result of feeding a response back into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied(SubmissionStatus),
    /// The ticket was superseded or abandoned; state is unchanged.
    Stale,
}

/// Intake form state: the draft, the submission status and the ticket of the
/// request currently in flight.
#[derive(Debug, Clone)]
pub struct IntakeForm<F> {
    draft: IntakeDraft<F>,
    status: SubmissionStatus,
    in_flight: Option<SubmissionTicket>,
    last_ticket: u64,
    file_input_epoch: u64,
}

impl<F> Default for IntakeForm<F> {
    fn default() -> Self {
        Self {
            draft: IntakeDraft::default(),
            status: SubmissionStatus::Idle,
            in_flight: None,
            last_ticket: 0,
            file_input_epoch: 0,
        }
    }
}

impl<F> IntakeForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &IntakeDraft<F> {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn in_flight(&self) -> Option<SubmissionTicket> {
        self.in_flight
    }

    /// Bumped whenever the file is dropped from the draft; the view clears the
    /// `<input type="file">` element when it changes.
    pub fn file_input_epoch(&self) -> u64 {
        self.file_input_epoch
    }

    pub fn select_file(&mut self, name: impl Into<String>, handle: F) {
        self.draft.file = Some(CvFile::new(name, handle));
    }

    pub fn clear_file(&mut self) {
        self.draft.file = None;
        self.file_input_epoch += 1;
    }

    pub fn update_skills(&mut self, text: impl Into<String>) {
        self.draft.skills = text.into();
    }

    pub fn update_whatsapp(&mut self, text: impl Into<String>) {
        self.draft.whatsapp = text.into();
    }

    pub fn update_email(&mut self, text: impl Into<String>) {
        self.draft.email = text.into();
    }

    /// Apply the response of a request started by `begin_submit`.
    ///
    /// Only the ticket currently in flight may change state.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<RawResponse, TransportError>,
    ) -> Completion {
        if self.in_flight != Some(ticket) {
            log::debug!(
                "ignoring stale response for submission #{} (current: {:?})",
                ticket.value(),
                self.in_flight.map(|t| t.value())
            );
            return Completion::Stale;
        }
        self.in_flight = None;

        let outcome = match result {
            Ok(raw) => interpret_response(&raw),
            Err(e) => {
                log::warn!("submission #{} failed: {}", ticket.value(), e);
                SubmissionOutcome::Failed(FAILED_TO_SUBMIT.to_string())
            }
        };

        self.status = match outcome {
            SubmissionOutcome::Succeeded(message) => {
                log::info!("submission #{} accepted", ticket.value());
                self.draft.reset();
                self.file_input_epoch += 1;
                SubmissionStatus::Succeeded(message)
            }
            SubmissionOutcome::Failed(message) => {
                log::info!("submission #{} rejected: {}", ticket.value(), message);
                SubmissionStatus::Failed(message)
            }
        };
        Completion::Applied(self.status.clone())
    }

    /// Forget the request in flight, e.g. when the view is torn down.
    /// Its response, if it ever arrives, is ignored.
    pub fn abandon(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            log::debug!("abandoning submission #{}", ticket.value());
            self.status = SubmissionStatus::Idle;
        }
    }
}

impl<F: Clone> IntakeForm<F> {
    /// Validate the draft and, if it passes, move to `InFlight` and hand back
    /// the payload to send. Validation failures are reflected in the status.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission<F>, SubmitRejection> {
        if self.in_flight.is_some() {
            return Err(SubmitRejection::AlreadyInFlight);
        }
        if let Err(e) = validate(&self.draft) {
            self.status = SubmissionStatus::Failed(e.to_string());
            return Err(SubmitRejection::Invalid(e));
        }

        self.last_ticket += 1;
        let ticket = SubmissionTicket(self.last_ticket);
        self.in_flight = Some(ticket);
        self.status = SubmissionStatus::InFlight;

        log::info!(
            "submission #{} started (cv: {}, skills: {}, whatsapp: {}, email: {})",
            ticket.value(),
            self.draft.file_name().unwrap_or("-"),
            !self.draft.skills.is_empty(),
            !self.draft.whatsapp.is_empty(),
            !self.draft.email.is_empty(),
        );

        Ok(PendingSubmission {
            ticket,
            payload: self.draft.to_payload(),
        })
    }
}
