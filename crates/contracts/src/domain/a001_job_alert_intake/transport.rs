use super::draft::UploadPayload;
use super::form::{Completion, IntakeForm, SubmitRejection};
use super::response::RawResponse;
use super::status::SubmissionStatus;
use super::validation::ValidationError;
use async_trait::async_trait;
use std::cell::RefCell;
use thiserror::Error;

/// Network-level failure: DNS, refused connection, aborted fetch, unreadable body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Sends one upload request. Implementations must not retry.
#[async_trait(?Send)]
pub trait UploadTransport<F> {
    async fn send(&self, payload: UploadPayload<F>) -> Result<RawResponse, TransportError>;
}

/// Shared access to a form that may disappear while a request is in flight
/// (a disposed signal after the view unmounts). `None` means it is gone.
pub trait FormCell<F> {
    fn with_form<R>(&self, f: impl FnOnce(&mut IntakeForm<F>) -> R) -> Option<R>;
}

impl<F> FormCell<F> for RefCell<IntakeForm<F>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut IntakeForm<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// What happened to one call of [`submit_draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// Validation failed, nothing was sent.
    Rejected(ValidationError),
    /// A request is already running, nothing was sent.
    Busy,
    /// The response was applied to the form.
    Completed(SubmissionStatus),
    /// The response arrived after the submission was superseded or abandoned.
    Stale,
    /// The form no longer exists.
    Detached,
}

/// Validate, send and apply: the whole submit flow of the intake form.
///
/// The form is never borrowed across the await point.
pub async fn submit_draft<F, C, T>(cell: &C, transport: &T) -> SubmitReport
where
    F: Clone,
    C: FormCell<F> + ?Sized,
    T: UploadTransport<F> + ?Sized,
{
    let pending = match cell.with_form(|form| form.begin_submit()) {
        None => return SubmitReport::Detached,
        Some(Err(SubmitRejection::Invalid(e))) => return SubmitReport::Rejected(e),
        Some(Err(SubmitRejection::AlreadyInFlight)) => return SubmitReport::Busy,
        Some(Ok(pending)) => pending,
    };

    let result = transport.send(pending.payload).await;

    match cell.with_form(|form| form.complete(pending.ticket, result)) {
        None => SubmitReport::Detached,
        Some(Completion::Stale) => SubmitReport::Stale,
        Some(Completion::Applied(status)) => SubmitReport::Completed(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Counts calls and answers with a canned result.
    struct FakeTransport {
        calls: Cell<usize>,
        reply: Result<RawResponse, TransportError>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                calls: Cell::new(0),
                reply: Ok(RawResponse::new(status, body)),
            }
        }

        fn failing() -> Self {
            Self {
                calls: Cell::new(0),
                reply: Err(TransportError::new("dns error")),
            }
        }
    }

    #[async_trait(?Send)]
    impl UploadTransport<Vec<u8>> for FakeTransport {
        async fn send(
            &self,
            _payload: UploadPayload<Vec<u8>>,
        ) -> Result<RawResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }
    }

    /// Abandons the form while the request is "on the wire".
    struct AbandoningTransport<'a> {
        cell: &'a RefCell<IntakeForm<Vec<u8>>>,
    }

    #[async_trait(?Send)]
    impl UploadTransport<Vec<u8>> for AbandoningTransport<'_> {
        async fn send(
            &self,
            _payload: UploadPayload<Vec<u8>>,
        ) -> Result<RawResponse, TransportError> {
            self.cell.borrow_mut().abandon();
            Ok(RawResponse::new(200, r#"{"message":"ok"}"#))
        }
    }

    fn valid_form() -> RefCell<IntakeForm<Vec<u8>>> {
        let mut form = IntakeForm::new();
        form.select_file("resume.pdf", vec![0x25, 0x50, 0x44, 0x46]);
        form.update_skills("Go, Kubernetes");
        form.update_whatsapp("+491701234567");
        form.update_email("dev@example.org");
        RefCell::new(form)
    }

    #[test]
    fn test_no_contact_channel_makes_no_call() {
        let cell = valid_form();
        cell.borrow_mut().update_whatsapp("");
        cell.borrow_mut().update_email("");
        let transport = FakeTransport::replying(200, r#"{"message":"ok"}"#);

        let report = block_on(submit_draft(&cell, &transport));

        assert_eq!(
            report,
            SubmitReport::Rejected(ValidationError::MissingContactChannel)
        );
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_no_profile_content_makes_no_call() {
        let cell = valid_form();
        cell.borrow_mut().clear_file();
        cell.borrow_mut().update_skills("");
        let transport = FakeTransport::replying(200, r#"{"message":"ok"}"#);

        let report = block_on(submit_draft(&cell, &transport));

        assert_eq!(
            report,
            SubmitReport::Rejected(ValidationError::MissingProfileContent)
        );
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(
            cell.borrow().status(),
            &SubmissionStatus::Failed("Please provide either your CV or list your skills".into())
        );
    }

    #[test]
    fn test_one_call_per_valid_submit() {
        let cell = valid_form();
        let transport = FakeTransport::replying(400, r#"{"error":"bad file"}"#);

        block_on(submit_draft(&cell, &transport));
        assert_eq!(transport.calls.get(), 1);

        block_on(submit_draft(&cell, &transport));
        assert_eq!(transport.calls.get(), 2);
    }

    #[test]
    fn test_ok_response_clears_draft() {
        let cell = valid_form();
        let transport = FakeTransport::replying(200, r#"{"message":"ok"}"#);

        let report = block_on(submit_draft(&cell, &transport));

        assert_eq!(
            report,
            SubmitReport::Completed(SubmissionStatus::Succeeded("ok".into()))
        );
        let form = cell.borrow();
        assert!(form.draft().file.is_none());
        assert!(form.draft().skills.is_empty());
        assert!(form.draft().whatsapp.is_empty());
        assert!(form.draft().email.is_empty());
    }

    #[test]
    fn test_bad_request_keeps_draft() {
        let cell = valid_form();
        let transport = FakeTransport::replying(400, r#"{"error":"bad file"}"#);

        let report = block_on(submit_draft(&cell, &transport));

        assert_eq!(
            report,
            SubmitReport::Completed(SubmissionStatus::Failed("bad file".into()))
        );
        let form = cell.borrow();
        assert_eq!(form.draft().file_name(), Some("resume.pdf"));
        assert_eq!(form.draft().skills, "Go, Kubernetes");
        assert_eq!(form.draft().whatsapp, "+491701234567");
        assert_eq!(form.draft().email, "dev@example.org");
    }

    #[test]
    fn test_network_failure() {
        let cell = valid_form();
        let transport = FakeTransport::failing();

        let report = block_on(submit_draft(&cell, &transport));

        assert_eq!(
            report,
            SubmitReport::Completed(SubmissionStatus::Failed("Failed to submit form".into()))
        );
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn test_busy_form_makes_no_call() {
        let cell = valid_form();
        let _pending = cell.borrow_mut().begin_submit().unwrap();
        let transport = FakeTransport::replying(200, r#"{"message":"ok"}"#);

        let report = block_on(submit_draft(&cell, &transport));

        assert_eq!(report, SubmitReport::Busy);
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_response_after_abandon_is_stale() {
        let cell = valid_form();
        let transport = AbandoningTransport { cell: &cell };

        let report = block_on(submit_draft(&cell, &transport));

        assert_eq!(report, SubmitReport::Stale);
        assert_eq!(cell.borrow().status(), &SubmissionStatus::Idle);
        assert_eq!(cell.borrow().draft().file_name(), Some("resume.pdf"));
    }
}
