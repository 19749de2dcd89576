//! Job Alert Intake - View Model

use contracts::domain::a001_job_alert_intake::{FormCell, IntakeForm, SubmissionStatus};
use leptos::prelude::*;
use web_sys::File;

/// Form state lives in a local (non-`Send`) signal because it holds the
/// browser `File` handle.
#[derive(Clone, Copy)]
pub struct JobAlertIntakeVm {
    pub form: RwSignal<IntakeForm<File>, LocalStorage>,
}

impl JobAlertIntakeVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new_local(IntakeForm::new()),
        }
    }

    pub fn select_file(&self, file: File) {
        let name = file.name();
        self.form.update(|f| f.select_file(name, file));
    }

    pub fn clear_file(&self) {
        self.form.update(|f| f.clear_file());
    }

    pub fn update_skills(&self, text: String) {
        self.form.update(|f| f.update_skills(text));
    }

    pub fn update_whatsapp(&self, text: String) {
        self.form.update(|f| f.update_whatsapp(text));
    }

    pub fn update_email(&self, text: String) {
        self.form.update(|f| f.update_email(text));
    }

    /// Drop the request in flight; used on unmount. Safe after disposal.
    pub fn abandon(&self) {
        let _ = self.form.try_update(|f| f.abandon());
    }

    pub fn file_name(&self) -> Option<String> {
        self.form.with(|f| f.draft().file_name().map(str::to_string))
    }

    pub fn skills(&self) -> String {
        self.form.with(|f| f.draft().skills.clone())
    }

    pub fn whatsapp(&self) -> String {
        self.form.with(|f| f.draft().whatsapp.clone())
    }

    pub fn email(&self) -> String {
        self.form.with(|f| f.draft().email.clone())
    }

    pub fn status(&self) -> SubmissionStatus {
        self.form.with(|f| f.status().clone())
    }

    pub fn is_in_flight(&self) -> bool {
        self.form.with(|f| f.status().is_in_flight())
    }

    pub fn file_input_epoch(&self) -> u64 {
        self.form.with(|f| f.file_input_epoch())
    }
}

impl Default for JobAlertIntakeVm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormCell<File> for JobAlertIntakeVm {
    fn with_form<R>(&self, f: impl FnOnce(&mut IntakeForm<File>) -> R) -> Option<R> {
        // `None` once the view has been disposed.
        self.form.try_update(f)
    }
}
