//! Job Alert Intake UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: multipart upload transport
//! - view_model.rs: JobAlertIntakeVm wrapping the IntakeForm state machine
//! - view.rs: Main component JobAlertIntake

mod model;
mod view;
mod view_model;

pub use model::GlooUploadTransport;
pub use view::JobAlertIntake;
pub use view_model::JobAlertIntakeVm;
