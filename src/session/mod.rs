/// Submission session module - Gateway

mod controller;
mod state;

pub use controller::SubmissionController;
pub use state::{Phase, SessionView, SubmitOutcome};
