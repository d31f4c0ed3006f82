use std::time::Duration;
use tracing::{debug, warn};

use super::state::{Phase, SessionView, SubmitOutcome};
use crate::constants::STORAGE_FAILURE_MESSAGE;
use crate::validation::{validate, ValidEmail};
use crate::waitlist::{EnrollOutcome, WaitlistStore};

/// Per-session state machine tying validation, the simulated round-trip and
/// enrollment together.
///
/// Holds no durable state of its own. A submission is split into
/// [`begin`](Self::begin) and [`complete`](Self::complete) so an event loop can
/// keep drawing while the latency elapses; [`submit`](Self::submit) runs both.
pub struct SubmissionController {
    store: WaitlistStore,
    latency: Duration,
    phase: Phase,
    displayed_count: usize,
    error_message: Option<String>,
    pending: Option<ValidEmail>,
}

impl SubmissionController {
    /// Start a session, seeding the displayed count from the store
    pub fn new(store: WaitlistStore, latency: Duration) -> Self {
        let displayed_count = store.current_count();
        Self {
            store,
            latency,
            phase: Phase::Idle,
            displayed_count,
            error_message: None,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed_count
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Delay between acceptance and enrollment
    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn store(&self) -> &WaitlistStore {
        &self.store
    }

    /// Hand the store back, ending the session
    pub fn into_store(self) -> WaitlistStore {
        self.store
    }

    /// Snapshot of the observable outputs
    pub fn view(&self) -> SessionView {
        SessionView {
            displayed_count: self.displayed_count,
            phase: self.phase,
            error_message: self.error_message.clone(),
        }
    }

    /// Take a candidate. Returns `Pending` when it is valid and the caller
    /// should call [`complete`](Self::complete) once the latency has elapsed.
    pub fn begin(&mut self, candidate: &str) -> SubmitOutcome {
        if !self.phase.accepts_input() {
            debug!("Ignoring submission while {}", self.phase.as_str());
            return SubmitOutcome::Ignored;
        }

        self.phase = Phase::Submitting;
        self.error_message = None;

        match validate(candidate) {
            Ok(email) => {
                debug!("Accepted {}, waiting {:?}", email, self.latency);
                self.pending = Some(email);
                SubmitOutcome::Pending
            }
            Err(e) => {
                debug!("Rejected candidate: {}", e);
                self.phase = Phase::Idle;
                self.error_message = Some(e.to_string());
                SubmitOutcome::Invalid(e)
            }
        }
    }

    /// Enroll the pending email. A no-op unless a submission is in flight.
    pub fn complete(&mut self) -> SubmitOutcome {
        let Some(email) = self.pending.take() else {
            return SubmitOutcome::Ignored;
        };

        match self.store.enroll(email) {
            Ok(EnrollOutcome::Enrolled(count)) => {
                self.phase = Phase::Done;
                self.displayed_count = count;
                SubmitOutcome::Enrolled(count)
            }
            Ok(EnrollOutcome::AlreadyMember(count)) => {
                // No confirmation and no message for a repeat signup
                self.phase = Phase::Idle;
                SubmitOutcome::AlreadyMember(count)
            }
            Err(e) => {
                warn!("Enrollment failed: {}", e);
                self.phase = Phase::Idle;
                self.error_message = Some(STORAGE_FAILURE_MESSAGE.to_string());
                SubmitOutcome::Failed(STORAGE_FAILURE_MESSAGE.to_string())
            }
        }
    }

    /// Run a whole submission: validate, wait out the latency, enroll.
    pub async fn submit(&mut self, candidate: &str) -> SubmitOutcome {
        match self.begin(candidate) {
            SubmitOutcome::Pending => {
                tokio::time::sleep(self.latency).await;
                self.complete()
            }
            other => other,
        }
    }
}
