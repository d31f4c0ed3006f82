use serde::Serialize;

use crate::validation::ValidationError;

/// Phase of the per-session submission flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for a submission
    #[default]
    Idle,
    /// A valid email is waiting out the simulated round-trip
    Submitting,
    /// Enrolled; the form is replaced by a confirmation
    Done,
}

impl Phase {
    /// Whether a new submission would be taken
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Done => "done",
        }
    }
}

/// What the presentation layer may observe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub displayed_count: usize,
    pub phase: Phase,
    pub error_message: Option<String>,
}

/// Result of one step of the submission flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dropped by the in-flight or already-done guard
    Ignored,
    /// Candidate failed validation; back to idle with a message
    Invalid(ValidationError),
    /// Candidate accepted, waiting to enroll
    Pending,
    /// New member, session is done
    Enrolled(usize),
    /// Repeat submission, silently back to idle
    AlreadyMember(usize),
    /// Persisting failed; back to idle with a message
    Failed(String),
}

impl SubmitOutcome {
    /// Short machine-friendly label
    pub fn label(&self) -> &str {
        match self {
            Self::Ignored => "ignored",
            Self::Invalid(_) => "invalid_format",
            Self::Pending => "pending",
            Self::Enrolled(_) => "enrolled",
            Self::AlreadyMember(_) => "already_member",
            Self::Failed(_) => "failed",
        }
    }

    /// Whether the submission ended in an error the user should see
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Failed(_))
    }
}
