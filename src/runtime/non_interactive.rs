use colored::Colorize;
use serde::Serialize;
use std::time::Duration;

use crate::{
    cli::OutputFormat,
    session::{Phase, SubmissionController},
    tui::Variant,
    waitlist::WaitlistStore,
};

/// Result of a single non-interactive submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    /// The candidate as given
    pub email: String,
    /// enrolled, already_member, invalid_format or failed
    pub outcome: String,
    /// Count the user would see afterwards
    pub count: usize,
    /// Controller phase after the submission
    pub phase: Phase,
    /// Message shown to the user, if any
    pub error: Option<String>,
}

impl JoinReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs one submission through the same controller the UI uses
pub struct NonInteractiveRunner {
    controller: SubmissionController,
    variant: Variant,
}

impl NonInteractiveRunner {
    /// Create a new non-interactive runner
    pub fn new(store: WaitlistStore, latency: Duration, variant: Variant) -> Self {
        Self {
            controller: SubmissionController::new(store, latency),
            variant,
        }
    }

    /// Submit `email` and wait for the outcome
    pub async fn join(&mut self, email: &str) -> JoinReport {
        let outcome = self.controller.submit(email).await;
        let view = self.controller.view();

        JoinReport {
            email: email.to_string(),
            outcome: outcome.label().to_string(),
            count: view.displayed_count,
            phase: view.phase,
            error: view.error_message,
        }
    }

    /// Format a report for output
    pub fn format_report(&self, report: &JoinReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize: {}"}}"#, e)),
            OutputFormat::Text => {
                if let Some(error) = &report.error {
                    return format!("{} {}", "[ERROR]".red(), error);
                }

                // A repeat signup gets the same form view back, no confirmation
                if report.phase == Phase::Done {
                    self.variant.wording().confirmation.green().to_string()
                } else {
                    self.variant.count_line(report.count)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use pretty_assertions::assert_eq;

    fn runner(kv: &MemoryKvStore) -> NonInteractiveRunner {
        NonInteractiveRunner::new(
            WaitlistStore::open(Box::new(kv.clone())),
            Duration::ZERO,
            Variant::Midnight,
        )
    }

    #[tokio::test]
    async fn test_join_reports_enrollment() {
        let kv = MemoryKvStore::new();
        let report = runner(&kv).join("a@example.com").await;

        assert_eq!(
            report,
            JoinReport {
                email: "a@example.com".to_string(),
                outcome: "enrolled".to_string(),
                count: 1,
                phase: Phase::Done,
                error: None,
            }
        );
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn test_join_invalid_is_an_error() {
        let kv = MemoryKvStore::new();
        let mut runner = runner(&kv);
        let report = runner.join("not-an-email").await;

        assert_eq!(report.outcome, "invalid_format");
        assert!(!report.is_success());
        assert!(runner
            .format_report(&report, OutputFormat::Text)
            .contains("Please enter a valid email"));
    }

    #[tokio::test]
    async fn test_repeat_join_is_silent() {
        let kv = MemoryKvStore::new();
        runner(&kv).join("a@example.com").await;

        let mut second = runner(&kv);
        let report = second.join("a@example.com").await;

        assert_eq!(report.outcome, "already_member");
        assert_eq!(report.phase, Phase::Idle);
        assert!(report.is_success());

        let text = second.format_report(&report, OutputFormat::Text);
        assert!(!text.contains("You're on the waitlist"));
        assert!(text.contains("Join 1 others waiting in line"));
    }

    #[tokio::test]
    async fn test_json_output() {
        let kv = MemoryKvStore::new();
        let mut runner = runner(&kv);
        let report = runner.join("a@example.com").await;

        let json: serde_json::Value =
            serde_json::from_str(&runner.format_report(&report, OutputFormat::Json)).unwrap();
        assert_eq!(json["outcome"], "enrolled");
        assert_eq!(json["count"], 1);
        assert_eq!(json["phase"], "done");
        assert!(json["error"].is_null());
    }
}
