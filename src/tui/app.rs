use std::time::Instant;

use super::variant::Variant;
use crate::session::{Phase, SessionView, SubmissionController, SubmitOutcome};

/// Application state for the signup widget
pub struct App {
    /// Submission state machine
    pub controller: SubmissionController,
    /// Email input buffer
    pub input: String,
    /// Active visual variant
    pub variant: Variant,
    /// Is the app running?
    pub running: bool,
    /// When the in-flight submission should be enrolled
    pub deadline: Option<Instant>,
    /// Frame counter for the spinner
    pub tick: usize,
}

impl App {
    /// Create a new app instance
    pub fn new(controller: SubmissionController, variant: Variant) -> Self {
        Self {
            controller,
            input: String::new(),
            variant,
            running: true,
            deadline: None,
            tick: 0,
        }
    }

    /// Observable state for rendering
    pub fn view(&self) -> SessionView {
        self.controller.view()
    }

    /// Append a character to the input
    pub fn insert_char(&mut self, c: char) {
        if self.controller.phase() != Phase::Done {
            self.input.push(c);
        }
    }

    /// Delete the last input character
    pub fn delete_char(&mut self) {
        if self.controller.phase() != Phase::Done {
            self.input.pop();
        }
    }

    /// Submit the current input. Ignored by the controller while a submission
    /// is in flight.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let outcome = self.controller.begin(&self.input);
        if outcome == SubmitOutcome::Pending {
            self.deadline = Some(now + self.controller.latency());
        }
        outcome
    }

    /// Finish the in-flight submission once its deadline has passed
    pub fn poll_pending(&mut self, now: Instant) -> Option<SubmitOutcome> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                let outcome = self.controller.complete();
                if matches!(outcome, SubmitOutcome::Enrolled(_)) {
                    self.input.clear();
                }
                Some(outcome)
            }
            _ => None,
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Switch to the next visual variant
    pub fn cycle_variant(&mut self) {
        self.variant = self.variant.cycle();
    }

    /// Switch to the previous visual variant
    pub fn cycle_variant_reverse(&mut self) {
        self.variant = self.variant.cycle_reverse();
    }

    /// Quit the application. An in-flight submission is enrolled first; it
    /// cannot be abandoned once accepted.
    pub fn quit(&mut self) -> Option<SubmitOutcome> {
        self.running = false;
        self.deadline.take().map(|_| {
            let outcome = self.controller.complete();
            if matches!(outcome, SubmitOutcome::Enrolled(_)) {
                self.input.clear();
            }
            outcome
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use crate::waitlist::WaitlistStore;
    use std::time::Duration;

    fn app(latency: Duration) -> App {
        let store = WaitlistStore::open(Box::new(MemoryKvStore::new()));
        App::new(SubmissionController::new(store, latency), Variant::Midnight)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    #[test]
    fn test_submit_waits_for_deadline() {
        let mut app = app(Duration::from_millis(800));
        let start = Instant::now();
        type_text(&mut app, "a@example.com");

        assert_eq!(app.submit(start), SubmitOutcome::Pending);
        assert_eq!(app.view().phase, Phase::Submitting);

        assert_eq!(app.poll_pending(start + Duration::from_millis(100)), None);
        assert_eq!(app.view().phase, Phase::Submitting);

        assert_eq!(
            app.poll_pending(start + Duration::from_millis(800)),
            Some(SubmitOutcome::Enrolled(1))
        );
        assert_eq!(app.view().phase, Phase::Done);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_repeated_enter_does_not_double_enroll() {
        let mut app = app(Duration::from_millis(800));
        let start = Instant::now();
        type_text(&mut app, "a@example.com");

        app.submit(start);
        assert_eq!(app.submit(start + Duration::from_millis(10)), SubmitOutcome::Ignored);
        app.poll_pending(start + Duration::from_secs(1));

        assert_eq!(app.controller.store().current_count(), 1);
    }

    #[test]
    fn test_invalid_input_shows_error() {
        let mut app = app(Duration::ZERO);
        type_text(&mut app, "nope");

        assert!(matches!(app.submit(Instant::now()), SubmitOutcome::Invalid(_)));
        assert_eq!(app.deadline, None);
        assert_eq!(
            app.view().error_message.as_deref(),
            Some("Please enter a valid email")
        );
        assert_eq!(app.input, "nope");
    }

    #[test]
    fn test_input_frozen_when_done() {
        let mut app = app(Duration::ZERO);
        let now = Instant::now();
        type_text(&mut app, "a@example.com");
        app.submit(now);
        app.poll_pending(now);

        app.insert_char('x');
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_quit_while_submitting_still_enrolls() {
        let kv = MemoryKvStore::new();
        let store = WaitlistStore::open(Box::new(kv.clone()));
        let mut app = App::new(
            SubmissionController::new(store, Duration::from_millis(800)),
            Variant::Midnight,
        );
        let start = Instant::now();
        type_text(&mut app, "a@example.com");
        assert_eq!(app.submit(start), SubmitOutcome::Pending);

        assert_eq!(app.quit(), Some(SubmitOutcome::Enrolled(1)));

        assert!(!app.running);
        assert_eq!(app.deadline, None);
        assert_eq!(app.view().phase, Phase::Done);
        assert_eq!(app.poll_pending(start + Duration::from_millis(50)), None);
        assert_eq!(
            WaitlistStore::open(Box::new(kv)).members(),
            ["a@example.com"]
        );
    }

    #[test]
    fn test_quit_when_idle_has_nothing_to_finish() {
        let mut app = app(Duration::ZERO);
        assert_eq!(app.quit(), None);
        assert_eq!(app.view().phase, Phase::Idle);
    }

    #[test]
    fn test_variant_switching() {
        let mut app = app(Duration::ZERO);
        app.cycle_variant();
        assert_eq!(app.variant, Variant::Paper);
        app.cycle_variant_reverse();
        app.cycle_variant_reverse();
        assert_eq!(app.variant, Variant::Terminal);
    }
}
