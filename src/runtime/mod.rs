/// Runtime orchestrator module - Gateway

mod non_interactive;
mod orchestrator;

pub use non_interactive::{JoinReport, NonInteractiveRunner};
pub use orchestrator::Orchestrator;
