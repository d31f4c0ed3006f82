/// Waitlist persistence module - Gateway

mod store;

pub use store::{EnrollOutcome, WaitlistStore};
