pub mod app;
pub mod cli;
pub mod constants;
pub mod runtime;
pub mod session;
pub mod storage;
pub mod tui;
pub mod utils;
pub mod validation;
pub mod waitlist;

pub use app::{load_config, Config};
pub use session::{Phase, SessionView, SubmissionController, SubmitOutcome};
pub use storage::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use utils::{StorageError, WaitlistError};
pub use validation::{validate, ValidEmail, ValidationError};
pub use waitlist::{EnrollOutcome, WaitlistStore};
