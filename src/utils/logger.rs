use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark whether the alternate screen owns the terminal. Log lines are dropped
/// while it does, so they cannot draw over the form.
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::Relaxed);
}

fn stderr_enabled() -> bool {
    !TUI_ACTIVE.load(Ordering::Relaxed)
}

fn log_writer() -> Box<dyn io::Write> {
    if stderr_enabled() {
        Box::new(io::stderr())
    } else {
        Box::new(io::sink())
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` wins over `default_level` when it is set.
pub fn init_logger(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // try_init: a second call (tests, embedding) must not panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_writer) // stderr, silenced while the TUI is up
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init();
}

/// Log an info message with a prefix
pub fn log_info(prefix: &str, message: impl std::fmt::Display) {
    info!("{} {}", prefix, message);
}

/// Log a warning message with a prefix
pub fn log_warn(prefix: &str, message: impl std::fmt::Display) {
    warn!("{} {}", prefix, message);
}

/// Log an error message with a prefix
pub fn log_error(prefix: &str, message: impl std::fmt::Display) {
    error!("{} {}", prefix, message);
}

/// Log a debug message
pub fn log_debug(message: impl std::fmt::Display) {
    debug!("{}", message);
}
