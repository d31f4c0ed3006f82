/// Constants module to avoid magic numbers in the codebase

// Persistence
pub const WAITLIST_KEY: &str = "waitlist";
pub const DEFAULT_STORAGE_FILE: &str = "storage.json";
pub const APP_NAME: &str = "waitlist";
pub const ENV_PREFIX: &str = "WAITLIST_";
pub const LOCAL_CONFIG_PATH: &str = ".waitlist/config.toml";

// Submission
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 800; // Simulated network round-trip

// UI Configuration
pub const UI_REFRESH_INTERVAL_MS: u64 = 50;
pub const UI_MAX_WIDTH: u16 = 64;
pub const UI_SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// Copy
pub const STORAGE_FAILURE_MESSAGE: &str = "Could not save your signup, please try again";
