use thiserror::Error;

/// Failures of the persistence collaborator
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Main error type for the waitlist
#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
