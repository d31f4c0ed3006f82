use crate::utils::StorageError;

/// Narrow string key-value capability, scoped to a single local origin.
///
/// Values are opaque strings; callers own their encoding.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
