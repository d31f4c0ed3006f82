// Gateway module for storage - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod file;
mod kv;
mod memory;

// Public re-exports - the ONLY way to access storage functionality
pub use file::FileKvStore;
pub use kv::KeyValueStore;
pub use memory::MemoryKvStore;

#[cfg(test)]
pub use kv::MockKeyValueStore;
