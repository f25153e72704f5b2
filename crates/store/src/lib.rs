//! Settings persistence.
//!
//! The game persists exactly two scalars: the high score and the mute flag.
//! They live in a string key-value store behind the [`KeyValueStore`] seam so
//! the backend can be swapped (JSON file on disk, in-memory for tests).
//!
//! Persistence is best-effort. [`Settings::load`] never fails: an unreadable
//! backend, a missing key or a garbage value all fall back to the defaults
//! (score 0, unmuted) and are logged.

pub mod file;
pub mod memory;
pub mod settings;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use settings::{Settings, HIGH_SCORE_KEY, MUTED_KEY};

use thiserror::Error;

/// Errors a store backend can report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported store document version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
