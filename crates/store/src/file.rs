//! JSON file backend.
//!
//! Document layout:
//!
//! ```text
//! { "version": 1, "entries": { "snake.high_score": "12", "snake.muted": "false" } }
//! ```
//!
//! The whole document is rewritten on every `set` (two tiny values; writes
//! happen on new high scores and mute toggles only).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{KeyValueStore, StoreError};

const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Document {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    doc: Document,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file is an empty store; it is created on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = match fs::read_to_string(&path) {
            Ok(text) => parse_document(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Document::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), entries = doc.entries.len(), "opened settings store");
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.doc)?;

        // Write-then-rename so a crash never leaves a truncated document.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn parse_document(text: &str) -> Result<Document, StoreError> {
    if text.trim().is_empty() {
        return Ok(Document::default());
    }
    let doc: Document = serde_json::from_str(text)?;
    if doc.version != DOCUMENT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: doc.version,
            expected: DOCUMENT_VERSION,
        });
    }
    Ok(doc)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.doc.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.doc.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
