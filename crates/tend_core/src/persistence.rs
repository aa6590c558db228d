//! State persistence port.
//!
//! One opaque blob behind one fixed location. Reads that fail for any
//! reason (missing file, unreadable, corrupt JSON) are treated as "no
//! data" so the engine can fall back to defaults; the caller decides
//! what to do about write failures.

use crate::state::AppState;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the state blob inside the data directory.
pub const STATE_FILE: &str = "state.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Get/set of the single serialized state blob.
pub trait StatePersistence {
    /// Last written state, or `None` for absent/corrupt data.
    fn load(&self) -> Option<AppState>;

    /// Best-effort durable replacement of the blob.
    fn store(&self, state: &AppState) -> Result<(), StoreError>;
}

/// JSON file in the data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STATE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatePersistence for FileStore {
    fn load(&self) -> Option<AppState> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn store(&self, state: &AppState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory blob for tests. Round-trips through serde so tests
/// exercise the real schema, not just a clone.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with a raw blob (possibly corrupt, for recovery tests).
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl StatePersistence for MemoryStore {
    fn load(&self) -> Option<AppState> {
        let blob = self.blob.borrow();
        serde_json::from_str(blob.as_deref()?).ok()
    }

    fn store(&self, state: &AppState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)?;
        *self.blob.borrow_mut() = Some(json);
        Ok(())
    }
}
