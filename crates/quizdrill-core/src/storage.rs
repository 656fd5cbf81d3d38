//! Durable storage backends.
//!
//! The store rewrites its whole collection after every mutation and reloads
//! it at startup. The on-disk format is a UTF-8 JSON array of
//! `{question, answer}` objects. Backends are injected into the store, so
//! tests run against the in-memory one instead of the filesystem.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::QuizError;
use crate::model::StoredRecord;

/// A durable home for the quiz collection.
///
/// `load` yields `None` when no prior storage exists; the store recovers
/// that case by seeding defaults. Every other failure is `Persistence`.
pub trait StorageBackend {
    fn load(&mut self) -> Result<Option<Vec<StoredRecord>>, QuizError>;
    fn save(&mut self, records: &[StoredRecord]) -> Result<(), QuizError>;
}

/// File-backed storage: one JSON array per file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileStorage {
    fn load(&mut self) -> Result<Option<Vec<StoredRecord>>, QuizError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(QuizError::Persistence(format!(
                    "cannot read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let records: Vec<StoredRecord> = serde_json::from_str(&text).map_err(|e| {
            QuizError::Persistence(format!("cannot parse {}: {e}", self.path.display()))
        })?;

        Ok(Some(records))
    }

    fn save(&mut self, records: &[StoredRecord]) -> Result<(), QuizError> {
        let json = serde_json::to_string(records)
            .map_err(|e| QuizError::Persistence(format!("cannot encode collection: {e}")))?;

        fs::write(&self.path, json).map_err(|e| {
            QuizError::Persistence(format!("cannot write {}: {e}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "collection persisted");
        Ok(())
    }
}

/// In-memory storage with a shared slot.
///
/// Clones share the slot, so a test can hand one clone to a store and watch
/// through the other what got persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<Vec<StoredRecord>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved collection, if any save has happened yet.
    pub fn saved(&self) -> Option<Vec<StoredRecord>> {
        self.slot.borrow().clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&mut self) -> Result<Option<Vec<StoredRecord>>, QuizError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&mut self, records: &[StoredRecord]) -> Result<(), QuizError> {
        *self.slot.borrow_mut() = Some(records.to_vec());
        Ok(())
    }
}
