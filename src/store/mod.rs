//! Single-file JSON persistence.
//!
//! Each collection lives in one JSON entry under the data directory, read
//! once at open and fully overwritten on every mutation. There is no partial
//! write, no merge, and no schema versioning: a malformed or missing entry
//! silently falls back to the built-in defaults, with a tracing warning as
//! the only trace.

use crate::io::formats::json;
use crate::models::{PrdDocument, PrdSection, Record, RecordId, RecordPatch, seed_records};
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn write_entry(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::OperationFailed {
            operation: "create_data_dir".to_string(),
            cause: e.to_string(),
        })?;
    }

    fs::write(path, contents).map_err(|e| Error::OperationFailed {
        operation: "write_store".to_string(),
        cause: e.to_string(),
    })
}

/// The mutable record collection, backed by one JSON file.
///
/// Storage order is insertion order; display order is derived by the scoring
/// engine and never written back.
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    /// Opens the store, reading the persisted entry once.
    ///
    /// A missing, unreadable, or malformed entry falls back to the seed
    /// records without surfacing an error.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = Self::load(&path).unwrap_or_else(|| {
            tracing::warn!(path = %path.display(), "no usable record state, using seed records");
            seed_records()
        });

        Self { path, records }
    }

    fn load(path: &Path) -> Option<Vec<Record>> {
        let text = fs::read_to_string(path).ok()?;
        json::import(&text).ok()
    }

    /// Returns the records in storage order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Appends a record and persists the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    pub fn add(&mut self, record: Record) -> Result<()> {
        self.records.push(record);
        self.persist()
    }

    /// Applies a partial update to the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown id, or an error if the entry
    /// cannot be written.
    pub fn update(&mut self, id: &RecordId, patch: &RecordPatch) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| Error::InvalidInput(format!("no record with id {id}")))?;

        patch.apply(record);
        self.persist()
    }

    /// Removes the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown id, or an error if the entry
    /// cannot be written.
    pub fn remove(&mut self, id: &RecordId) -> Result<()> {
        let index = self
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| Error::InvalidInput(format!("no record with id {id}")))?;

        self.records.remove(index);
        self.persist()
    }

    /// Replaces the whole collection (the import path).
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    pub fn replace_all(&mut self, records: Vec<Record>) -> Result<()> {
        self.records = records;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let text = json::export(&self.records)?;
        write_entry(&self.path, &text)
    }
}

/// The stored PRD document, backed by one JSON file.
pub struct PrdStore {
    path: PathBuf,
    document: PrdDocument,
}

impl PrdStore {
    /// Opens the store, reading the persisted entry once.
    ///
    /// A missing or malformed entry falls back to an empty document.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let document = Self::load(&path).unwrap_or_else(|| {
            tracing::warn!(path = %path.display(), "no usable PRD state, starting empty");
            PrdDocument::default()
        });

        Self { path, document }
    }

    fn load(path: &Path) -> Option<PrdDocument> {
        let text = fs::read_to_string(path).ok()?;
        serde_json::from_str(&text).ok()
    }

    /// Returns the stored document.
    #[must_use]
    pub const fn document(&self) -> &PrdDocument {
        &self.document
    }

    /// Sets the document title and persists.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.document.title = title.into();
        self.persist()
    }

    /// Replaces a section's items and persists.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    pub fn set_section(&mut self, section: PrdSection, items: Vec<String>) -> Result<()> {
        self.document.set_items(section, items);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.document).map_err(|e| {
            Error::OperationFailed {
                operation: "write_prd".to_string(),
                cause: e.to_string(),
            }
        })?;
        write_entry(&self.path, &text)
    }
}
