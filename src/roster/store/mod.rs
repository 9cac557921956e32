//! # Storage Layer
//!
//! [`StudentStore`] owns the ordered student sequence and keeps a durable mirror of
//! it under a single storage key. Raw I/O is delegated to a [`StorageBackend`]:
//!
//! - [`fs_backend::FsBackend`]: production, one `<key>.json` file in the data directory
//! - [`mem_backend::MemBackend`]: in-memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! ├── students.json   # JSON array of {name, studentId, email, contact}
//! └── config.json     # roster configuration
//! ```
//!
//! ## Persistence Rules
//!
//! The whole sequence is written after every mutation, replacing the previous value,
//! so the persisted array always equals the in-memory one.
//!
//! Durability degrades instead of failing. A missing, unreadable or corrupt value
//! loads as an empty sequence, and so does one whose records break the validation
//! rules. A failed write leaves the in-memory mutation in place and reports
//! [`Durability::Degraded`]. The session stays usable either way; changes just
//! won't survive a restart.

use crate::error::{Result, RosterError};
use crate::index::DisplayIndex;
use crate::model::{Student, StudentDraft};
use crate::validation::validate;
use std::path::PathBuf;
use tracing::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use backend::StorageBackend;

pub const DEFAULT_STORAGE_KEY: &str = "students";

/// Whether the last write reached durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Durability {
    Persisted,
    /// The write failed; the in-memory state is ahead of storage.
    Degraded(String),
}

impl Durability {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Durability::Persisted)
    }
}

pub struct StudentStore<B: StorageBackend> {
    backend: B,
    key: String,
    students: Vec<Student>,
    load_warning: Option<String>,
}

impl<B: StorageBackend> StudentStore<B> {
    /// Opens the store under the default storage key and loads it.
    pub fn init(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Opens the store under `key` and loads whatever is persisted there.
    pub fn with_key(backend: B, key: &str) -> Self {
        let mut store = Self {
            backend,
            key: key.to_string(),
            students: Vec::new(),
            load_warning: None,
        };
        match store.read_persisted() {
            Ok(students) => store.students = students,
            Err(reason) => {
                warn!(key = %store.key, %reason, "starting with an empty roster");
                store.load_warning = Some(reason);
            }
        }
        debug!(key = %store.key, count = store.students.len(), "roster loaded");
        store
    }

    /// Reads the persisted sequence. Missing, unreadable or corrupt data yields an
    /// empty sequence.
    pub fn load(&self) -> Vec<Student> {
        self.read_persisted().unwrap_or_else(|reason| {
            warn!(key = %self.key, %reason, "ignoring persisted roster");
            Vec::new()
        })
    }

    fn read_persisted(&self) -> std::result::Result<Vec<Student>, String> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => return Err(format!("could not read saved students: {}", e)),
        };
        let students: Vec<Student> = serde_json::from_str(&raw)
            .map_err(|e| format!("saved students are unreadable and were ignored: {}", e))?;
        check_loaded(&students)?;
        Ok(students)
    }

    /// Writes the full sequence, replacing the previous persisted value.
    pub fn save(&self) -> Durability {
        let written = serde_json::to_string_pretty(&self.students)
            .map_err(RosterError::Serialization)
            .and_then(|content| self.backend.write(&self.key, &content));
        match written {
            Ok(()) => Durability::Persisted,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to persist roster");
                Durability::Degraded(e.to_string())
            }
        }
    }

    /// Appends a student and persists.
    pub fn insert(&mut self, student: Student) -> Durability {
        debug!(student_id = %student.student_id, "insert");
        self.students.push(student);
        self.save()
    }

    /// Overwrites the student at `position`, keeping its place, and persists.
    pub fn replace(&mut self, position: usize, student: Student) -> Result<Durability> {
        let slot = self
            .students
            .get_mut(position)
            .ok_or(RosterError::IndexOutOfRange(DisplayIndex::from_position(
                position,
            )))?;
        debug!(position, student_id = %student.student_id, "replace");
        *slot = student;
        Ok(self.save())
    }

    /// Removes the student at `position`, shifting later ones down, and persists.
    pub fn remove_at(&mut self, position: usize) -> Result<(Student, Durability)> {
        if position >= self.students.len() {
            return Err(RosterError::IndexOutOfRange(DisplayIndex::from_position(
                position,
            )));
        }
        let removed = self.students.remove(position);
        debug!(position, student_id = %removed.student_id, "remove");
        Ok((removed, self.save()))
    }

    pub fn records(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, position: usize) -> Option<&Student> {
        self.students.get(position)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Why the initial load fell back to an empty roster, if it did.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location(&self.key)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Re-applies the record rules to a loaded sequence, each record against the ones
/// before it, so a hand-edited file cannot bring in duplicates or empty fields.
fn check_loaded(students: &[Student]) -> std::result::Result<(), String> {
    for (position, student) in students.iter().enumerate() {
        validate(&StudentDraft::from(student), &students[..position], None).map_err(|errors| {
            format!(
                "saved students are invalid and were ignored: record {}: {}",
                DisplayIndex::from_position(position),
                errors
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::memory::fixtures::{sample_student, StoreFixture};
    use super::memory::InMemoryStore;
    use super::*;

    #[test]
    fn missing_value_loads_empty() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.load_warning().is_none());
    }

    #[test]
    fn corrupt_value_loads_empty_with_warning() {
        let backend = MemBackend::new().with_raw(DEFAULT_STORAGE_KEY, "not json {");
        let store = StudentStore::init(backend);
        assert!(store.is_empty());
        assert!(store.load().is_empty());
        assert!(store.load_warning().unwrap().contains("unreadable"));
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let backend =
            MemBackend::new().with_raw(DEFAULT_STORAGE_KEY, r#"{"name":"not an array"}"#);
        let store = StudentStore::init(backend);
        assert!(store.is_empty());
        assert!(store.load_warning().is_some());
    }

    #[test]
    fn duplicate_ids_load_empty() {
        let raw = r#"[
            {"name":"Ann Lee","studentId":"1001","email":"a@b.com","contact":"5551234567"},
            {"name":"Bo Chan","studentId":"1001","email":"bo@x.org","contact":"5550000000"}
        ]"#;
        let store = StudentStore::init(MemBackend::new().with_raw(DEFAULT_STORAGE_KEY, raw));
        assert!(store.is_empty());
        let warning = store.load_warning().unwrap();
        assert!(warning.contains("record 2"));
        assert!(warning.contains("Student ID already exists"));
    }

    #[test]
    fn empty_or_malformed_fields_load_empty() {
        let raw = r#"[
            {"name":"","studentId":"1","email":"x","contact":"1"}
        ]"#;
        let store = StudentStore::init(MemBackend::new().with_raw(DEFAULT_STORAGE_KEY, raw));
        assert!(store.is_empty());
        assert!(store.load().is_empty());
        assert!(store.load_warning().unwrap().contains("Name is required"));

        let raw = r#"[
            {"name":"Ann Lee","studentId":"1001","email":"a@b.com","contact":"123"}
        ]"#;
        let store = StudentStore::init(MemBackend::new().with_raw(DEFAULT_STORAGE_KEY, raw));
        assert!(store.is_empty());
        assert!(store.load_warning().unwrap().contains("at least 10 digits"));
    }

    #[test]
    fn unreadable_backend_loads_empty() {
        let backend = MemBackend::new();
        backend.set_simulate_read_error(true);
        let store = StudentStore::init(backend);
        assert!(store.is_empty());
        assert!(store.load_warning().unwrap().contains("could not read"));
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let store = StoreFixture::new().with_students(3).store;
        assert_eq!(store.load(), store.records().to_vec());
        let ids: Vec<_> = store.load().into_iter().map(|s| s.student_id).collect();
        assert_eq!(ids, vec!["1001", "1002", "1003"]);
    }

    #[test]
    fn save_is_idempotent() {
        let store = StoreFixture::new().with_students(2).store;
        assert!(store.save().is_persisted());
        let first = store.backend().raw(DEFAULT_STORAGE_KEY).unwrap();
        assert!(store.save().is_persisted());
        let second = store.backend().raw(DEFAULT_STORAGE_KEY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_mutation_persists() {
        let mut store = InMemoryStore::new();
        store.insert(sample_student(1));
        store.insert(sample_student(2));
        store.replace(0, sample_student(3)).unwrap();
        store.remove_at(1).unwrap();
        assert_eq!(store.backend().write_count(), 4);
        assert_eq!(store.load(), store.records().to_vec());
    }

    #[test]
    fn remove_shifts_later_records() {
        let mut store = StoreFixture::new().with_students(4).store;
        let (removed, durability) = store.remove_at(1).unwrap();
        assert!(durability.is_persisted());
        assert_eq!(removed.student_id, "1002");
        let ids: Vec<_> = store.records().iter().map(|s| s.student_id.as_str()).collect();
        assert_eq!(ids, vec!["1001", "1003", "1004"]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = StoreFixture::new().with_students(3).store;
        store.replace(1, sample_student(9)).unwrap();
        assert_eq!(store.get(1).unwrap().student_id, "1009");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        let mut store = StoreFixture::new().with_students(1).store;
        assert!(matches!(
            store.replace(1, sample_student(5)),
            Err(RosterError::IndexOutOfRange(idx)) if idx.get() == 2
        ));
        assert!(matches!(
            store.remove_at(3),
            Err(RosterError::IndexOutOfRange(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        let durability = store.insert(sample_student(1));
        assert!(matches!(durability, Durability::Degraded(_)));
        assert_eq!(store.len(), 1);
        assert!(store.backend().raw(DEFAULT_STORAGE_KEY).is_none());
    }

    #[test]
    fn custom_key_is_isolated() {
        let mut store = StudentStore::with_key(MemBackend::new(), "class_b");
        store.insert(sample_student(1));
        assert!(store.backend().raw("class_b").is_some());
        assert!(store.backend().raw(DEFAULT_STORAGE_KEY).is_none());
        assert_eq!(store.location(), PathBuf::from("memory://class_b"));
    }
}
