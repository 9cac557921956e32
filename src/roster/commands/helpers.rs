use crate::error::{Result, RosterError};
use crate::index::{index_students, DisplayIndex, IndexedStudent};
use crate::store::{StorageBackend, StudentStore};

pub fn indexed_students<B: StorageBackend>(store: &StudentStore<B>) -> Vec<IndexedStudent> {
    index_students(store.records())
}

/// Resolves a display index against the current listing.
pub fn resolve_index<B: StorageBackend>(
    store: &StudentStore<B>,
    index: DisplayIndex,
) -> Result<usize> {
    let position = index.position();
    if position < store.len() {
        Ok(position)
    } else {
        Err(RosterError::IndexOutOfRange(index))
    }
}

pub fn student_at<B: StorageBackend>(
    store: &StudentStore<B>,
    index: DisplayIndex,
) -> Result<IndexedStudent> {
    let position = resolve_index(store, index)?;
    let student = store
        .get(position)
        .cloned()
        .ok_or(RosterError::IndexOutOfRange(index))?;
    Ok(IndexedStudent { index, student })
}
