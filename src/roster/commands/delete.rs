use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, IndexedStudent};
use crate::session::EditSession;
use crate::store::{StorageBackend, StudentStore};
use tracing::debug;

use super::helpers::{indexed_students, resolve_index, student_at};

/// Returns the student that `run` would delete, without deleting anything.
///
/// Use this to show a confirmation prompt before calling `run`.
pub fn preview<B: StorageBackend>(
    store: &StudentStore<B>,
    index: DisplayIndex,
) -> Result<IndexedStudent> {
    student_at(store, index)
}

/// Removes the student at `index` once the user has confirmed.
///
/// **Important**: This function does NOT prompt. Without `confirmed` nothing changes.
///
/// If the removal moves or removes the record being edited, the edit session is
/// cancelled so it never points at the wrong record.
pub fn run<B: StorageBackend>(
    store: &mut StudentStore<B>,
    session: &mut EditSession,
    index: DisplayIndex,
    confirmed: bool,
) -> Result<CmdResult> {
    let position = resolve_index(store, index)?;
    let mut result = CmdResult::default();

    if !confirmed {
        result.add_message(CmdMessage::info("Delete cancelled"));
        return Ok(result.with_listed_students(indexed_students(store)));
    }

    let (removed, durability) = store.remove_at(position)?;
    result.add_message(CmdMessage::success(format!(
        "Student deleted ({}): {}",
        index, removed.name
    )));

    if session.on_removed(position) {
        debug!(position, "edit session cancelled by delete");
        result.add_message(CmdMessage::warning(
            "The edit in progress was cancelled because the list changed",
        ));
    }

    result.note_durability(&durability);
    Ok(result
        .with_affected_students(vec![removed])
        .with_listed_students(indexed_students(store)))
}
