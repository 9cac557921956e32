use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::index::{DisplayIndex, IndexedStudent};
use crate::model::StudentDraft;
use crate::session::EditSession;
use crate::store::{StorageBackend, StudentStore};
use crate::validation::validate;

use super::helpers::{indexed_students, student_at};

/// Opens an edit session on `index` and returns the record to prefill the form with.
/// An already open session is discarded.
pub fn start<B: StorageBackend>(
    store: &StudentStore<B>,
    session: &mut EditSession,
    index: DisplayIndex,
) -> Result<CmdResult> {
    let target = student_at(store, index)?;
    let mut result = CmdResult::default();

    if let Some(previous) = session.target_index() {
        if previous != index {
            result.add_message(CmdMessage::info(format!(
                "Discarded unsaved edit of student {}",
                previous
            )));
        }
    }

    session.start(index.position(), target.student.clone());
    result.add_message(CmdMessage::info(format!(
        "Editing student {}: {}",
        index, target.student.name
    )));
    result.editing = Some(target);
    Ok(result)
}

/// Validates `draft` against every other record and replaces the edited record with it.
///
/// On rejection the session stays open so the user can correct the form.
pub fn commit<B: StorageBackend>(
    store: &mut StudentStore<B>,
    session: &mut EditSession,
    draft: StudentDraft,
) -> Result<CmdResult> {
    let position = session.target().ok_or(RosterError::NoEditSession)?;

    validate(&draft, store.records(), Some(position))?;

    let student = draft.into_student();
    let durability = match store.replace(position, student.clone()) {
        Ok(durability) => durability,
        Err(e) => {
            session.end();
            return Err(e);
        }
    };
    session.end();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student updated ({}): {}",
        DisplayIndex::from_position(position),
        student.name
    )));
    result.note_durability(&durability);
    Ok(result
        .with_affected_students(vec![student])
        .with_listed_students(indexed_students(store)))
}

/// Closes the edit session without touching the store.
pub fn cancel(session: &mut EditSession) -> Result<CmdResult> {
    match session.end() {
        EditSession::Idle => Err(RosterError::NoEditSession),
        EditSession::Editing { position, original } => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "Edit of student {} cancelled",
                DisplayIndex::from_position(position)
            )));
            result.editing = Some(IndexedStudent {
                index: DisplayIndex::from_position(position),
                student: original,
            });
            Ok(result)
        }
    }
}
