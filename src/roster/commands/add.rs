use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::StudentDraft;
use crate::session::EditSession;
use crate::store::{StorageBackend, StudentStore};
use crate::validation::validate;

use super::helpers::indexed_students;

/// Validates `draft` and appends it to the roster.
///
/// Refused while an edit session is open: the form is in update mode then.
pub fn run<B: StorageBackend>(
    store: &mut StudentStore<B>,
    session: &EditSession,
    draft: StudentDraft,
) -> Result<CmdResult> {
    if let Some(index) = session.target_index() {
        return Err(RosterError::EditInProgress(index));
    }

    validate(&draft, store.records(), None)?;

    let student = draft.into_student();
    let durability = store.insert(student.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added: {} ({})",
        student.name, student.student_id
    )));
    result.note_durability(&durability);
    Ok(result
        .with_affected_students(vec![student])
        .with_listed_students(indexed_students(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Field;
    use crate::store::memory::fixtures::{sample_student, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use crate::store::DEFAULT_STORAGE_KEY;
    use crate::validation::FieldError;

    fn ann() -> StudentDraft {
        StudentDraft::new("Ann Lee", "1001", "a@b.com", "5551234567")
    }

    #[test]
    fn adds_and_persists() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &EditSession::Idle, ann()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(result.listed_students.len(), 1);
        assert_eq!(result.affected_students[0].name, "Ann Lee");
        assert_eq!(store.load(), store.records().to_vec());
        assert!(store
            .backend()
            .raw(DEFAULT_STORAGE_KEY)
            .unwrap()
            .contains("\"studentId\": \"1001\""));
    }

    #[test]
    fn stores_trimmed_values() {
        let mut store = InMemoryStore::new();
        let draft = StudentDraft::new(" Ann Lee ", "1001 ", " a@b.com", "5551234567");
        run(&mut store, &EditSession::Idle, draft).unwrap();
        assert_eq!(store.get(0).unwrap().name, "Ann Lee");
        assert_eq!(store.get(0).unwrap().email, "a@b.com");
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = InMemoryStore::new();
        run(&mut store, &EditSession::Idle, ann()).unwrap();

        let second = StudentDraft::new("Bo Chan", "1001", "bo@x.org", "5550000000");
        let err = run(&mut store, &EditSession::Idle, second).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get(Field::StudentId), Some(FieldError::Duplicate));
        assert_eq!(store.len(), 1);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn invalid_candidate_leaves_store_untouched() {
        let mut store = StoreFixture::new().with_students(2).store;
        let before = store.records().to_vec();
        let writes = store.backend().write_count();

        let bad = StudentDraft::new("", "", "", "");
        assert!(run(&mut store, &EditSession::Idle, bad).is_err());
        assert_eq!(store.records(), before.as_slice());
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn refused_while_editing() {
        let mut store = StoreFixture::new().with_students(1).store;
        let mut session = EditSession::Idle;
        session.start(0, sample_student(1));

        let err = run(&mut store, &session, ann()).unwrap_err();
        assert!(matches!(err, RosterError::EditInProgress(idx) if idx.get() == 1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn degraded_write_still_adds_with_warning() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);

        let result = run(&mut store, &EditSession::Idle, ann()).unwrap();
        assert_eq!(store.len(), 1);
        assert!(result.has_level(MessageLevel::Success));
        assert!(result.has_level(MessageLevel::Warning));
    }
}
