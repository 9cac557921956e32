//! Edit session state.
//!
//! ```text
//!            start_edit(i)
//!   Idle  ───────────────▶  Editing(i)
//!    ▲                          │
//!    └── commit (valid) ────────┤
//!    └── cancel ────────────────┤
//!    └── delete(j), j <= i ─────┘
//! ```
//!
//! At most one session is active. It is never persisted.

use crate::index::DisplayIndex;
use crate::model::Student;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        position: usize,
        /// Snapshot of the record when editing started, used to prefill the form.
        original: Student,
    },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    /// Position of the record being edited.
    pub fn target(&self) -> Option<usize> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { position, .. } => Some(*position),
        }
    }

    pub fn target_index(&self) -> Option<DisplayIndex> {
        self.target().map(DisplayIndex::from_position)
    }

    pub fn original(&self) -> Option<&Student> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { original, .. } => Some(original),
        }
    }

    pub fn start(&mut self, position: usize, original: Student) {
        *self = EditSession::Editing { position, original };
    }

    /// Ends the session, returning what it was.
    pub fn end(&mut self) -> EditSession {
        std::mem::take(self)
    }

    /// Reacts to the removal of `position`. A deletion at or before the target moves
    /// or removes the record being edited, so the session is dropped.
    ///
    /// Returns true if an active session was cancelled.
    pub fn on_removed(&mut self, position: usize) -> bool {
        match self.target() {
            Some(target) if position <= target => {
                *self = EditSession::Idle;
                true
            }
            _ => false,
        }
    }
}
