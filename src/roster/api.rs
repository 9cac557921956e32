//! # API Facade
//!
//! [`RosterApi`] is the record controller every UI talks to. It owns the
//! [`StudentStore`] and the [`EditSession`], turns user-supplied index strings into
//! [`DisplayIndex`] values, and dispatches to `commands::*`.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: validation and state transitions live in `commands/*.rs`
//! - **I/O**: no stdout, stderr, prompts or process exits
//! - **Confirmation**: callers show [`RosterApi::delete_preview`] to the user and pass
//!   the answer to [`RosterApi::delete`]
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `RosterApi<FsBackend>`
//! - Testing: `RosterApi<MemBackend>`

use crate::commands;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::index::{DisplayIndex, IndexedStudent};
use crate::model::{StudentDraft, StudentPatch};
use crate::session::EditSession;
use crate::store::fs_backend::FsBackend;
use crate::store::{StorageBackend, StudentStore};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct RosterApi<B: StorageBackend> {
    store: StudentStore<B>,
    session: EditSession,
}

impl RosterApi<FsBackend> {
    /// Opens the roster stored in `data_dir` under the configured storage key.
    pub fn open(data_dir: &Path, config: &RosterConfig) -> Self {
        let backend = FsBackend::new(data_dir.to_path_buf());
        Self::new(StudentStore::with_key(backend, &config.storage_key))
    }
}

impl<B: StorageBackend> RosterApi<B> {
    pub fn new(store: StudentStore<B>) -> Self {
        Self {
            store,
            session: EditSession::Idle,
        }
    }

    pub fn add(&mut self, draft: StudentDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.session, draft)
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.store)
    }

    pub fn start_edit<I: AsRef<str>>(&mut self, index: I) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        commands::edit::start(&self.store, &mut self.session, index)
    }

    pub fn commit_edit(&mut self, draft: StudentDraft) -> Result<commands::CmdResult> {
        commands::edit::commit(&mut self.store, &mut self.session, draft)
    }

    pub fn cancel_edit(&mut self) -> Result<commands::CmdResult> {
        commands::edit::cancel(&mut self.session)
    }

    /// Edits and commits in one step, filling unspecified fields from the record.
    ///
    /// Refused while another edit is open. If the change is rejected the temporary
    /// session is closed again, leaving the controller idle.
    pub fn update<I: AsRef<str>>(
        &mut self,
        index: I,
        patch: &StudentPatch,
    ) -> Result<commands::CmdResult> {
        if let Some(open) = self.session.target_index() {
            return Err(RosterError::EditInProgress(open));
        }
        let started = self.start_edit(index)?;
        let current = match started.editing {
            Some(editing) => editing.student,
            None => return Err(RosterError::NoEditSession),
        };

        match self.commit_edit(patch.apply(&current)) {
            Ok(result) => Ok(result),
            Err(e) => {
                self.session.end();
                Err(e)
            }
        }
    }

    /// The student currently at `index`.
    pub fn view<I: AsRef<str>>(&self, index: I) -> Result<IndexedStudent> {
        let index = parse_index(index)?;
        commands::helpers::student_at(&self.store, index)
    }

    pub fn delete_preview<I: AsRef<str>>(&self, index: I) -> Result<IndexedStudent> {
        let index = parse_index(index)?;
        commands::delete::preview(&self.store, index)
    }

    pub fn delete<I: AsRef<str>>(
        &mut self,
        index: I,
        confirmed: bool,
    ) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        commands::delete::run(&mut self.store, &mut self.session, index, confirmed)
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.store.load_warning()
    }

    pub fn storage_path(&self) -> PathBuf {
        self.store.location()
    }

    pub fn store(&self) -> &StudentStore<B> {
        &self.store
    }
}

fn parse_index<I: AsRef<str>>(input: I) -> Result<DisplayIndex> {
    let raw = input.as_ref();
    DisplayIndex::from_str(raw).map_err(RosterError::InvalidIndex)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
