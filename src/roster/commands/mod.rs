//! # Commands
//!
//! Business logic for every roster operation. Each command takes the store and,
//! where relevant, the edit session explicitly, and returns a [`CmdResult`].
//! Commands never print; user-facing text travels as [`CmdMessage`]s.
//!
//! Mutating commands always return the re-indexed listing taken *after* the
//! mutation, so callers never reuse indexes from before it.

use crate::config::RosterConfig;
use crate::index::IndexedStudent;
use crate::model::Student;
use crate::store::Durability;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<IndexedStudent>,
    /// The record whose edit session was opened by this command.
    pub editing: Option<IndexedStudent>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<IndexedStudent>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Adds a warning when a write did not reach storage.
    pub fn note_durability(&mut self, durability: &Durability) {
        if let Durability::Degraded(reason) = durability {
            self.add_message(CmdMessage::warning(format!(
                "Changes could not be saved and will be lost on exit ({})",
                reason
            )));
        }
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
