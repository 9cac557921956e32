use crate::index::DisplayIndex;
use crate::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("{0}")]
    Validation(FieldErrors),

    #[error("No student at index {0}")]
    IndexOutOfRange(DisplayIndex),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("No edit in progress")]
    NoEditSession,

    #[error("Student {0} is being edited; update or cancel first")]
    EditInProgress(DisplayIndex),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl RosterError {
    /// Field errors carried by a rejected candidate, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            RosterError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for RosterError {
    fn from(errors: FieldErrors) -> Self {
        RosterError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
