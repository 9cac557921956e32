use serde::{Deserialize, Serialize};

/// A validated student record.
///
/// Serialized with exactly four string keys: `name`, `studentId`, `email`, `contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Student {
    pub name: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub email: String,
    pub contact: String,
}

/// Unvalidated form input for a student.
///
/// Drafts are what the user typed; a `Student` only exists once a draft has
/// passed validation (see [`crate::validation::validate`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub contact: String,
}

impl StudentDraft {
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    /// Returns a copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            student_id: self.student_id.trim().to_string(),
            email: self.email.trim().to_string(),
            contact: self.contact.trim().to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::StudentId => &self.student_id,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::StudentId => self.student_id = value,
            Field::Email => self.email = value,
            Field::Contact => self.contact = value,
        }
    }

    // Only reachable through validation, which guarantees the trimmed fields are well formed.
    pub(crate) fn into_student(self) -> Student {
        let draft = self.trimmed();
        Student {
            name: draft.name,
            student_id: draft.student_id,
            email: draft.email,
            contact: draft.contact,
        }
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            student_id: student.student_id.clone(),
            email: student.email.clone(),
            contact: student.contact.clone(),
        }
    }
}

/// A partial change to a student. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.student_id.is_none()
            && self.email.is_none()
            && self.contact.is_none()
    }

    /// Builds the full candidate that replaces `current`.
    pub fn apply(&self, current: &Student) -> StudentDraft {
        let mut draft = StudentDraft::from(current);
        let changes = [
            (Field::Name, &self.name),
            (Field::StudentId, &self.student_id),
            (Field::Email, &self.email),
            (Field::Contact, &self.contact),
        ];
        for (field, value) in changes {
            if let Some(value) = value {
                draft.set(field, value.clone());
            }
        }
        draft
    }
}

/// The four fields of a student record, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    StudentId,
    Email,
    Contact,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::StudentId, Field::Email, Field::Contact];

    /// The persisted key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::StudentId => "studentId",
            Field::Email => "email",
            Field::Contact => "contact",
        }
    }

    /// Human readable label used in messages and prompts.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::StudentId => "Student ID",
            Field::Email => "Email",
            Field::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
