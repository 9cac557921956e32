//! Student record validation.
//!
//! Checks run in a fixed order and stop at the first failing stage:
//!
//! 1. Presence: every field must be non-empty after trimming. All empty fields are
//!    reported together.
//! 2. Name: letters and spaces only.
//! 3. Student ID: digits only.
//! 4. Email: `local@domain.tld` shape with no whitespace.
//! 5. Contact: digits only, at least [`MIN_CONTACT_DIGITS`] of them.
//! 6. Student ID uniqueness, ignoring the record being edited.
//!
//! Stages 2 to 6 report exactly one field. Validation never touches the records it
//! checks against.

use crate::model::{Field, Student, StudentDraft};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const MIN_CONTACT_DIGITS: usize = 10;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]*$").expect("valid name regex"));
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Field is empty after trimming
    Required,
    /// Field contains characters or a shape its format does not allow
    InvalidFormat,
    /// Field has fewer characters than the minimum
    TooShort { min: usize },
    /// Another student already uses this value
    Duplicate,
}

impl FieldError {
    pub fn message(self, field: Field) -> String {
        match (self, field) {
            (FieldError::Required, field) => format!("{} is required", field.label()),
            (FieldError::InvalidFormat, Field::Name) => {
                "Name must contain only letters and spaces".to_string()
            }
            (FieldError::InvalidFormat, Field::StudentId) => {
                "Student ID must contain only digits".to_string()
            }
            (FieldError::InvalidFormat, Field::Email) => {
                "Please enter a valid email address".to_string()
            }
            (FieldError::InvalidFormat, Field::Contact) => {
                "Contact must contain only digits".to_string()
            }
            (FieldError::TooShort { min }, field) => {
                format!("{} must be at least {} digits", field.label(), min)
            }
            (FieldError::Duplicate, field) => format!("{} already exists", field.label()),
        }
    }
}

/// Per-field validation failures, ordered by form position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn single(field: Field, error: FieldError) -> Self {
        let mut errors = Self::default();
        errors.insert(field, error);
        errors
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.message(field))
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// `(field, message)` pairs in form order.
    pub fn messages(&self) -> Vec<(Field, String)> {
        self.iter().map(|(f, e)| (f, e.message(f))).collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .messages()
            .into_iter()
            .map(|(_, m)| m)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Validates `candidate` against the format rules and against `records`.
///
/// `edit_target` is the position of the record being edited, which is skipped by the
/// uniqueness check so a record can keep its own ID.
pub fn validate(
    candidate: &StudentDraft,
    records: &[Student],
    edit_target: Option<usize>,
) -> Result<(), FieldErrors> {
    let draft = candidate.trimmed();

    let mut missing = FieldErrors::default();
    for field in Field::ALL {
        if draft.get(field).is_empty() {
            missing.insert(field, FieldError::Required);
        }
    }
    if !missing.is_empty() {
        return Err(missing);
    }

    if !is_valid_name(&draft.name) {
        return Err(FieldErrors::single(Field::Name, FieldError::InvalidFormat));
    }
    if !is_digits(&draft.student_id) {
        return Err(FieldErrors::single(
            Field::StudentId,
            FieldError::InvalidFormat,
        ));
    }
    if !is_valid_email(&draft.email) {
        return Err(FieldErrors::single(Field::Email, FieldError::InvalidFormat));
    }
    if !is_digits(&draft.contact) {
        return Err(FieldErrors::single(Field::Contact, FieldError::InvalidFormat));
    }
    if draft.contact.len() < MIN_CONTACT_DIGITS {
        return Err(FieldErrors::single(
            Field::Contact,
            FieldError::TooShort {
                min: MIN_CONTACT_DIGITS,
            },
        ));
    }
    if is_duplicate_id(&draft.student_id, records, edit_target) {
        return Err(FieldErrors::single(Field::StudentId, FieldError::Duplicate));
    }

    Ok(())
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

pub fn is_digits(value: &str) -> bool {
    DIGITS_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether any record other than the one at `edit_target` already uses `student_id`.
pub fn is_duplicate_id(student_id: &str, records: &[Student], edit_target: Option<usize>) -> bool {
    records
        .iter()
        .enumerate()
        .any(|(pos, s)| Some(pos) != edit_target && s.student_id == student_id)
}

/// Keeps only ASCII digits. Applied to ID and contact input as it is typed.
pub fn filter_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keeps only ASCII letters and spaces. Applied to name input as it is typed.
pub fn filter_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect()
}

/// Applies the typing filter that belongs to `field`. Email is left untouched.
pub fn filter_input(field: Field, input: &str) -> String {
    match field {
        Field::Name => filter_name(input),
        Field::StudentId | Field::Contact => filter_digits(input),
        Field::Email => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> StudentDraft {
        StudentDraft::new("Ann Lee", "1001", "a@b.com", "5551234567")
    }

    fn stored(id: &str) -> Student {
        StudentDraft::new("Bo Chan", id, "bo@x.org", "5550000000").into_student()
    }

    #[test]
    fn accepts_well_formed_candidate() {
        assert_eq!(validate(&draft(), &[], None), Ok(()));
    }

    #[test]
    fn reports_every_missing_field_together() {
        let empty = StudentDraft::new("", "  ", "", "\t");
        let errors = validate(&empty, &[], None).unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(FieldError::Required));
        }
        assert_eq!(
            errors.message(Field::StudentId).unwrap(),
            "Student ID is required"
        );
    }

    #[test]
    fn presence_failure_hides_format_errors() {
        let mut candidate = draft();
        candidate.name = "R2D2".into();
        candidate.contact = String::new();
        let errors = validate(&candidate, &[], None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Contact), Some(FieldError::Required));
    }

    #[test]
    fn name_allows_interior_and_trailing_spaces() {
        assert!(is_valid_name("Ann Lee"));
        assert!(is_valid_name("Ann  Marie Lee "));
        assert!(!is_valid_name("Ann-Lee"));
        assert!(!is_valid_name("Ann3"));
        assert!(!is_valid_name("Zoë"));
    }

    #[test]
    fn stops_at_first_format_failure() {
        let candidate = StudentDraft::new("Ann1", "10a1", "nope", "12");
        let errors = validate(&candidate, &[], None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn student_id_must_be_digits() {
        let mut candidate = draft();
        candidate.student_id = "10-01".into();
        let errors = validate(&candidate, &[], None).unwrap_err();
        assert_eq!(errors.get(Field::StudentId), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn contact_digits_checked_before_length() {
        let mut candidate = draft();
        candidate.contact = "555-12".into();
        let errors = validate(&candidate, &[], None).unwrap_err();
        assert_eq!(errors.get(Field::Contact), Some(FieldError::InvalidFormat));

        candidate.contact = "123".into();
        let errors = validate(&candidate, &[], None).unwrap_err();
        assert_eq!(
            errors.get(Field::Contact),
            Some(FieldError::TooShort { min: 10 })
        );
        assert_eq!(
            errors.message(Field::Contact).unwrap(),
            "Contact must be at least 10 digits"
        );
    }

    #[test]
    fn rejects_duplicate_student_id() {
        let records = vec![stored("1001")];
        let errors = validate(&draft(), &records, None).unwrap_err();
        assert_eq!(errors.get(Field::StudentId), Some(FieldError::Duplicate));
        assert_eq!(errors.to_string(), "Student ID already exists");
    }

    #[test]
    fn duplicate_check_skips_edit_target() {
        let records = vec![stored("1001"), stored("2002")];
        assert_eq!(validate(&draft(), &records, Some(0)), Ok(()));

        let errors = validate(&draft(), &records, Some(1)).unwrap_err();
        assert_eq!(errors.get(Field::StudentId), Some(FieldError::Duplicate));
    }

    #[test]
    fn duplicate_match_is_exact_after_trimming() {
        let records = vec![stored("1001")];
        let mut candidate = draft();
        candidate.student_id = " 1001 ".into();
        assert!(validate(&candidate, &records, None).is_err());

        candidate.student_id = "01001".into();
        assert!(validate(&candidate, &records, None).is_ok());
    }

    #[test]
    fn validation_leaves_records_untouched() {
        let records = vec![stored("1001")];
        let before = records.clone();
        for _ in 0..3 {
            let _ = validate(&draft(), &records, None);
        }
        assert_eq!(records, before);
    }

    #[test]
    fn input_filters() {
        assert_eq!(filter_digits("(555) 123-4567"), "5551234567");
        assert_eq!(filter_name("Ann-Marie L33"), "AnnMarie L");
        assert_eq!(filter_input(Field::Email, " a@b.com"), " a@b.com");
        assert_eq!(filter_input(Field::StudentId, "id 42"), "42");
    }
}
