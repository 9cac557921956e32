//! # Display Indexes
//!
//! Students are addressed by their 1-based position in the listing (`1`, `2`, ...).
//! The store itself works with 0-based positions, and the conversion happens at the
//! API boundary.
//!
//! Positions are not identities. Deleting student `2` moves every later student up
//! by one, so an index is only meaningful against the listing it was read from.
//! Every mutating command returns a freshly indexed listing, and callers must use
//! that one from then on instead of holding on to old numbers.

use crate::model::Student;
use std::str::FromStr;

/// A user-facing, 1-based index for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Builds an index from a 1-based number. Returns `None` for zero.
    pub fn new(n: usize) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(Self(n))
        }
    }

    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// The 0-based store position this index refers to.
    pub fn position(self) -> usize {
        self.0 - 1
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        match trimmed.parse::<usize>() {
            Ok(n) => Self::new(n).ok_or_else(|| "indexes start at 1".to_string()),
            Err(_) => Err(format!("'{}' is not a student index", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedStudent {
    pub index: DisplayIndex,
    pub student: Student,
}

/// Assigns display indexes to students in their stored order.
pub fn index_students(students: &[Student]) -> Vec<IndexedStudent> {
    students
        .iter()
        .enumerate()
        .map(|(position, student)| IndexedStudent {
            index: DisplayIndex::from_position(position),
            student: student.clone(),
        })
        .collect()
}
