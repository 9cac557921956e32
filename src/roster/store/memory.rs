use super::mem_backend::MemBackend;
use super::StudentStore;

pub type InMemoryStore = StudentStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        StudentStore::init(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Student;

    /// A well-formed student whose ID is `1000 + n`.
    pub fn sample_student(n: usize) -> Student {
        let letter = (b'A' + (n % 26) as u8) as char;
        Student {
            name: format!("Student {}", letter),
            student_id: format!("{}", 1000 + n),
            email: format!("student{}@school.edu", n),
            contact: format!("55500{:05}", n),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Appends `count` students with IDs 1001, 1002, ...
        pub fn with_students(mut self, count: usize) -> Self {
            let start = self.store.len();
            for i in 0..count {
                self.store.insert(sample_student(start + i + 1));
            }
            self
        }

        pub fn with_student(mut self, student: Student) -> Self {
            self.store.insert(student);
            self
        }
    }
}
