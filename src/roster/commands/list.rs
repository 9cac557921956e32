use crate::commands::{CmdMessage, CmdResult};
use crate::store::{StorageBackend, StudentStore};

use super::helpers::indexed_students;

pub fn run<B: StorageBackend>(store: &StudentStore<B>) -> CmdResult {
    let mut result = CmdResult::default().with_listed_students(indexed_students(store));
    if let Some(warning) = store.load_warning() {
        result.add_message(CmdMessage::warning(warning));
    }
    result
}
