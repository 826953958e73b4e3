//! Common test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use tarefas::{Task, TaskList};
use tempfile::NamedTempFile;

/// Create a test task with an explicit completion flag
pub fn create_test_task(id: &str, text: &str, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        text: text.to_string(),
        completed,
    }
}

/// "Buy milk" pending, "Pay bills" done, "Call mom" pending
pub fn sample_list() -> TaskList {
    let mut list = TaskList::new();
    list.insert(create_test_task("1", "Buy milk", false)).unwrap();
    list.insert(create_test_task("2", "Pay bills", true)).unwrap();
    list.insert(create_test_task("3", "Call mom", false)).unwrap();
    list
}

/// Write content to a temporary file with the given extension
pub fn write_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("tarefas-test-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
