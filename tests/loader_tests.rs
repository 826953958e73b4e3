//! TaskFile loading tests
mod common;

use common::{create_test_task, write_temp_file};
use tarefas::{Filter, Format, TarefaError, TaskFile};

const TOML_LIST: &str = r#"
task_counter = 2

[[tasks]]
id = "1"
text = "Buy milk"
completed = false

[[tasks]]
id = "2"
text = "Pay bills"
completed = true
"#;

const JSON_LIST: &str = r#"{
  "tasks": [
    {"id": "1", "text": "Buy milk", "completed": false},
    {"id": "2", "text": "Pay bills", "completed": true}
  ]
}"#;

// A .toml file is decoded as TOML
#[test]
fn test_load_toml_file() {
    let file = write_temp_file(TOML_LIST, ".toml");
    let task_file = TaskFile::new(file.path());
    assert_eq!(task_file.format().unwrap(), Format::Toml);

    let list = task_file.load().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.task_counter, 2);
    assert_eq!(list.filtered(Filter::Pending), [&create_test_task("1", "Buy milk", false)]);
}

// A .json file is decoded as JSON
#[test]
fn test_load_json_file() {
    let file = write_temp_file(JSON_LIST, ".json");
    let list = TaskFile::new(file.path()).load().unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(
        list.filtered(Filter::Completed),
        [&create_test_task("2", "Pay bills", true)]
    );
}

// An explicit format overrides the extension
#[test]
fn test_load_with_format_override() {
    let file = write_temp_file(JSON_LIST, ".txt");
    assert!(matches!(
        TaskFile::new(file.path()).load(),
        Err(TarefaError::UnknownFormat(ref ext)) if ext == "txt"
    ));

    let list = TaskFile::new(file.path())
        .with_format(Format::Json)
        .load()
        .unwrap();
    assert_eq!(list.len(), 2);
}

// A missing file is an I/O error, not an empty list
#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    assert!(matches!(
        TaskFile::new(&path).load(),
        Err(TarefaError::Io(_))
    ));
}

// Content in the wrong format fails to decode
#[test]
fn test_load_wrong_content() {
    let file = write_temp_file(JSON_LIST, ".toml");
    assert!(matches!(
        TaskFile::new(file.path()).load(),
        Err(TarefaError::TomlDecode(_))
    ));
}

// An empty file loads as an empty list
#[test]
fn test_load_empty_toml_file() {
    let file = write_temp_file("", ".toml");
    let list = TaskFile::new(file.path()).load().unwrap();
    assert!(list.is_empty());
}

// path returns the file the handle was created with
#[test]
fn test_task_file_path() {
    let file = write_temp_file(TOML_LIST, ".toml");
    let task_file = TaskFile::new(file.path());
    assert_eq!(task_file.path(), file.path());
}
