//! Encoding and decoding of tasks and task lists
//!
//! TOML is the primary file format; JSON is accepted for lists exported by
//! other tools. Single tasks can also be converted to and from a generic
//! key-value table.

use crate::error::{Result, TarefaError};
use crate::tarefa::{Task, TaskList};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Text format of a task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Infer the format from a file extension
    ///
    /// # Errors
    /// `UnknownFormat` when the path has no extension or an unrecognised one
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.to_ascii_lowercase().parse()
    }
}

impl FromStr for Format {
    type Err = TarefaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            _ => Err(TarefaError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Toml => f.write_str("toml"),
            Format::Json => f.write_str("json"),
        }
    }
}

/// Encode a task list as text
pub fn encode_list(list: &TaskList, format: Format) -> Result<String> {
    let content = match format {
        Format::Toml => toml::to_string_pretty(list)?,
        Format::Json => serde_json::to_string_pretty(list)?,
    };
    Ok(content)
}

/// Decode a task list from text
///
/// # Errors
/// Decoding errors for malformed input, tasks with missing or extra fields,
/// non-boolean `completed` values and duplicate task ids
pub fn decode_list(content: &str, format: Format) -> Result<TaskList> {
    let list = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    Ok(list)
}

/// Convert a task into a generic key-value table
pub fn task_to_table(task: &Task) -> Result<toml::Table> {
    match toml::Value::try_from(task)? {
        toml::Value::Table(table) => Ok(table),
        other => Err(TarefaError::TomlEncode(serde::ser::Error::custom(format!(
            "task serialized to non-table value: {other}"
        )))),
    }
}

/// Rebuild a task from a generic key-value table
///
/// The table must hold exactly `id`, `text` and `completed` with the right
/// types; nothing is coerced.
pub fn task_from_table(table: toml::Table) -> Result<Task> {
    let task = toml::Value::Table(table).try_into()?;
    Ok(task)
}
