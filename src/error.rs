//! Error types for the tarefas crate.

use crate::tarefa::ParseFilterError;
use thiserror::Error;

/// Errors returned by fallible task list, codec and loader operations.
///
/// The model types themselves (`Task`, `Filter`) never fail; errors only
/// appear where values cross a boundary or a collection rule is broken.
#[derive(Debug, Error)]
pub enum TarefaError {
    /// Filter label outside "Todas", "Pendentes", "Encerradas"
    #[error(transparent)]
    InvalidFilter(#[from] ParseFilterError),

    /// A task with this id is already in the list
    #[error("Task '{0}' already exists")]
    DuplicateId(String),

    /// The id counter cannot advance any further
    #[error("No task id left to generate (counter at {0})")]
    IdSpaceExhausted(u32),

    /// No task with this id in the list
    #[error("Task '{0}' not found")]
    TaskNotFound(String),

    /// Format name or file extension not recognised
    #[error("Unknown format '{0}'. Valid formats: toml, json")]
    UnknownFormat(String),

    #[error("TOML decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TarefaError>;
