//! Tarefas Library
//!
//! Data model for a todo-list application: a [`Task`] record and a closed
//! [`Filter`] enumeration whose labels ("Todas", "Pendentes", "Encerradas")
//! select all, pending or completed tasks.
//!
//! # Architecture
//!
//! - **Model**: `tarefa` module - `Task`, `Filter` and the `TaskList` collection
//! - **Codec**: `codec` module - TOML / JSON and key-value conversions
//! - **Loader**: `loader` module - read-only loading of task list files
//! - **Formatting**: `formatting` module - plain-text output for the CLI
//!
//! # Example
//!
//! ```
//! use tarefas::{Filter, TaskList};
//!
//! let mut list = TaskList::new();
//! list.add("Buy milk").unwrap();
//! let id = list.add("Pay bills").unwrap().id.clone();
//! list.toggle(&id).unwrap();
//!
//! let pending = list.filtered("Pendentes".parse::<Filter>().unwrap());
//! assert_eq!(pending.len(), 1);
//! assert_eq!(pending[0].text, "Buy milk");
//! ```

pub mod codec;
pub mod error;
pub mod formatting;
pub mod loader;
pub mod tarefa;

// Re-export commonly used types
pub use codec::Format;
pub use error::TarefaError;
pub use loader::TaskFile;
pub use tarefa::{Filter, ParseFilterError, Task, TaskList};
