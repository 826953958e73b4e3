//! Task data model
//!
//! - `task`: the `Task` record
//! - `filter`: the `Filter` enumeration and its predicate
//! - `task_list`: id-unique collection owning the task lifecycle
//! - `serde_impl`: serialization of `TaskList`

mod filter;
mod serde_impl;
mod task;
mod task_list;

pub use filter::{Filter, ParseFilterError};
pub use task::Task;
pub use task_list::TaskList;
