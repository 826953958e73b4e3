//! Serialization and deserialization implementations for TaskList
//!
//! Decoding goes through a helper struct so the uniqueness of task ids can be
//! checked before a `TaskList` is handed out.

use super::task::Task;
use super::task_list::TaskList;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TaskListHelper {
    #[serde(default)]
    task_counter: u32,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = TaskListHelper::deserialize(deserializer)?;

        let mut seen = HashSet::new();
        for task in &helper.tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(D::Error::custom(format!(
                    "duplicate task id '{}'",
                    task.id
                )));
            }
        }

        Ok(TaskList {
            tasks: helper.tasks,
            task_counter: helper.task_counter,
        })
    }
}

impl Serialize for TaskList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TaskList", 2)?;
        // Counter goes first so TOML keeps it out of the [[tasks]] tables
        if self.task_counter != 0 {
            state.serialize_field("task_counter", &self.task_counter)?;
        } else {
            state.skip_field("task_counter")?;
        }
        state.serialize_field("tasks", &self.tasks)?;
        state.end()
    }
}
