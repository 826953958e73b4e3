use super::filter::Filter;
use super::task::Task;
use crate::error::{Result, TarefaError};
use tracing::debug;

/// Ordered collection of tasks with unique ids
///
/// The list owns the task lifecycle: it generates ids for new tasks,
/// rejects duplicates, and applies toggles, edits and removals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    /// Tasks in insertion order
    ///
    /// A Vec keeps display order stable and produces stable diffs when the
    /// list is encoded. Lists are small enough that linear id lookup is fine.
    pub(crate) tasks: Vec<Task>,

    /// Counter for generating unique task IDs
    pub task_counter: u32,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TaskList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task ID
    ///
    /// IDs are the decimal value of the counter. Values already taken by
    /// externally inserted tasks are skipped.
    ///
    /// # Errors
    /// `IdSpaceExhausted` once the counter reaches `u32::MAX`; the counter is
    /// left unchanged
    pub fn generate_task_id(&mut self) -> Result<String> {
        let mut next = self.task_counter;
        loop {
            next = next
                .checked_add(1)
                .ok_or(TarefaError::IdSpaceExhausted(self.task_counter))?;
            let id = next.to_string();
            if self.find(&id).is_none() {
                self.task_counter = next;
                return Ok(id);
            }
        }
    }

    /// Create a pending task with a fresh ID and append it
    ///
    /// # Arguments
    /// * `text` - Description of the new task
    ///
    /// # Returns
    /// A reference to the created task
    ///
    /// # Errors
    /// `IdSpaceExhausted` when no fresh ID can be generated
    pub fn add(&mut self, text: impl Into<String>) -> Result<&Task> {
        let id = self.generate_task_id()?;
        debug!(id = %id, "adding task");
        self.tasks.push(Task::new(id, text));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Append a task created elsewhere
    ///
    /// # Errors
    /// `DuplicateId` if a task with the same ID is already in the list
    pub fn insert(&mut self, task: Task) -> Result<()> {
        if self.find(&task.id).is_some() {
            return Err(TarefaError::DuplicateId(task.id));
        }
        debug!(id = %task.id, "inserting task");
        self.tasks.push(task);
        Ok(())
    }

    /// Find a task by its ID
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TarefaError::TaskNotFound(id.to_string()))
    }

    /// Flip the completion flag of a task
    ///
    /// # Returns
    /// The new value of `completed`
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let task = self.find_mut(id)?;
        task.toggle();
        debug!(id, completed = task.completed, "toggled task");
        Ok(task.completed)
    }

    /// Replace the description of a task
    pub fn edit_text(&mut self, id: &str, text: impl Into<String>) -> Result<()> {
        let task = self.find_mut(id)?;
        task.set_text(text);
        debug!(id, "edited task text");
        Ok(())
    }

    /// Remove a task and return it
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        debug!(id, "removing task");
        Some(self.tasks.remove(pos))
    }

    /// Remove every completed task
    ///
    /// # Returns
    /// How many tasks were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_pending);
        let removed = before - self.tasks.len();
        debug!(removed, "cleared completed tasks");
        removed
    }

    /// Tasks selected by a filter, in list order
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        filter.apply(&self.tasks)
    }

    /// Number of tasks selected by a filter
    pub fn count(&self, filter: Filter) -> usize {
        filter.count(&self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
