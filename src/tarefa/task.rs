use serde::{Deserialize, Serialize};

/// A single to-do item
///
/// All three fields are required when decoding and unknown keys are rejected,
/// so a decoded `Task` always has exactly this shape. `id` is never rewritten
/// by any operation in this crate once the task exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Unique identifier, assigned by whoever creates the task
    pub id: String,
    /// Human-readable description
    pub text: String,
    /// Whether the task has been marked done
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    ///
    /// # Arguments
    /// * `id` - Identifier for the task; uniqueness is the caller's concern
    /// * `text` - Description of the task
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Replace the description
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}
