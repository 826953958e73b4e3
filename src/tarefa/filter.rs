use super::task::Task;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Filter used to select which tasks are shown
///
/// Serialized and displayed with the labels the application uses on screen:
/// - `All` ↔ "Todas"
/// - `Pending` ↔ "Pendentes"
/// - `Completed` ↔ "Encerradas"
///
/// Parsing and deserialization accept exactly these labels (case-sensitive,
/// no surrounding whitespace); nothing but a plain string decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Filter {
    /// Every task
    #[default]
    #[serde(rename = "Todas")]
    All,
    /// Tasks not yet completed
    #[serde(rename = "Pendentes")]
    Pending,
    /// Completed tasks
    #[serde(rename = "Encerradas")]
    Completed,
}

/// Error returned when a string is not one of the three filter labels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid filter '{value}'. Valid filters: Todas, Pendentes, Encerradas")]
pub struct ParseFilterError {
    pub value: String,
}

impl Filter {
    /// All filters in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    /// Display label of this filter
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "Todas",
            Filter::Pending => "Pendentes",
            Filter::Completed => "Encerradas",
        }
    }

    /// Check whether a task belongs to the subset selected by this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Select the matching tasks, keeping their order
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }

    /// Count the matching tasks
    pub fn count(&self, tasks: &[Task]) -> usize {
        tasks.iter().filter(|t| self.matches(t)).count()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Todas" => Ok(Filter::All),
            "Pendentes" => Ok(Filter::Pending),
            "Encerradas" => Ok(Filter::Completed),
            _ => Err(ParseFilterError {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Filter {
    type Error = ParseFilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
