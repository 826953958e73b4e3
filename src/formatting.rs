//! Plain-text rendering of tasks for the CLI

use crate::tarefa::{Filter, Task, TaskList};

/// Format filtered tasks into a display string
///
/// # Arguments
/// * `tasks` - Tasks already selected by `filter`
/// * `filter` - Filter shown in the header
pub fn format_tasks(tasks: &[&Task], filter: Filter) -> String {
    if tasks.is_empty() {
        return format!("No items found (filter: {})", filter);
    }

    let mut result = format!("Found {} item(s) (filter: {}):\n\n", tasks.len(), filter);
    for task in tasks {
        let mark = if task.completed { 'x' } else { ' ' };
        result.push_str(&format!("- [{}] {}: {}\n", mark, task.id, task.text));
    }
    result
}

/// One `<label>: <count>` line per filter
pub fn format_summary(list: &TaskList) -> String {
    Filter::ALL
        .iter()
        .map(|f| format!("{}: {}\n", f, list.count(*f)))
        .collect()
}
