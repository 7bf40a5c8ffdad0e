// Query predicates over the task list
//
// Every function here is a pure, single-pass selection that preserves the
// input order and leaves the input untouched.

use crate::task::{Task, today};

/// Keep tasks whose priority's textual form equals `priority` exactly.
///
/// Matching is case-sensitive; an unknown value yields an empty result
/// rather than an error.
pub fn by_priority(tasks: &[Task], priority: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.priority.as_str() == priority)
        .cloned()
        .collect()
}

/// Keep tasks whose category equals `category` exactly (case-sensitive).
pub fn by_category(tasks: &[Task], category: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.category == category)
        .cloned()
        .collect()
}

/// Keep tasks whose completion flag equals `completed`.
pub fn by_completion(tasks: &[Task], completed: bool) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.completed == completed)
        .cloned()
        .collect()
}

/// Case-insensitive substring search over title and description.
///
/// An empty query matches every task.
pub fn search(tasks: &[Task], query: &str) -> Vec<Task> {
    let query = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Incomplete tasks whose due date is strictly before today.
pub fn overdue(tasks: &[Task]) -> Vec<Task> {
    overdue_as_of(tasks, &today())
}

/// Incomplete tasks whose due date is strictly before `today`.
///
/// The comparison is lexicographic on `YYYY-MM-DD` strings, which matches
/// calendar order only because both sides are zero-padded ISO dates.
pub fn overdue_as_of(tasks: &[Task], today: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| !t.completed && t.due_date.as_str() < today)
        .cloned()
        .collect()
}
