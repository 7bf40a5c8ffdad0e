// Task record and creation helpers

use chrono::Local;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single to-do item as persisted to the task file.
///
/// The field set is fixed; unknown keys in the file are rejected on read
/// rather than silently accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
    /// ISO `YYYY-MM-DD`; the zero-padded form keeps lexicographic order
    /// equal to calendar order.
    pub due_date: String,
    pub completed: bool,
    /// `YYYY-MM-DD HH:MM:SS`, set once at creation.
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Next free task id: 1 for an empty list, otherwise max existing id + 1.
///
/// Holes left by deleted tasks are not refilled; taking the max keeps new
/// ids collision-free after arbitrary deletions. Single-process only.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

/// Build a new task and return the input sequence with it appended.
///
/// The input is not mutated. The new task gets a fresh id, `completed`
/// false, and `created_at` stamped from the local clock.
pub fn add_task(
    tasks: &[Task],
    title: &str,
    description: &str,
    priority: Priority,
    category: &str,
    due_date: &str,
) -> Vec<Task> {
    let task = Task {
        id: next_id(tasks),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        category: category.to_string(),
        due_date: due_date.to_string(),
        completed: false,
        created_at: now_stamp(),
    };

    let mut out = tasks.to_vec();
    out.push(task);
    out
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
