// Flat-file persistence for the task list

use crate::task::Task;
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default task file name, relative to the working directory.
pub const DEFAULT_PATH: &str = "tasks.json";

/// Persistent store owning the path of the task file.
///
/// The file holds the full collection as a pretty-printed JSON array and is
/// rewritten in its entirety on every save. There is no locking and no
/// atomic rename; exactly one process is assumed to touch the file.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tasks from the file.
    ///
    /// A missing file is the normal cold-start state and yields an empty
    /// list without any diagnostic. A file containing invalid JSON also
    /// yields an empty list, after a warning naming the file; the file
    /// itself is left untouched on disk.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read task file {}", self.path.display()))?;

        match serde_json::from_str(&contents) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                warn!(
                    file = %self.path.display(),
                    error = %e,
                    "Task file contains invalid JSON, starting with an empty list"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serialize the full task list and overwrite the file.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write task file {}", self.path.display()))
    }

    /// Remove the task file if it exists; no-op otherwise.
    pub fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove task file {}", self.path.display()))?;
        }
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, add_task};
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        let tasks = add_task(&[], "Task 1", "First", Priority::High, "Work", "2000-01-15");
        add_task(&tasks, "Task 2", "Second", Priority::Low, "Personal", "2000-02-25")
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().join("tasks.json"));

        let tasks = store.load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().join("tasks.json"));

        let tasks = sample_tasks();
        store.save(&tasks).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_save_writes_indented_json_array() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().join("tasks.json"));

        store.save(&sample_tasks()).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.starts_with('['));
        assert!(contents.contains("  {"));
        assert!(contents.contains("\"title\": \"Task 1\""));
    }

    #[test]
    fn test_load_malformed_json_is_empty_and_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        std::fs::write(&path, r#"[{"id": 1"#).unwrap();

        let store = Store::new(&path);
        let tasks = store.load().unwrap();
        assert!(tasks.is_empty());

        // The corrupted file is not repaired or deleted
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, r#"[{"id": 1"#);
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"title":"T","description":"","priority":"Low","category":"Other","due_date":"2000-01-01","completed":false,"created_at":"2000-01-01 00:00:00","extra":42}]"#,
        )
        .unwrap();

        // Treated like any other malformed content
        let tasks = Store::new(&path).load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_delete_removes_file() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().join("tasks.json"));

        store.save(&sample_tasks()).unwrap();
        assert!(store.path().exists());

        store.delete().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_delete_missing_file_is_noop() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().join("tasks.json"));

        assert!(store.delete().is_ok());
    }
}
