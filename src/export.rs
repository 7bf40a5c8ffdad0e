// CSV export of the task list

use crate::task::Task;
use eyre::{Context, Result, eyre};

/// CSV column order, matching the field order of [`Task`].
pub const CSV_HEADER: [&str; 8] = [
    "id",
    "title",
    "description",
    "priority",
    "category",
    "due_date",
    "completed",
    "created_at",
];

/// Render the task list as UTF-8 CSV bytes.
///
/// One header row, one data row per task, values in their text form
/// (`true`/`false` for the completion flag). Quoting of embedded commas and
/// quotes is handled by the csv writer.
pub fn to_csv_bytes(tasks: &[Task]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;

    for task in tasks {
        writer
            .write_record(&[
                task.id.to_string(),
                task.title.clone(),
                task.description.clone(),
                task.priority.as_str().to_string(),
                task.category.clone(),
                task.due_date.clone(),
                task.completed.to_string(),
                task.created_at.clone(),
            ])
            .context("Failed to write CSV row")?;
    }

    writer
        .into_inner()
        .map_err(|e| eyre!("Failed to flush CSV writer: {}", e))
}
