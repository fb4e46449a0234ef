//! CSV import.
//!
//! Rows are matched by header name, so column order does not matter and extra
//! columns such as `Created At` are ignored. Only `Title`, `Description`,
//! `Category`, `Priority`, `Due Date` and `Completed` are read; everything else
//! gets the defaults of a freshly created task.
//!
//! A bad row never aborts the batch. It is logged, counted in
//! [`ImportSummary::skipped`] and the next row is read. Only failing to open
//! the file is fatal.

use super::error::{Result, TaskError};
use super::messages::Message;
use super::task::{parse_due_date, validate_title, Priority, Task, DEFAULT_CATEGORY};
use crate::db::tasks::Tasks;
use crate::msg_warning;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct CsvImportRow {
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Description", default)]
    description: Option<String>,
    #[serde(rename = "Category", default)]
    category: Option<String>,
    #[serde(rename = "Priority", default)]
    priority: Option<String>,
    #[serde(rename = "Due Date", default)]
    due_date: Option<String>,
    #[serde(rename = "Completed", default)]
    completed: Option<String>,
}

impl CsvImportRow {
    fn into_task(self) -> Result<Task> {
        let title = validate_title(self.title.as_deref().unwrap_or_default())?;
        let due_date = parse_due_date(self.due_date.as_deref().unwrap_or_default())?;
        let category = self.category.filter(|c| !c.trim().is_empty()).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let priority = self
            .priority
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(Priority::from)
            .unwrap_or_default();
        let completed = self.completed.as_deref().is_some_and(|c| c.trim().eq_ignore_ascii_case("true"));

        let mut task = Task::new(&title, self.description.as_deref().unwrap_or_default(), category.trim(), priority, due_date);
        if completed {
            task.mark_complete();
        }
        Ok(task)
    }
}

/// Appends every valid row of the CSV file at `path` to `tasks`.
///
/// The store is not saved; that is up to the caller.
pub fn import_csv(path: &Path, tasks: &mut Tasks) -> Result<ImportSummary> {
    let file = std::fs::File::open(path)?;
    let summary = import_csv_from_reader(file, tasks)?;
    info!(path = %path.display(), imported = summary.imported, skipped = summary.skipped, "csv import finished");
    Ok(summary)
}

/// Same as [`import_csv`] for any reader.
pub fn import_csv_from_reader<R: Read>(reader: R, tasks: &mut Tasks) -> Result<ImportSummary> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).trim(csv::Trim::Headers).from_reader(reader);
    let headers = reader.headers()?.clone();
    let mut summary = ImportSummary::default();

    for result in reader.records() {
        let mut line = 0;
        let task = result.map_err(TaskError::from).and_then(|record| {
            line = record.position().map_or(0, |p| p.line());
            let row: CsvImportRow = record.deserialize(Some(&headers))?;
            row.into_task()
        });

        match task {
            Ok(task) => {
                tasks.add(task);
                summary.imported += 1;
            }
            Err(e) => {
                warn!(line, error = %e, "skipping csv row");
                msg_warning!(Message::ImportRowSkipped(line as usize, e.to_string()));
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
