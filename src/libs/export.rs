//! Task export for archival, printing and exchange with other tools.
//!
//! ## Formats
//!
//! - **CSV**: one row per task, the interchange format read back by
//!   [`import_csv`](super::import::import_csv)
//! - **JSON**: the same records the store file holds
//! - **Excel**: a single worksheet with a bold header row
//! - **Text**: a human-readable report grouped by category, not meant to be
//!   read back
//!
//! ## File Naming
//!
//! Without an explicit output path the file is named
//! `tasks_export_YYYYMMDD_HHMMSS.<ext>` in the working directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::export::{ExportFormat, Exporter};
//!
//! let tasks = Tasks::load("tasks.json");
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let count = exporter.export(tasks.all())?;
//! # Ok::<(), taskdesk::libs::error::TaskError>(())
//! ```

use super::error::Result;
use super::formatter::{format_description, format_due_long};
use super::task::{Task, TaskRecord, DATE_FORMAT, TIMESTAMP_FORMAT};
use chrono::{Local, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Column headers of the CSV interchange format.
pub const CSV_HEADERS: [&str; 8] = ["Title", "Description", "Category", "Priority", "Due Date", "Completed", "Created At", "Completed At"];

const REPORT_RULE: usize = 50;
const CATEGORY_RULE: usize = 30;
const TASK_RULE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Excel, ExportFormat::Text];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Text => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Excel => "Excel",
            ExportFormat::Text => "text",
        };
        f.write_str(name)
    }
}

/// One row of the CSV interchange format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvTaskRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Due Date")]
    pub due_date: String,
    #[serde(rename = "Completed")]
    pub completed: bool,
    #[serde(rename = "Created At")]
    pub created_at: String,
    #[serde(rename = "Completed At")]
    pub completed_at: String,
}

impl From<&Task> for CsvTaskRow {
    fn from(task: &Task) -> Self {
        CsvTaskRow {
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category.clone(),
            priority: task.priority.to_string(),
            due_date: task.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
            completed: task.completed(),
            created_at: task.created_at().format(TIMESTAMP_FORMAT).to_string(),
            completed_at: task.completed_at().map(|t| t.format(TIMESTAMP_FORMAT).to_string()).unwrap_or_default(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a timestamped file
    /// in the working directory when no path is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("tasks_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `tasks` in the configured format and returns how many were
    /// written. The store is never modified.
    pub fn export(&self, tasks: &[Task]) -> Result<usize> {
        match self.format {
            ExportFormat::Csv => self.export_csv(tasks)?,
            ExportFormat::Json => self.export_json(tasks)?,
            ExportFormat::Excel => self.export_excel(tasks)?,
            ExportFormat::Text => self.export_text(tasks)?,
        }

        debug!(path = %self.output_path.display(), format = %self.format, count = tasks.len(), "tasks exported");
        Ok(tasks.len())
    }

    fn export_csv(&self, tasks: &[Task]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        if tasks.is_empty() {
            wtr.write_record(CSV_HEADERS)?;
        }
        for task in tasks {
            wtr.serialize(CsvTaskRow::from(task))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, tasks: &[Task]) -> Result<()> {
        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        let mut writer = BufWriter::new(File::create(&self.output_path)?);
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.flush()?;
        Ok(())
    }

    fn export_excel(&self, tasks: &[Task]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        for (col, header) in CSV_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (index, task) in tasks.iter().enumerate() {
            let row = (index + 1) as u32;
            let csv_row = CsvTaskRow::from(task);
            worksheet.write_string(row, 0, &csv_row.title)?;
            worksheet.write_string(row, 1, &csv_row.description)?;
            worksheet.write_string(row, 2, &csv_row.category)?;
            worksheet.write_string(row, 3, &csv_row.priority)?;
            worksheet.write_string(row, 4, &csv_row.due_date)?;
            worksheet.write_boolean(row, 5, csv_row.completed)?;
            worksheet.write_string(row, 6, &csv_row.created_at)?;
            worksheet.write_string(row, 7, &csv_row.completed_at)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_text(&self, tasks: &[Task]) -> Result<()> {
        let report = render_text_report(tasks, Local::now().naive_local());
        let mut file = File::create(&self.output_path)?;
        file.write_all(report.as_bytes())?;
        Ok(())
    }
}

/// Groups tasks by category, keeping the order in which categories first
/// appear in the list.
pub fn group_by_category(tasks: &[Task]) -> Vec<(&str, Vec<&Task>)> {
    let mut groups: Vec<(&str, Vec<&Task>)> = Vec::new();
    for task in tasks {
        match groups.iter_mut().find(|(category, _)| *category == task.category) {
            Some((_, members)) => members.push(task),
            None => groups.push((task.category.as_str(), vec![task])),
        }
    }
    groups
}

/// Renders the plain-text archival report.
pub fn render_text_report(tasks: &[Task], generated_at: NaiveDateTime) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "TASKDESK EXPORT");
    let _ = writeln!(out, "{}", "=".repeat(REPORT_RULE));
    let _ = writeln!(out, "Export Date: {}", generated_at.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "Total Tasks: {}", tasks.len());
    let _ = writeln!(out);

    for (category, members) in group_by_category(tasks) {
        let _ = writeln!(out, "\n{} TASKS", category.to_uppercase());
        let _ = writeln!(out, "{}", "-".repeat(CATEGORY_RULE));

        for task in members {
            let status = if task.completed() { "Completed" } else { "Pending" };

            let _ = writeln!(out, "Title: {}", task.title);
            let _ = writeln!(out, "Description: {}", format_description(task));
            let _ = writeln!(out, "Priority: {}", task.priority);
            let _ = writeln!(out, "Due Date: {}", format_due_long(task));
            let _ = writeln!(out, "Status: {}", status);
            let _ = writeln!(out, "Created: {}", task.created_at().format(TIMESTAMP_FORMAT));
            if let Some(completed_at) = task.completed_at() {
                let _ = writeln!(out, "Completed: {}", completed_at.format(TIMESTAMP_FORMAT));
            }
            let _ = writeln!(out, "{}", "-".repeat(TASK_RULE));
        }
    }

    out
}
