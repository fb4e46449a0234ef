//! Formatting helpers for table cells and report lines.
//!
//! ## Format Specifications
//!
//! - Rates are shown with one decimal place: `66.7%`
//! - Breakdowns are `completed/total (rate)`: `2/3 (66.7%)`
//! - Due dates are `YYYY-MM-DD`, followed by `⚠️ OVERDUE` when past due
//! - Missing values read `No due date` / `No description`

use super::stats::Breakdown;
use super::task::{Task, DATE_FORMAT, TIMESTAMP_FORMAT};
use chrono::NaiveDate;

pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

pub fn format_breakdown(breakdown: &Breakdown) -> String {
    format!("{}/{} ({})", breakdown.completed, breakdown.total, format_rate(breakdown.completion_rate()))
}

pub fn format_days(days: f64) -> String {
    format!("{:.1} days", days)
}

pub fn format_status(completed: bool) -> &'static str {
    if completed {
        "✅ Completed"
    } else {
        "⏳ Pending"
    }
}

/// Due date cell of the task list. Empty for undated tasks.
pub fn format_due(task: &Task, today: NaiveDate) -> String {
    match task.due_date {
        Some(due) if task.is_overdue(today) => format!("{} ⚠️ OVERDUE", due.format(DATE_FORMAT)),
        Some(due) => due.format(DATE_FORMAT).to_string(),
        None => String::new(),
    }
}

pub fn format_due_long(task: &Task) -> String {
    task.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_else(|| "No due date".to_string())
}

pub fn format_description(task: &Task) -> &str {
    if task.description.is_empty() {
        "No description"
    } else {
        &task.description
    }
}

pub fn format_title(task: &Task) -> String {
    format!("{} {}", task.priority.icon(), task.title)
}

/// One-line label used in selection prompts.
pub fn format_choice(task: &Task) -> String {
    let status = if task.completed() { "✅" } else { "⏳" };
    match task.due_date {
        Some(due) => format!("{} {} [{}, due {}]", status, task.title, task.priority, due.format(DATE_FORMAT)),
        None => format!("{} {} [{}]", status, task.title, task.priority),
    }
}

pub fn format_timestamp(task_time: chrono::NaiveDateTime) -> String {
    task_time.format(TIMESTAMP_FORMAT).to_string()
}
