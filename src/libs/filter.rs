//! Filtering and display ordering of the task list.
//!
//! [`visible_tasks`] is a pure function: it never touches the store, it only
//! borrows the slice it is given and returns references in display order.

use super::task::{Priority, Task};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Sentinel accepted by every enumerated filter meaning "do not filter".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed(),
            StatusFilter::Pending => !task.completed(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "pending" => Ok(StatusFilter::Pending),
            other => Err(format!("unknown status '{}', expected All, Completed or Pending", other)),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusFilter::All => "All",
            StatusFilter::Completed => "Completed",
            StatusFilter::Pending => "Pending",
        };
        f.write_str(text)
    }
}

/// Criteria for the visible task list. All criteria are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    /// Case-insensitive substring of title or description; empty matches all.
    pub search: String,
    /// Exact category, `None` for all.
    pub category: Option<String>,
    /// Exact priority, `None` for all.
    pub priority: Option<Priority>,
    pub status: StatusFilter,
}

impl TaskQuery {
    /// Builds a query from the raw filter values a user picks, where `"All"`
    /// (any case) or an empty string disables a filter. Known priorities match
    /// in any case, like they do on entry.
    pub fn from_raw(search: &str, category: &str, priority: &str, status: StatusFilter) -> Self {
        TaskQuery {
            search: search.to_string(),
            category: sentinel(category).map(str::to_string),
            priority: sentinel(priority).map(|raw| Priority::parse_known(raw).unwrap_or_else(|| Priority::from(raw))),
            status,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.category.as_ref().map_or(true, |category| &task.category == category)
            && self.priority.as_ref().map_or(true, |priority| &task.priority == priority)
            && self.status.matches(task)
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle) || task.description.to_lowercase().contains(&needle)
    }
}

fn sentinel(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(raw)
    }
}

/// Display order key: pending first, then priority rank, then due date with
/// undated tasks last.
pub fn sort_key(task: &Task) -> (bool, u8, NaiveDate) {
    (task.completed(), task.priority.rank(), task.due_date.unwrap_or(NaiveDate::MAX))
}

/// Returns the tasks matching `query`, in display order.
///
/// The sort is stable, so tasks with equal keys keep their store order.
pub fn visible_tasks<'a>(tasks: &'a [Task], query: &TaskQuery) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|task| query.matches(task)).collect();
    visible.sort_by_key(|task| sort_key(task));
    visible
}
