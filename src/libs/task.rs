//! Task entity and its persisted record form.
//!
//! A [`Task`] is the unit the whole application revolves around. It is created
//! either from validated user input through [`Task::new`] or from a loosely
//! typed [`TaskRecord`] (store file, CSV import) through [`Task::from_record`],
//! which fills documented defaults and repairs the completion invariant.
//!
//! ## Invariants
//!
//! - `id` is time-derived and strictly increasing within a process
//! - `completed_at` is set if and only if `completed` is true
//! - `created_at` never changes after construction
//! - `title` is never empty
//!
//! ## Usage
//!
//! ```rust
//! use taskdesk::libs::task::{Priority, Task};
//!
//! let mut task = Task::new("Write report", "", "Work", Priority::High, None);
//! task.mark_complete();
//! assert!(task.completed_at().is_some());
//! ```

use super::error::{Result, TaskError};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use tracing::warn;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_DAY: i64 = 86_400;

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_CATEGORIES: [&str; 6] = ["General", "Work", "Personal", "Health", "Education", "Finance"];

/// Largest id the store accepts. Loaded ids above it are replaced so that
/// [`next_id`] always has room to move forward.
pub const MAX_ID: u64 = i64::MAX as u64;

/// Highest id handed out (or observed on load) in this process.
static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Returns a fresh id: the current time in microseconds, bumped past any id
/// already issued or loaded so two tasks never share one.
pub fn next_id() -> u64 {
    let now = Utc::now().timestamp_micros().max(0) as u64;
    let mut last = LAST_ID.load(AtomicOrdering::Relaxed);
    loop {
        // LAST_ID stays at or below MAX_ID, so this never saturates in practice
        let candidate = now.max(last.saturating_add(1));
        match LAST_ID.compare_exchange_weak(last, candidate, AtomicOrdering::Relaxed, AtomicOrdering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Records an id read from storage so that [`next_id`] never reissues it.
///
/// Returns `false`, leaving the counter untouched, for ids above [`MAX_ID`].
pub fn observe_id(id: u64) -> bool {
    if id > MAX_ID {
        return false;
    }
    LAST_ID.fetch_max(id, AtomicOrdering::Relaxed);
    true
}

/// Current local time truncated to whole seconds, the precision of the
/// persisted timestamp format.
pub fn now_stamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Task priority.
///
/// The four known levels cover everything the user can enter. Values read from
/// a file or CSV that match none of them are kept verbatim in `Other` and rank
/// after `Low`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
    Other(String),
}

impl Priority {
    pub const KNOWN: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Critical];

    /// Sort rank: Critical < High < Medium < Low < anything else.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
            Priority::Other(_) => 4,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
            Priority::Other(raw) => raw,
        }
    }

    /// Parses user input into one of the known levels, ignoring case.
    pub fn parse_known(raw: &str) -> Option<Priority> {
        Priority::KNOWN.into_iter().find(|p| p.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Priority::Critical => "🔴",
            Priority::High => "🟠",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
            Priority::Other(_) => "⚪",
        }
    }
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Low" => Priority::Low,
            "Medium" => Priority::Medium,
            "High" => Priority::High,
            "Critical" => Priority::Critical,
            _ => Priority::Other(raw),
        }
    }
}

impl From<&str> for Priority {
    fn from(raw: &str) -> Self {
        Priority::from(raw.to_string())
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank()).then_with(|| self.as_str().cmp(other.as_str()))
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Loosely typed task record, the shape of one entry in the store file.
///
/// Every field is optional on the way in; [`Task::from_record`] decides what
/// is required and what gets a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        TaskRecord {
            id: Some(task.id),
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            category: Some(task.category.clone()),
            priority: Some(task.priority.to_string()),
            due_date: task.due_date.map(|d| d.format(DATE_FORMAT).to_string()),
            completed: Some(task.completed),
            created_at: Some(task.created_at.format(TIMESTAMP_FORMAT).to_string()),
            completed_at: task.completed_at.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

/// Field changes for an in-place edit. `None` leaves a field untouched;
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        *self == TaskUpdate::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    completed: bool,
    created_at: NaiveDateTime,
    completed_at: Option<NaiveDateTime>,
}

impl Task {
    /// Creates a pending task stamped with the current time.
    ///
    /// Title validation is up to the caller, see [`validate_title`].
    pub fn new(title: &str, description: &str, category: &str, priority: Priority, due_date: Option<NaiveDate>) -> Self {
        Task {
            id: next_id(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            priority,
            due_date,
            completed: false,
            created_at: now_stamp(),
            completed_at: None,
        }
    }

    /// Builds a task from a persisted or imported record.
    ///
    /// Defaults: description `""`, category `General`, priority `Medium`,
    /// no due date, not completed, `created_at` now, no `completed_at`.
    /// Unparseable dates are dropped with a warning. A completed record
    /// without a usable `completed_at` takes `created_at`; a pending record
    /// never keeps one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::MissingField`] when `id` is absent or `title` is
    /// absent or blank.
    pub fn from_record(record: TaskRecord) -> Result<Self> {
        let id = record.id.ok_or(TaskError::MissingField("id"))?;
        let title = record.title.filter(|t| !t.trim().is_empty()).ok_or(TaskError::MissingField("title"))?;

        let due_date = match record.due_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    warn!(id, due_date = raw, "dropping unparseable due date");
                    None
                }
            },
        };

        let created_at = record
            .created_at
            .as_deref()
            .and_then(|raw| parse_timestamp(raw, id, "created_at"))
            .unwrap_or_else(now_stamp);

        let completed = record.completed.unwrap_or(false);
        let completed_at = if completed {
            Some(
                record
                    .completed_at
                    .as_deref()
                    .and_then(|raw| parse_timestamp(raw, id, "completed_at"))
                    .unwrap_or(created_at),
            )
        } else {
            None
        };

        Ok(Task {
            id,
            title,
            description: record.description.unwrap_or_default(),
            category: record.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            priority: record.priority.map(Priority::from).unwrap_or_default(),
            due_date,
            completed,
            created_at,
            completed_at,
        })
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord::from(self)
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        self.completed_at
    }

    pub fn mark_complete(&mut self) {
        self.completed = true;
        self.completed_at = Some(now_stamp());
    }

    pub fn mark_incomplete(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }

    /// Applies an edit. The title is checked before anything changes.
    pub fn apply(&mut self, update: TaskUpdate) -> Result<()> {
        let title = update.title.map(|raw| validate_title(&raw)).transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        Ok(())
    }

    /// Signed number of days from `today` to the due date.
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due| (due - today).num_days())
    }

    /// Pending with a due date strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// Whole days between creation and completion, rounded down, so a
    /// completion stamped before creation counts as a negative day.
    pub fn completion_days(&self) -> Option<i64> {
        self.completed_at
            .map(|done| (done - self.created_at).num_seconds().div_euclid(SECONDS_PER_DAY))
    }
}

fn parse_timestamp(raw: &str, id: u64, field: &'static str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    let parsed = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.with_timezone(&Local).naive_local()));

    if parsed.is_none() {
        warn!(id, field, value = raw, "dropping unparseable timestamp");
    }
    parsed
}

/// Trims a user-entered title and rejects it when nothing is left.
pub fn validate_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Parses a user-entered due date. Blank input means "no due date".
pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| TaskError::InvalidDueDate(raw.to_string()))
}

/// Matches a user-entered category against the configured list, ignoring
/// case, and returns the configured spelling.
pub fn validate_category(raw: &str, known: &[String]) -> Result<String> {
    let raw = raw.trim();
    known
        .iter()
        .find(|category| category.eq_ignore_ascii_case(raw))
        .cloned()
        .ok_or_else(|| TaskError::UnknownCategory(raw.to_string()))
}
