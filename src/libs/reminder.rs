//! Due-date reminders.
//!
//! A reminder scan walks pending, dated tasks and classifies each by how many
//! days remain until its due date. Completed and undated tasks never produce
//! a reminder.

use super::task::Task;
use chrono::NaiveDate;

pub const DEFAULT_DUE_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Overdue,
    DueToday,
    DueTomorrow,
    DueSoon,
}

impl ReminderKind {
    /// Classifies a signed day distance, or `None` when it is too far away.
    pub fn classify(days_until_due: i64, due_soon_days: i64) -> Option<Self> {
        match days_until_due {
            d if d < 0 => Some(ReminderKind::Overdue),
            0 => Some(ReminderKind::DueToday),
            1 => Some(ReminderKind::DueTomorrow),
            d if d <= due_soon_days => Some(ReminderKind::DueSoon),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub task_id: u64,
    pub title: String,
    pub priority: String,
    pub due_date: NaiveDate,
    /// Negative when overdue.
    pub days_until_due: i64,
}

/// Returns one reminder per pending task due within `due_soon_days` of
/// `today` (or already past due), in store order.
pub fn scan(tasks: &[Task], today: NaiveDate, due_soon_days: i64) -> Vec<Reminder> {
    tasks
        .iter()
        .filter(|task| !task.completed())
        .filter_map(|task| {
            let due_date = task.due_date?;
            let days_until_due = (due_date - today).num_days();
            let kind = ReminderKind::classify(days_until_due, due_soon_days)?;
            Some(Reminder {
                kind,
                task_id: task.id,
                title: task.title.clone(),
                priority: task.priority.to_string(),
                due_date,
                days_until_due,
            })
        })
        .collect()
}
