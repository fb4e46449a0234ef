//! Aggregate statistics over the whole task store.
//!
//! Statistics are always computed from the full list, never from a filtered
//! view, so the numbers shown next to a filtered table do not change when the
//! filters do.
//!
//! ## Metrics
//!
//! ```text
//! Completion Rate  = Completed / Total * 100   (0 for an empty store)
//! Avg. Completion  = mean(completed_at - created_at) in whole days
//! ```

use super::task::{Priority, Task};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Total and completed counts for one category or priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub total: usize,
    pub completed: usize,
}

impl Breakdown {
    fn record(&mut self, task: &Task) {
        self.total += 1;
        if task.completed() {
            self.completed += 1;
        }
    }

    pub fn completion_rate(&self) -> f64 {
        completion_rate(self.completed, self.total)
    }
}

/// An overdue task as listed in the detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct OverdueTask {
    pub id: u64,
    pub title: String,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub completion_rate: f64,
    pub avg_completion_days: f64,
    pub by_category: BTreeMap<String, Breakdown>,
    pub by_priority: BTreeMap<Priority, Breakdown>,
    pub overdue_tasks: Vec<OverdueTask>,
}

impl Statistics {
    /// Computes every metric in a single pass over `tasks`.
    ///
    /// `today` decides which tasks count as overdue.
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let mut stats = Statistics {
            total: tasks.len(),
            ..Statistics::default()
        };
        let mut completion_days: Vec<i64> = Vec::new();

        for task in tasks {
            if task.completed() {
                stats.completed += 1;
                if let Some(days) = task.completion_days() {
                    completion_days.push(days);
                }
            }

            if task.is_overdue(today) {
                stats.overdue += 1;
                if let Some(due_date) = task.due_date {
                    stats.overdue_tasks.push(OverdueTask {
                        id: task.id,
                        title: task.title.clone(),
                        due_date,
                    });
                }
            }

            stats.by_category.entry(task.category.clone()).or_default().record(task);
            stats.by_priority.entry(task.priority.clone()).or_default().record(task);
        }

        stats.pending = stats.total - stats.completed;
        stats.completion_rate = completion_rate(stats.completed, stats.total);
        stats.avg_completion_days = if completion_days.is_empty() {
            0.0
        } else {
            completion_days.iter().sum::<i64>() as f64 / completion_days.len() as f64
        };

        stats
    }
}

/// Percentage of `completed` in `total`, defined as 0 when `total` is 0.
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    }
}
