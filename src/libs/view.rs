use super::formatter::{format_breakdown, format_days, format_description, format_due, format_due_long, format_rate, format_status, format_timestamp, format_title};
use super::stats::Statistics;
use super::task::{Task, DATE_FORMAT};
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks_table(tasks: &[&Task], today: NaiveDate) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "CATEGORY", "PRIORITY", "DUE DATE", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                format_title(task),
                task.category,
                task.priority,
                format_due(task, today),
                format_status(task.completed())
            ]);
        }
        table
    }

    pub fn tasks(tasks: &[&Task], today: NaiveDate) {
        Self::tasks_table(tasks, today).printstd();
    }

    pub fn task_details_table(task: &Task) -> Table {
        let mut table = Table::new();

        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", format_description(task)]);
        table.add_row(row!["Category", task.category]);
        table.add_row(row!["Priority", task.priority]);
        table.add_row(row!["Due Date", format_due_long(task)]);
        table.add_row(row!["Status", format_status(task.completed())]);
        table.add_row(row!["Created", format_timestamp(task.created_at())]);
        if let Some(completed_at) = task.completed_at() {
            table.add_row(row!["Completed", format_timestamp(completed_at)]);
        }
        table.add_row(row!["Task ID", task.id]);
        table
    }

    pub fn task_details(task: &Task) {
        Self::task_details_table(task).printstd();
    }

    pub fn overview_table(stats: &Statistics) -> Table {
        let mut table = Table::new();

        table.add_row(row!["Total Tasks", stats.total]);
        table.add_row(row!["Completed Tasks", stats.completed]);
        table.add_row(row!["Pending Tasks", stats.pending]);
        table.add_row(row!["Overdue Tasks", stats.overdue]);
        table.add_row(row!["Completion Rate", format_rate(stats.completion_rate)]);
        table.add_row(row!["Average Completion Time", format_days(stats.avg_completion_days)]);
        table
    }

    pub fn category_table(stats: &Statistics) -> Table {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "COMPLETED"]);
        for (category, breakdown) in &stats.by_category {
            table.add_row(row![category, format_breakdown(breakdown)]);
        }
        table
    }

    pub fn priority_table(stats: &Statistics) -> Table {
        let mut table = Table::new();

        table.add_row(row!["PRIORITY", "COMPLETED"]);
        for (priority, breakdown) in &stats.by_priority {
            table.add_row(row![priority, format_breakdown(breakdown)]);
        }
        table
    }

    pub fn overdue_table(stats: &Statistics) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE"]);
        for task in &stats.overdue_tasks {
            table.add_row(row![task.id, task.title, task.due_date.format(DATE_FORMAT)]);
        }
        table
    }
}
