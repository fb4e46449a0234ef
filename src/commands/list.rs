use super::add::category_choices;
use super::open_store;
use crate::libs::config::Config;
use crate::libs::filter::{visible_tasks, StatusFilter, TaskQuery, ALL};
use crate::libs::messages::Message;
use crate::libs::stats::Statistics;
use crate::libs::task::{Priority, Task};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::Path;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text searched in titles and descriptions
    #[arg(short, long, default_value = "")]
    search: String,

    /// Exact category, "All" for every category
    #[arg(short, long, default_value = ALL)]
    category: String,

    /// Exact priority, "All" for every priority
    #[arg(short, long, default_value = ALL)]
    priority: String,

    #[arg(long, value_enum, default_value_t = StatusFilter::All)]
    status: StatusFilter,
}

pub fn cmd(args: ListArgs, file: Option<&Path>) -> Result<()> {
    let (_, tasks) = open_store(file)?;
    let query = TaskQuery::from_raw(&args.search, &args.category, &args.priority, args.status);

    print_list(tasks.all(), &query, Local::now().date_naive());
    Ok(())
}

/// Prints the filtered table followed by a one-line summary of the whole
/// store.
pub fn print_list(tasks: &[Task], query: &TaskQuery, today: NaiveDate) {
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return;
    }

    let visible = visible_tasks(tasks, query);
    if visible.is_empty() {
        msg_info!(Message::NoTasksMatchFilters);
    } else {
        msg_print!(Message::TasksHeader(visible.len(), tasks.len()), true);
        View::tasks(&visible, today);
    }

    let stats = Statistics::compute(tasks, today);
    msg_print!(Message::StatisticsSummary {
        total: stats.total,
        completed: stats.completed,
        pending: stats.pending,
        overdue: stats.overdue,
    });
}

/// Asks for new filter values, starting from `current`.
pub fn prompt_query(config: &Config, current: &TaskQuery) -> Result<TaskQuery> {
    let search: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSearch.to_string())
        .default(current.search.clone())
        .allow_empty(true)
        .interact_text()?;

    let mut categories = vec![ALL.to_string()];
    categories.extend(category_choices(config));
    let category_default = current
        .category
        .as_ref()
        .and_then(|c| categories.iter().position(|candidate| candidate == c))
        .unwrap_or(0);
    let category = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptFilterCategory.to_string())
        .items(&categories)
        .default(category_default)
        .interact()?;

    let mut priorities = vec![ALL.to_string()];
    priorities.extend(Priority::KNOWN.iter().map(Priority::to_string));
    let priority_default = current
        .priority
        .as_ref()
        .and_then(|p| priorities.iter().position(|candidate| candidate == p.as_str()))
        .unwrap_or(0);
    let priority = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptFilterPriority.to_string())
        .items(&priorities)
        .default(priority_default)
        .interact()?;

    let statuses = [StatusFilter::All, StatusFilter::Pending, StatusFilter::Completed];
    let status_default = statuses.iter().position(|s| *s == current.status).unwrap_or(0);
    let status = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptFilterStatus.to_string())
        .items(&statuses)
        .default(status_default)
        .interact()?;

    Ok(TaskQuery::from_raw(&search, &categories[category], &priorities[priority], statuses[status]))
}
