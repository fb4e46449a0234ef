use super::add::category_choices;
use super::{open_store, parse_date, parse_priority, resolve_task_id, save_store};
use crate::libs::config::Config;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, validate_category, validate_title, Priority, Task, TaskUpdate, DATE_FORMAT};
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::Path;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID, prompts for a task when omitted
    id: Option<u64>,

    #[arg(long)]
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    #[arg(short, long)]
    category: Option<String>,

    #[arg(short, long, value_parser = parse_priority)]
    priority: Option<Priority>,

    #[arg(long, value_parser = parse_date, conflicts_with = "clear_due")]
    due: Option<NaiveDate>,

    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.category.is_some() || self.priority.is_some() || self.due.is_some() || self.clear_due
    }
}

pub fn cmd(args: EditArgs, file: Option<&Path>) -> Result<()> {
    let (config, mut tasks) = open_store(file)?;

    let Some(id) = resolve_task_id(args.id, tasks.all(), |_| true, Message::NoTasksFound)? else {
        return Ok(());
    };
    let task = tasks.find(id).ok_or(TaskError::NotFound(id))?;

    let update = if args.has_changes() {
        TaskUpdate {
            title: args.title,
            description: args.description,
            category: args.category.map(|raw| validate_category(&raw, &config.categories)).transpose()?,
            priority: args.priority,
            due_date: if args.clear_due { Some(None) } else { args.due.map(Some) },
        }
    } else {
        prompt_update(task, &config)?
    };

    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let title = tasks.update(id, update)?.title.clone();
    save_store(&tasks)?;
    msg_success!(Message::TaskUpdated(title));
    Ok(())
}

/// Asks for every field, prefilled with the current values, and returns only
/// what the user changed.
pub fn prompt_update(task: &Task, config: &Config) -> Result<TaskUpdate> {
    msg_print!(Message::EditingTask(task.title.clone()), true);

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .validate_with(|input: &String| validate_title(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let mut categories = category_choices(config);
    if !categories.contains(&task.category) {
        categories.push(task.category.clone());
    }
    let category_default = categories.iter().position(|c| *c == task.category).unwrap_or(0);
    let category = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&categories)
        .default(category_default)
        .interact()?;

    let mut priorities = Priority::KNOWN.to_vec();
    if !priorities.contains(&task.priority) {
        priorities.push(task.priority.clone());
    }
    let priority_default = priorities.iter().position(|p| *p == task.priority).unwrap_or(1);
    let priority = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priorities)
        .default(priority_default)
        .interact()?;

    let due_date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(task.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| parse_due_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    let title = validate_title(&title)?;
    let description = description.trim().to_string();
    let category = categories[category].clone();
    let priority = priorities[priority].clone();
    let due_date = parse_due_date(&due_date)?;

    Ok(TaskUpdate {
        title: (title != task.title).then_some(title),
        description: (description != task.description).then_some(description),
        category: (category != task.category).then_some(category),
        priority: (priority != task.priority).then_some(priority),
        due_date: (due_date != task.due_date).then_some(due_date),
    })
}
