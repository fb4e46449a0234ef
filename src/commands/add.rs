use super::{open_store, parse_date, parse_priority, save_store};
use crate::libs::config::Config;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, validate_category, validate_title, Priority, Task, DEFAULT_CATEGORY};
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::Path;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title, prompts for every field when omitted
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    /// One of the configured categories
    #[arg(short, long)]
    category: Option<String>,

    /// Low, Medium, High or Critical
    #[arg(short, long, value_parser = parse_priority)]
    priority: Option<Priority>,

    /// Due date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    due: Option<NaiveDate>,
}

pub fn cmd(args: AddArgs, file: Option<&Path>) -> Result<()> {
    let (config, mut tasks) = open_store(file)?;

    let task = match args.title {
        Some(title) => build_task(
            &config,
            &title,
            &args.description.unwrap_or_default(),
            args.category.as_deref(),
            args.priority.unwrap_or_default(),
            args.due,
        )?,
        None => prompt_task(&config)?,
    };

    let title = task.title.clone();
    let id = tasks.add(task);
    save_store(&tasks)?;

    msg_success!(Message::TaskCreated(title));
    msg_info!(Message::TaskIdCreated(id));
    Ok(())
}

/// Validates user-entered fields and builds a new pending task.
///
/// Without a category the task goes to `General`.
pub fn build_task(
    config: &Config,
    title: &str,
    description: &str,
    category: Option<&str>,
    priority: Priority,
    due_date: Option<NaiveDate>,
) -> std::result::Result<Task, TaskError> {
    let title = validate_title(title)?;
    let category = match category {
        Some(raw) => validate_category(raw, &config.categories)?,
        None => DEFAULT_CATEGORY.to_string(),
    };

    Ok(Task::new(&title, description.trim(), &category, priority, due_date))
}

/// Asks for every field of a new task.
pub fn prompt_task(config: &Config) -> Result<Task> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .validate_with(|input: &String| validate_title(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let categories = category_choices(config);
    let category = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&categories)
        .default(0)
        .interact()?;

    let priority = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&Priority::KNOWN)
        .default(1)
        .interact()?;

    let due_date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .allow_empty(true)
        .validate_with(|input: &String| parse_due_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(Task::new(
        &validate_title(&title)?,
        description.trim(),
        &categories[category],
        Priority::KNOWN[priority].clone(),
        parse_due_date(&due_date)?,
    ))
}

/// Categories offered in prompts, falling back to `General` when the
/// configuration lists none.
pub fn category_choices(config: &Config) -> Vec<String> {
    if config.categories.is_empty() {
        vec![DEFAULT_CATEGORY.to_string()]
    } else {
        config.categories.clone()
    }
}
