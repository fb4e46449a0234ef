//! Command-line surface of taskdesk.
//!
//! Every subcommand follows the same shape: read the configuration, open the
//! task file (the `--file` flag wins over the configured location), do its
//! work and save when something changed. `session` is the exception; it keeps
//! the store open and shares it with the background timers.

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod remind;
pub mod session;
pub mod show;
pub mod stats;
pub mod status;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::error::TaskError;
use crate::libs::formatter::format_choice;
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, Priority, Task};
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Show task details")]
    Show(show::ShowArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as complete")]
    Done(status::StatusArgs),
    #[command(about = "Mark a task as incomplete")]
    Undo(status::StatusArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show detailed statistics")]
    Stats,
    #[command(about = "Check due dates and print reminders")]
    Remind,
    #[command(about = "Export tasks to CSV, JSON, Excel or a text report")]
    Export(export::ExportArgs),
    #[command(about = "Import tasks from a CSV file", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Interactive session with autosave and reminders")]
    Session,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let file = self.file.as_deref();
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args, file),
            Commands::List(args) => list::cmd(args, file),
            Commands::Show(args) => show::cmd(args, file),
            Commands::Edit(args) => edit::cmd(args, file),
            Commands::Done(args) => status::cmd(args, file, true),
            Commands::Undo(args) => status::cmd(args, file, false),
            Commands::Delete(args) => delete::cmd(args, file),
            Commands::Stats => stats::cmd(file),
            Commands::Remind => remind::cmd(file),
            Commands::Export(args) => export::cmd(args, file),
            Commands::Import(args) => import::cmd(args, file),
            Commands::Session => session::cmd(file).await,
        }
    }
}

/// Reads the configuration and loads the task file it points to, or `file`
/// when given.
pub fn open_store(file: Option<&Path>) -> Result<(Config, Tasks)> {
    let config = Config::read()?;
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => config.tasks_path()?,
    };
    msg_debug!(Message::StoreLocation(path.display().to_string()));

    Ok((config, Tasks::load(path)))
}

/// Saves the store, telling the user when that fails.
pub fn save_store(tasks: &Tasks) -> Result<()> {
    if let Err(e) = tasks.save() {
        msg_error!(Message::StoreSaveFailed(e.to_string()));
        return Err(e.into());
    }
    Ok(())
}

/// Resolves an explicit id or lets the user pick one of the tasks accepted by
/// `filter`. `None` means there was nothing to pick.
pub fn resolve_task_id(id: Option<u64>, tasks: &[Task], filter: impl Fn(&Task) -> bool, empty: Message) -> Result<Option<u64>> {
    if let Some(id) = id {
        if !tasks.iter().any(|task| task.id == id) {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Err(TaskError::NotFound(id).into());
        }
        return Ok(Some(id));
    }

    let candidates: Vec<&Task> = tasks.iter().filter(|task| filter(task)).collect();
    if candidates.is_empty() {
        msg_info!(empty);
        return Ok(None);
    }

    let labels: Vec<String> = candidates.iter().map(|task| format_choice(task)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|index| candidates[index].id))
}

/// clap value parser for priorities typed by the user.
pub fn parse_priority(raw: &str) -> std::result::Result<Priority, String> {
    Priority::parse_known(raw).ok_or_else(|| format!("unknown priority '{}', expected Low, Medium, High or Critical", raw))
}

/// clap value parser for due dates typed by the user.
pub fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    match parse_due_date(raw) {
        Ok(Some(date)) => Ok(date),
        Ok(None) => Err("due date cannot be empty, use --clear-due to remove it".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
