use super::{open_store, resolve_task_id, save_store};
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::Path;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID, prompts for a task when omitted
    id: Option<u64>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs, file: Option<&Path>) -> Result<()> {
    let (_, mut tasks) = open_store(file)?;

    let Some(id) = resolve_task_id(args.id, tasks.all(), |_| true, Message::NoTasksFound)? else {
        return Ok(());
    };
    let task = tasks.find(id).ok_or(TaskError::NotFound(id))?;

    if !args.yes && !confirm_delete(task)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let removed = tasks.remove(id)?;
    save_store(&tasks)?;
    msg_success!(Message::TaskDeleted(removed.title));
    Ok(())
}

pub fn confirm_delete(task: &Task) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
        .default(false)
        .interact()?;
    Ok(confirmed)
}
