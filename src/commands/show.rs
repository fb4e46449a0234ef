use super::{open_store, resolve_task_id};
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID, prompts for a task when omitted
    id: Option<u64>,
}

pub fn cmd(args: ShowArgs, file: Option<&Path>) -> Result<()> {
    let (_, tasks) = open_store(file)?;

    let Some(id) = resolve_task_id(args.id, tasks.all(), |_| true, Message::NoTasksFound)? else {
        return Ok(());
    };
    let task = tasks.find(id).ok_or(TaskError::NotFound(id))?;

    msg_print!(Message::TaskDetailsHeader, true);
    View::task_details(task);
    Ok(())
}
