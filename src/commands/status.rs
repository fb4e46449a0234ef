use super::{open_store, resolve_task_id, save_store};
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Task ID, prompts for a task when omitted
    id: Option<u64>,
}

/// Marks a task complete (`done`) or incomplete (`undo`).
pub fn cmd(args: StatusArgs, file: Option<&Path>, completed: bool) -> Result<()> {
    let (_, mut tasks) = open_store(file)?;

    let picked = if completed {
        resolve_task_id(args.id, tasks.all(), |task| !task.completed(), Message::NoPendingTasks)?
    } else {
        resolve_task_id(args.id, tasks.all(), |task| task.completed(), Message::NoCompletedTasks)?
    };
    let Some(id) = picked else {
        return Ok(());
    };

    set_completed(&mut tasks, id, completed)?;
    save_store(&tasks)
}

/// Changes the completion state of one task and reports it.
pub fn set_completed(tasks: &mut Tasks, id: u64, completed: bool) -> Result<()> {
    if completed {
        let task = tasks.mark_complete(id)?;
        msg_success!(Message::TaskCompleted(task.title.clone()));
    } else {
        let task = tasks.mark_incomplete(id)?;
        msg_success!(Message::TaskReopened(task.title.clone()));
    }
    Ok(())
}
