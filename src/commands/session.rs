//! Interactive session.
//!
//! The task file stays open for the whole session. A menu loop runs on a
//! blocking thread while the [`Scheduler`] autosaves and checks due dates in
//! the background; both go through the same [`SharedTasks`] lock. Prompts are
//! answered without holding the lock, which is only taken to read a snapshot
//! or apply a change.
//!
//! Leaving the menu (Quit or Esc) stops the timers and saves one last time.

use super::{add, delete, edit, export, import, list, remind, resolve_task_id, save_store, stats, status};
use crate::db::tasks::SharedTasks;
use crate::libs::config::Config;
use crate::libs::error::TaskError;
use crate::libs::filter::TaskQuery;
use crate::libs::messages::Message;
use crate::libs::reminder;
use crate::libs::scheduler::{self, Scheduler, SchedulerSettings};
use crate::libs::task::Task;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionAction {
    List,
    Filter,
    ClearFilters,
    Add,
    Edit,
    Complete,
    Reopen,
    Delete,
    Details,
    Statistics,
    Reminders,
    Export,
    Import,
    Save,
    Quit,
}

impl SessionAction {
    const ALL: [SessionAction; 15] = [
        SessionAction::List,
        SessionAction::Filter,
        SessionAction::ClearFilters,
        SessionAction::Add,
        SessionAction::Edit,
        SessionAction::Complete,
        SessionAction::Reopen,
        SessionAction::Delete,
        SessionAction::Details,
        SessionAction::Statistics,
        SessionAction::Reminders,
        SessionAction::Export,
        SessionAction::Import,
        SessionAction::Save,
        SessionAction::Quit,
    ];
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionAction::List => "📋 List tasks",
            SessionAction::Filter => "🔍 Search and filter",
            SessionAction::ClearFilters => "🧹 Clear filters",
            SessionAction::Add => "➕ Add task",
            SessionAction::Edit => "✏️  Edit task",
            SessionAction::Complete => "✅ Mark complete",
            SessionAction::Reopen => "↩️  Mark incomplete",
            SessionAction::Delete => "🗑️  Delete task",
            SessionAction::Details => "📄 Task details",
            SessionAction::Statistics => "📊 Statistics",
            SessionAction::Reminders => "⏰ Check reminders",
            SessionAction::Export => "📤 Export",
            SessionAction::Import => "📥 Import CSV",
            SessionAction::Save => "💾 Save now",
            SessionAction::Quit => "🚪 Quit",
        };
        f.write_str(label)
    }
}

pub async fn cmd(file: Option<&Path>) -> Result<()> {
    let (config, tasks) = super::open_store(file)?;
    msg_info!(Message::SessionStarted(tasks.path().display().to_string()));

    let store = tasks.into_shared();
    let settings = SchedulerSettings::from(&config);
    scheduler::announce(&settings);
    let scheduler = Scheduler::start(store.clone(), settings, Arc::new(remind::display));

    let menu_store = store.clone();
    let outcome = tokio::task::spawn_blocking(move || run_menu(&menu_store, &config)).await;

    if let Err(e) = scheduler.shutdown().await {
        // a dead timer was already reported by the scheduler
        if !matches!(e, TaskError::TimerFailed(_)) {
            msg_error!(Message::StoreSaveFailed(e.to_string()));
        }
        return Err(e.into());
    }
    msg_info!(Message::SchedulerStopped);
    msg_success!(Message::SessionEnded(store.lock().len()));
    info!("session ended");

    outcome??;
    Ok(())
}

fn run_menu(store: &SharedTasks, config: &Config) -> Result<()> {
    let mut query = TaskQuery::default();
    list::print_list(&snapshot(store), &query, Local::now().date_naive());

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&SessionAction::ALL)
            .default(0)
            .interact_opt()?;

        let action = match selection {
            Some(index) => SessionAction::ALL[index],
            None => SessionAction::Quit,
        };
        debug!(?action, "session action");
        if action == SessionAction::Quit {
            return Ok(());
        }

        if let Err(e) = run_action(action, store, config, &mut query) {
            // A broken terminal ends the session, anything else is reported
            // and the menu comes back.
            if e.downcast_ref::<dialoguer::Error>().is_some() {
                return Err(e);
            }
            msg_error!(Message::InvalidInput(e.to_string()));
        }
    }
}

fn run_action(action: SessionAction, store: &SharedTasks, config: &Config, query: &mut TaskQuery) -> Result<()> {
    let today = Local::now().date_naive();

    match action {
        SessionAction::List => list::print_list(&snapshot(store), query, today),
        SessionAction::Filter => {
            *query = list::prompt_query(config, query)?;
            list::print_list(&snapshot(store), query, today);
        }
        SessionAction::ClearFilters => {
            *query = TaskQuery::default();
            list::print_list(&snapshot(store), query, today);
        }
        SessionAction::Add => {
            let task = add::prompt_task(config)?;
            let title = task.title.clone();
            store.lock().add(task);
            msg_success!(Message::TaskCreated(title));
        }
        SessionAction::Edit => {
            let tasks = snapshot(store);
            let Some(task) = pick(&tasks, |_| true, Message::NoTasksFound)? else {
                return Ok(());
            };
            let update = edit::prompt_update(task, config)?;
            if update.is_empty() {
                msg_info!(Message::NoChangesDetected);
            } else {
                let title = store.lock().update(task.id, update)?.title.clone();
                msg_success!(Message::TaskUpdated(title));
            }
        }
        SessionAction::Complete => {
            let tasks = snapshot(store);
            if let Some(task) = pick(&tasks, |task| !task.completed(), Message::NoPendingTasks)? {
                status::set_completed(&mut store.lock(), task.id, true)?;
            }
        }
        SessionAction::Reopen => {
            let tasks = snapshot(store);
            if let Some(task) = pick(&tasks, |task| task.completed(), Message::NoCompletedTasks)? {
                status::set_completed(&mut store.lock(), task.id, false)?;
            }
        }
        SessionAction::Delete => {
            let tasks = snapshot(store);
            let Some(task) = pick(&tasks, |_| true, Message::NoTasksFound)? else {
                return Ok(());
            };
            if delete::confirm_delete(task)? {
                let removed = store.lock().remove(task.id)?;
                msg_success!(Message::TaskDeleted(removed.title));
            } else {
                msg_info!(Message::OperationCancelled);
            }
        }
        SessionAction::Details => {
            let tasks = snapshot(store);
            if let Some(task) = pick(&tasks, |_| true, Message::NoTasksFound)? {
                msg_print!(Message::TaskDetailsHeader, true);
                View::task_details(task);
            }
        }
        SessionAction::Statistics => stats::print_statistics(&snapshot(store), today),
        SessionAction::Reminders => {
            let reminders = reminder::scan(&snapshot(store), today, config.reminders.due_soon_days);
            if reminders.is_empty() {
                msg_info!(Message::NoReminders);
            } else {
                remind::display(&reminders);
            }
        }
        SessionAction::Export => {
            let format = export::prompt_format()?;
            export::export_tasks(&snapshot(store), format, None)?;
        }
        SessionAction::Import => {
            let path: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptImportPath.to_string())
                .interact_text()?;
            import::run_import(Path::new(path.trim()), &mut store.lock())?;
        }
        SessionAction::Save => {
            let tasks = store.lock();
            save_store(&tasks)?;
            msg_success!(Message::TasksSaved(tasks.len()));
        }
        SessionAction::Quit => {}
    }

    Ok(())
}

fn snapshot(store: &SharedTasks) -> Vec<Task> {
    store.lock().all().to_vec()
}

fn pick<'a>(tasks: &'a [Task], filter: impl Fn(&Task) -> bool, empty: Message) -> Result<Option<&'a Task>> {
    let Some(id) = resolve_task_id(None, tasks, filter, empty)? else {
        return Ok(None);
    };
    tasks.iter().find(|task| task.id == id).map(Some).ok_or_else(|| TaskError::NotFound(id).into())
}
