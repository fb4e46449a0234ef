//! JSON-backed task store.
//!
//! [`Tasks`] owns every task of the application in insertion order and the
//! path of the file they persist to. The file is a pretty-printed JSON array
//! of [`TaskRecord`]s, rewritten wholesale on each save.
//!
//! ## Failure Policy
//!
//! - **Missing file**: the store starts empty
//! - **Malformed file**: a warning is shown and the store starts empty
//! - **Malformed record**: that record is skipped, the rest load normally
//! - **Save failure**: returned to the caller, memory stays as it was
//!
//! ## Sharing
//!
//! Long-running sessions wrap the store in [`SharedTasks`] so the autosave and
//! reminder timers and the interactive loop go through one mutex. Every load,
//! save and mutation happens under that lock.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::task::{Priority, Task};
//!
//! let mut tasks = Tasks::load("tasks.json");
//! tasks.add(Task::new("Pay rent", "", "Finance", Priority::High, None));
//! tasks.save()?;
//! # Ok::<(), taskdesk::libs::error::TaskError>(())
//! ```

use crate::libs::error::{Result, TaskError};
use crate::libs::messages::Message;
use crate::libs::task::{next_id, observe_id, Task, TaskRecord, TaskUpdate};
use crate::msg_warning;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Store handle shared between the interactive loop and background timers.
pub type SharedTasks = Arc<Mutex<Tasks>>;

#[derive(Debug, Clone)]
pub struct Tasks {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl Tasks {
    /// Creates an empty store bound to `path` without touching the disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Tasks {
            path: path.into(),
            tasks: Vec::new(),
        }
    }

    /// Loads the store from `path`. Never fails; see the module docs for how
    /// unreadable content is handled.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Tasks::new(path);
        store.reload();
        store
    }

    /// Replaces the in-memory list with the current file content.
    pub fn reload(&mut self) {
        self.tasks = match fs::read_to_string(&self.path) {
            Ok(content) => parse_tasks(&content, &self.path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no task file yet, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read task file");
                msg_warning!(Message::StoreUnreadable(self.path.display().to_string(), e.to_string()));
                Vec::new()
            }
        };
    }

    /// Writes every task to the store file, replacing its previous content.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let records: Vec<TaskRecord> = self.tasks.iter().map(TaskRecord::from).collect();
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.flush()?;

        debug!(path = %self.path.display(), count = records.len(), "tasks saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task and returns its id.
    pub fn add(&mut self, task: Task) -> u64 {
        let id = task.id;
        self.tasks.push(task);
        id
    }

    pub fn find(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Removes and returns the task with `id`.
    pub fn remove(&mut self, id: u64) -> Result<Task> {
        let index = self.tasks.iter().position(|task| task.id == id).ok_or(TaskError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Applies a validated edit to the task with `id`.
    pub fn update(&mut self, id: u64, update: TaskUpdate) -> Result<&Task> {
        let task = self.find_mut(id).ok_or(TaskError::NotFound(id))?;
        task.apply(update)?;
        Ok(task)
    }

    pub fn mark_complete(&mut self, id: u64) -> Result<&Task> {
        let task = self.find_mut(id).ok_or(TaskError::NotFound(id))?;
        task.mark_complete();
        Ok(task)
    }

    pub fn mark_incomplete(&mut self, id: u64) -> Result<&Task> {
        let task = self.find_mut(id).ok_or(TaskError::NotFound(id))?;
        task.mark_incomplete();
        Ok(task)
    }

    /// Wraps the store for use by background timers.
    pub fn into_shared(self) -> SharedTasks {
        Arc::new(Mutex::new(self))
    }
}

fn parse_tasks(content: &str, path: &Path) -> Vec<Task> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(content) {
        Ok(values) => values,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed task file, starting empty");
            msg_warning!(Message::StoreUnreadable(path.display().to_string(), e.to_string()));
            return Vec::new();
        }
    };

    let parsed: Vec<Result<Task>> = values
        .into_iter()
        .map(|value| serde_json::from_value::<TaskRecord>(value).map_err(TaskError::from).and_then(Task::from_record))
        .collect();

    // Every in-range id is observed before any replacement id is drawn.
    let oversized: HashSet<u64> = parsed.iter().flatten().map(|task| task.id).filter(|id| !observe_id(*id)).collect();

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(parsed.len());

    for (index, task) in parsed.into_iter().enumerate() {
        match task {
            Ok(mut task) if oversized.contains(&task.id) => {
                let id = next_id();
                warn!(old_id = task.id, new_id = id, "task id out of range, reassigning");
                msg_warning!(Message::StoreIdReassigned(task.id, id));
                task.id = id;
                seen.insert(id);
                tasks.push(task);
            }
            Ok(task) if !seen.insert(task.id) => {
                warn!(id = task.id, "duplicate task id in store file, skipping");
                msg_warning!(Message::StoreDuplicateId(task.id));
            }
            Ok(task) => tasks.push(task),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed task record");
                msg_warning!(Message::StoreRecordSkipped(index + 1, e.to_string()));
            }
        }
    }

    tasks
}
