//! Core library modules for the taskdesk application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, errors, messaging
//! - **Task Model**: The task entity, filtering and sorting
//! - **Analysis**: Statistics and due date reminders
//! - **Data Exchange**: CSV import and multi-format export
//! - **Background Work**: Autosave and reminder timers
//! - **User Interface**: Console tables and cell formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::filter::{visible_tasks, TaskQuery};
//!
//! let tasks = Tasks::load("tasks.json");
//! let visible = visible_tasks(tasks.all(), &TaskQuery::from_raw("", "All", "All", Default::default()));
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod import;
pub mod messages;
pub mod reminder;
pub mod scheduler;
pub mod stats;
pub mod task;
pub mod view;
