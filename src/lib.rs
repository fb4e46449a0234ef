//! # Taskdesk - personal task manager
//!
//! A command-line utility for keeping a single person's task list: create,
//! edit, filter and complete tasks, see statistics, get due date reminders
//! and move data in and out as CSV, JSON, Excel or a text report.
//!
//! ## Features
//!
//! - **Task Management**: Categories, priorities, due dates and completion tracking
//! - **Search and Filters**: Text search plus category, priority and status filters
//! - **Statistics**: Completion rates per category and priority, overdue tasks
//! - **Reminders**: Overdue, due today, due tomorrow and due soon notices
//! - **Data Exchange**: CSV import, CSV / JSON / Excel / text export
//! - **Sessions**: An interactive menu with autosave in the background
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
