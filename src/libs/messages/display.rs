//! Display implementation for taskdesk messages.
//!
//! Every piece of user-facing text lives in this one `match`, so wording stays
//! consistent between the one-shot commands and the interactive session.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' added successfully!", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully!", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted successfully!", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as complete!", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as incomplete!", title),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::NoTasksFound => "No tasks yet. Add one with `taskdesk add`.".to_string(),
            Message::NoTasksMatchFilters => "No tasks match the current filters.".to_string(),
            Message::NoPendingTasks => "No pending tasks.".to_string(),
            Message::NoCompletedTasks => "No completed tasks.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::TasksHeader(shown, total) => format!("Tasks ({} of {}):", shown, total),
            Message::TaskDetailsHeader => "TASK DETAILS".to_string(),
            Message::TaskIdCreated(id) => format!("Task ID: {}", id),

            // === VALIDATION MESSAGES ===
            Message::InvalidInput(reason) => reason.to_string(),

            // === STORE MESSAGES ===
            Message::StoreUnreadable(path, error) => format!("Could not load tasks from {} ({}). Starting with an empty list.", path, error),
            Message::StoreRecordSkipped(number, error) => format!("Skipping task record #{}: {}", number, error),
            Message::StoreDuplicateId(id) => format!("Skipping duplicate task ID {}", id),
            Message::StoreIdReassigned(old, new) => format!("Task ID {} is out of range, renumbered to {}", old, new),
            Message::StoreSaveFailed(error) => format!("Error saving tasks: {}", error),
            Message::StoreLocation(path) => format!("Task file: {}", path),
            Message::TasksSaved(count) => format!("Saved {} tasks.", count),

            // === STATISTICS MESSAGES ===
            Message::StatisticsHeader => "DETAILED STATISTICS".to_string(),
            Message::OverviewHeader => "OVERVIEW".to_string(),
            Message::CategoryBreakdownHeader => "CATEGORY BREAKDOWN".to_string(),
            Message::PriorityBreakdownHeader => "PRIORITY BREAKDOWN".to_string(),
            Message::OverdueTasksHeader => "OVERDUE TASKS".to_string(),
            Message::NoOverdueTasks => "No overdue tasks! 🎉".to_string(),
            Message::StatisticsSummary {
                total,
                completed,
                pending,
                overdue,
            } => format!("📊 Total: {} | Completed: {} | Pending: {} | Overdue: {}", total, completed, pending, overdue),

            // === REMINDER MESSAGES ===
            Message::ReminderOverdue(title) => format!("OVERDUE: {}", title),
            Message::ReminderDueToday(title) => format!("📅 DUE TODAY: {}", title),
            Message::ReminderDueTomorrow(title) => format!("📅 DUE TOMORROW: {}", title),
            Message::ReminderDueSoon(title, days) => format!("📅 DUE SOON: {} (in {} days)", title, days),
            Message::ReminderDetails(priority, due) => format!("   Priority: {}, Due: {}", priority, due),
            Message::NoReminders => "Nothing due soon.".to_string(),

            // === EXPORT / IMPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting tasks in {} format...", format),
            Message::ExportCompleted(path, count) => format!("Exported {} tasks to {}", count, path),
            Message::NothingToExport => "No tasks to export!".to_string(),
            Message::ExportFailed(error) => format!("Failed to export tasks: {}", error),
            Message::ImportCompleted(imported, 0) => format!("Imported {} tasks successfully!", imported),
            Message::ImportCompleted(imported, skipped) => format!("Imported {} tasks, skipped {} invalid rows.", imported, skipped),
            Message::ImportRowSkipped(line, reason) => format!("Skipping row at line {}: {}", line, reason),
            Message::ImportFailed(error) => format!("Failed to import CSV: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleCategories => "Category settings".to_string(),
            Message::ConfigModuleAutosave => "Autosave settings".to_string(),
            Message::ConfigModuleReminders => "Reminder settings".to_string(),

            // === SESSION / SCHEDULER MESSAGES ===
            Message::SessionStarted(path) => format!("Session started, tasks are saved to {}", path),
            Message::SessionEnded(count) => format!("Session ended, {} tasks saved.", count),
            Message::SchedulerStarted {
                autosave_secs,
                reminder_secs: Some(reminder_secs),
            } => format!("Autosave every {}s, reminders every {}s", autosave_secs, reminder_secs),
            Message::SchedulerStarted {
                autosave_secs,
                reminder_secs: None,
            } => format!("Autosave every {}s, reminders disabled", autosave_secs),
            Message::SchedulerStopped => "Background timers stopped".to_string(),
            Message::AutosaveFailed(error) => format!("Autosave failed: {}", error),
            Message::SchedulerTaskFailed(error) => format!("Background timer stopped unexpectedly: {}", error),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskDueDate => "Due Date (YYYY-MM-DD, empty for none)".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptSelectAction => "What would you like to do?".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptSearch => "Search (empty for all)".to_string(),
            Message::PromptFilterCategory => "Filter by Category".to_string(),
            Message::PromptFilterPriority => "Filter by Priority".to_string(),
            Message::PromptFilterStatus => "Filter by Status".to_string(),
            Message::PromptExportFormat => "Export format".to_string(),
            Message::PromptImportPath => "CSV file to import".to_string(),
            Message::PromptDataFile => "Task file path (empty for default)".to_string(),
            Message::PromptCategories => "Categories (comma separated)".to_string(),
            Message::PromptAutosaveInterval => "Autosave interval (seconds)".to_string(),
            Message::PromptRemindersEnabled => "Enable due date reminders?".to_string(),
            Message::PromptReminderInterval => "Reminder scan interval (seconds)".to_string(),
            Message::PromptDueSoonDays => "Remind about tasks due within (days)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
