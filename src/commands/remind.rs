use super::open_store;
use crate::libs::messages::Message;
use crate::libs::reminder::{self, Reminder, ReminderKind};
use crate::libs::task::DATE_FORMAT;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use std::path::Path;

pub fn cmd(file: Option<&Path>) -> Result<()> {
    let (config, tasks) = open_store(file)?;

    let reminders = reminder::scan(tasks.all(), Local::now().date_naive(), config.reminders.due_soon_days);
    if reminders.is_empty() {
        msg_info!(Message::NoReminders);
    } else {
        display(&reminders);
    }
    Ok(())
}

/// Prints each reminder with its priority and due date.
pub fn display(reminders: &[Reminder]) {
    for reminder in reminders {
        let title = reminder.title.clone();
        match reminder.kind {
            ReminderKind::Overdue => msg_warning!(Message::ReminderOverdue(title)),
            ReminderKind::DueToday => msg_print!(Message::ReminderDueToday(title)),
            ReminderKind::DueTomorrow => msg_print!(Message::ReminderDueTomorrow(title)),
            ReminderKind::DueSoon => msg_print!(Message::ReminderDueSoon(title, reminder.days_until_due)),
        }
        msg_print!(Message::ReminderDetails(reminder.priority.clone(), reminder.due_date.format(DATE_FORMAT).to_string()));
    }
}
