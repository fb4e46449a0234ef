//! Background timers of an interactive session.
//!
//! Two tokio tasks run next to the interactive loop and share the store with
//! it through [`SharedTasks`]:
//!
//! - **Autosave** writes the store every `autosave_interval`. The first save
//!   happens one full interval after start.
//! - **Reminders** scan the store for due dates right away and then every
//!   `reminder_interval`. The scan works on a snapshot taken under the lock,
//!   so the interactive loop is never blocked by the notifier.
//!
//! Both timers stop when [`Scheduler::shutdown`] is awaited, which then does
//! one last save so nothing entered since the previous tick is lost.
//!
//! Periods too long to add to the current instant (`u64::MAX` seconds is a
//! common way to say "never") park the timer until shutdown.

use super::config::Config;
use super::error::{Result, TaskError};
use super::messages::Message;
use super::reminder::{self, Reminder};
use crate::db::tasks::SharedTasks;
use crate::{msg_error, msg_info};
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Stand-in deadline for periods that overflow [`Instant`], about 30 years.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Receives the reminders of each scan that found any.
pub type ReminderNotifier = Arc<dyn Fn(&[Reminder]) + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerSettings {
    pub autosave_interval: Duration,
    /// `None` disables the reminder timer.
    pub reminder_interval: Option<Duration>,
    pub due_soon_days: i64,
}

impl From<&Config> for SchedulerSettings {
    fn from(config: &Config) -> Self {
        SchedulerSettings {
            autosave_interval: config.autosave.interval(),
            reminder_interval: config.reminders.enabled.then(|| config.reminders.interval()),
            due_soon_days: config.reminders.due_soon_days,
        }
    }
}

pub struct Scheduler {
    store: SharedTasks,
    shutdown_tx: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

impl Scheduler {
    /// Spawns the timers on the current tokio runtime.
    pub fn start(store: SharedTasks, settings: SchedulerSettings, notifier: ReminderNotifier) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut handles = Vec::with_capacity(2);

        handles.push(tokio::spawn(run_autosave(
            store.clone(),
            settings.autosave_interval,
            shutdown_rx.clone(),
        )));

        if let Some(interval) = settings.reminder_interval {
            handles.push(tokio::spawn(run_reminders(
                store.clone(),
                interval,
                settings.due_soon_days,
                notifier,
                shutdown_rx,
            )));
        }

        info!(
            autosave_ms = settings.autosave_interval.as_millis() as u64,
            reminders = settings.reminder_interval.is_some(),
            "scheduler started"
        );

        Scheduler {
            store,
            shutdown_tx,
            handles,
        }
    }

    /// Stops both timers, waits for them and saves the store one last time.
    ///
    /// The save happens even when a timer died; that failure is then returned
    /// as [`TaskError::TimerFailed`].
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown_tx.send(true);

        let mut failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "scheduler task did not finish cleanly");
                msg_error!(Message::SchedulerTaskFailed(e.to_string()));
                failure.get_or_insert(e.to_string());
            }
        }

        self.store.lock().save()?;
        debug!("scheduler stopped after final save");

        match failure {
            Some(error) => Err(TaskError::TimerFailed(error)),
            None => Ok(()),
        }
    }
}

/// First tick of a timer that starts one `period` from now.
fn first_deadline(period: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(period).unwrap_or_else(|| now + FAR_FUTURE)
}

async fn run_autosave(store: SharedTasks, period: Duration, mut shutdown_rx: watch::Receiver<bool>) {
    let mut ticker = time::interval_at(first_deadline(period), period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = store.lock().save() {
                    warn!(error = %e, "autosave failed");
                    msg_error!(Message::AutosaveFailed(e.to_string()));
                }
            }
            _ = shutdown_rx.changed() => break,
        }
    }
}

async fn run_reminders(
    store: SharedTasks,
    period: Duration,
    due_soon_days: i64,
    notifier: ReminderNotifier,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = store.lock().all().to_vec();
                let reminders = reminder::scan(&snapshot, Local::now().date_naive(), due_soon_days);
                debug!(count = reminders.len(), "reminder scan finished");
                if !reminders.is_empty() {
                    notifier(&reminders);
                }
            }
            _ = shutdown_rx.changed() => break,
        }
    }
}

/// Prints the timer settings of a starting session.
pub fn announce(settings: &SchedulerSettings) {
    msg_info!(Message::SchedulerStarted {
        autosave_secs: settings.autosave_interval.as_secs(),
        reminder_secs: settings.reminder_interval.map(|i| i.as_secs()),
    });
}
