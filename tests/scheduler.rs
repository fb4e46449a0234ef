#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;
    use taskdesk::db::tasks::{SharedTasks, Tasks};
    use taskdesk::libs::config::Config;
    use taskdesk::libs::reminder::{Reminder, ReminderKind};
    use taskdesk::libs::scheduler::{ReminderNotifier, Scheduler, SchedulerSettings};
    use taskdesk::libs::task::{Priority, Task};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct SchedulerTestContext {
        temp_dir: TempDir,
        seen: Arc<Mutex<Vec<Reminder>>>,
    }

    impl AsyncTestContext for SchedulerTestContext {
        async fn setup() -> Self {
            SchedulerTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl SchedulerTestContext {
        fn path(&self) -> PathBuf {
            self.temp_dir.path().join("tasks.json")
        }

        fn store(&self) -> SharedTasks {
            Tasks::new(self.path()).into_shared()
        }

        fn notifier(&self) -> ReminderNotifier {
            let seen = self.seen.clone();
            Arc::new(move |reminders: &[Reminder]| seen.lock().extend_from_slice(reminders))
        }
    }

    fn settings(autosave_ms: u64, reminder_ms: Option<u64>) -> SchedulerSettings {
        SchedulerSettings {
            autosave_interval: Duration::from_millis(autosave_ms),
            reminder_interval: reminder_ms.map(Duration::from_millis),
            due_soon_days: 3,
        }
    }

    fn overdue_task() -> Task {
        let yesterday = chrono::Local::now().date_naive().pred_opt().unwrap();
        Task::new("Late report", "", "Work", Priority::High, Some(yesterday))
    }

    #[test_context(SchedulerTestContext)]
    #[tokio::test]
    async fn test_autosave_writes_file(ctx: &mut SchedulerTestContext) {
        let store = ctx.store();
        store.lock().add(Task::new("Autosaved", "", "General", Priority::Medium, None));

        let scheduler = Scheduler::start(store.clone(), settings(50, None), ctx.notifier());
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(ctx.path().exists());
        assert_eq!(Tasks::load(ctx.path()).len(), 1);

        // changes made between ticks are picked up by the next one
        store.lock().add(Task::new("Second", "", "General", Priority::Medium, None));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(Tasks::load(ctx.path()).len(), 2);

        scheduler.shutdown().await.unwrap();
    }

    #[test_context(SchedulerTestContext)]
    #[tokio::test]
    async fn test_first_save_waits_one_period(ctx: &mut SchedulerTestContext) {
        let store = ctx.store();
        store.lock().add(Task::new("Pending save", "", "General", Priority::Medium, None));

        let scheduler = Scheduler::start(store.clone(), settings(60_000, None), ctx.notifier());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!ctx.path().exists());

        // shutdown always saves
        scheduler.shutdown().await.unwrap();
        assert_eq!(Tasks::load(ctx.path()).len(), 1);
    }

    #[test_context(SchedulerTestContext)]
    #[tokio::test]
    async fn test_reminder_scan_runs_immediately(ctx: &mut SchedulerTestContext) {
        let store = ctx.store();
        store.lock().add(overdue_task());
        store.lock().add(Task::new("No due date", "", "General", Priority::Low, None));

        let scheduler = Scheduler::start(store.clone(), settings(60_000, Some(60_000)), ctx.notifier());
        tokio::time::sleep(Duration::from_millis(100)).await;
        scheduler.shutdown().await.unwrap();

        let seen = ctx.seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, ReminderKind::Overdue);
        assert_eq!(seen[0].title, "Late report");
    }

    #[test_context(SchedulerTestContext)]
    #[tokio::test]
    async fn test_disabled_reminders(ctx: &mut SchedulerTestContext) {
        let store = ctx.store();
        store.lock().add(overdue_task());

        let mut config = Config::default();
        config.reminders.enabled = false;
        let from_config = SchedulerSettings::from(&config);
        assert_eq!(from_config.reminder_interval, None);
        assert_eq!(from_config.autosave_interval, Duration::from_secs(30));

        let scheduler = Scheduler::start(store.clone(), from_config, ctx.notifier());
        tokio::time::sleep(Duration::from_millis(100)).await;
        scheduler.shutdown().await.unwrap();

        assert!(ctx.seen.lock().is_empty());
    }

    #[test_context(SchedulerTestContext)]
    #[tokio::test]
    async fn test_never_ending_periods(ctx: &mut SchedulerTestContext) {
        let store = ctx.store();
        store.lock().add(overdue_task());

        let never = SchedulerSettings {
            autosave_interval: Duration::from_secs(u64::MAX),
            reminder_interval: Some(Duration::from_secs(u64::MAX)),
            due_soon_days: 3,
        };
        let scheduler = Scheduler::start(store.clone(), never, ctx.notifier());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!ctx.path().exists());

        // both timers are still alive when asked to stop
        scheduler.shutdown().await.unwrap();
        assert_eq!(Tasks::load(ctx.path()).len(), 1);
        assert_eq!(ctx.seen.lock().len(), 1);
    }

    #[test_context(SchedulerTestContext)]
    #[tokio::test]
    async fn test_shutdown_reports_save_failure(ctx: &mut SchedulerTestContext) {
        // a directory cannot be written as the task file
        let store = Tasks::new(ctx.temp_dir.path()).into_shared();

        let scheduler = Scheduler::start(store, settings(60_000, None), ctx.notifier());
        assert!(scheduler.shutdown().await.is_err());
    }
}
