#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use taskdesk::commands::Cli;
    use taskdesk::db::tasks::Tasks;
    use taskdesk::libs::task::Priority;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use tokio::sync::{Mutex, MutexGuard};

    // HOME is process-wide, so tests that point it at a temp dir take turns.
    static ENV_LOCK: Mutex<()> = Mutex::const_new(());

    struct CommandTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl AsyncTestContext for CommandTestContext {
        async fn setup() -> Self {
            let guard = ENV_LOCK.lock().await;
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CommandTestContext { _guard: guard, temp_dir }
        }
    }

    impl CommandTestContext {
        fn tasks_file(&self) -> PathBuf {
            self.temp_dir.path().join("my_tasks.json")
        }

        fn cli(&self, args: &[&str]) -> Cli {
            let file = self.tasks_file();
            let mut argv = vec!["taskdesk", "--file", file.to_str().unwrap()];
            argv.extend_from_slice(args);
            Cli::try_parse_from(argv).unwrap()
        }

        async fn run(&self, args: &[&str]) -> anyhow::Result<()> {
            self.cli(args).run().await
        }

        fn load(&self) -> Tasks {
            Tasks::load(self.tasks_file())
        }
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_add_with_flags(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Prepare slides", "-d", "For Monday", "-c", "work", "-p", "high", "--due", "2030-01-15"])
            .await
            .unwrap();

        let tasks = ctx.load();
        assert_eq!(tasks.len(), 1);
        let task = &tasks.all()[0];
        assert_eq!(task.title, "Prepare slides");
        assert_eq!(task.description, "For Monday");
        assert_eq!(task.category, "Work");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, chrono::NaiveDate::from_ymd_opt(2030, 1, 15));
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_add_defaults(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Plain"]).await.unwrap();

        let task = ctx.load().all()[0].clone();
        assert_eq!(task.category, "General");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_add_rejects_invalid_input(ctx: &mut CommandTestContext) {
        assert!(ctx.run(&["add", "Unknown category", "-c", "Garden"]).await.is_err());
        assert!(ctx.run(&["add", "   "]).await.is_err());
        assert!(!ctx.tasks_file().exists());

        let file = ctx.tasks_file();
        let file = file.to_str().unwrap();
        assert!(Cli::try_parse_from(["taskdesk", "--file", file, "add", "Bad", "-p", "urgent"]).is_err());
        assert!(Cli::try_parse_from(["taskdesk", "--file", file, "add", "Bad", "--due", "2024-02-30"]).is_err());
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_done_undo_edit_delete(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Lifecycle", "--due", "2030-03-01"]).await.unwrap();
        let id = ctx.load().all()[0].id.to_string();

        ctx.run(&["done", &id]).await.unwrap();
        assert!(ctx.load().all()[0].completed());

        ctx.run(&["undo", &id]).await.unwrap();
        assert!(!ctx.load().all()[0].completed());

        ctx.run(&["edit", &id, "--title", "Renamed", "-p", "critical", "--clear-due"]).await.unwrap();
        let task = ctx.load().all()[0].clone();
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.priority, Priority::Critical);
        assert_eq!(task.due_date, None);

        assert!(ctx.run(&["edit", &id, "--title", ""]).await.is_err());
        assert_eq!(ctx.load().all()[0].title, "Renamed");

        ctx.run(&["delete", &id, "-y"]).await.unwrap();
        assert!(ctx.load().is_empty());

        assert!(ctx.run(&["done", &id]).await.is_err());
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_read_only_commands(ctx: &mut CommandTestContext) {
        ctx.run(&["list"]).await.unwrap();
        ctx.run(&["add", "Overdue", "--due", "2020-01-01"]).await.unwrap();
        ctx.run(&["add", "Later", "-c", "Personal"]).await.unwrap();

        let before = std::fs::read_to_string(ctx.tasks_file()).unwrap();
        ctx.run(&["list", "--status", "pending", "-c", "Personal"]).await.unwrap();
        ctx.run(&["stats"]).await.unwrap();
        ctx.run(&["remind"]).await.unwrap();
        let id = ctx.load().all()[0].id.to_string();
        ctx.run(&["show", &id]).await.unwrap();

        assert_eq!(std::fs::read_to_string(ctx.tasks_file()).unwrap(), before);
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_export_and_import(ctx: &mut CommandTestContext) {
        let csv_path = ctx.temp_dir.path().join("out.csv");
        let csv_arg = csv_path.to_str().unwrap().to_string();

        // nothing to export yet
        ctx.run(&["export", "-o", &csv_arg]).await.unwrap();
        assert!(!csv_path.exists());

        ctx.run(&["add", "Exported", "-p", "low"]).await.unwrap();
        ctx.run(&["export", "-f", "csv", "-o", &csv_arg]).await.unwrap();
        assert!(csv_path.exists());

        ctx.run(&["import", &csv_arg]).await.unwrap();
        let tasks = ctx.load();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.all().iter().all(|t| t.title == "Exported" && t.priority == Priority::Low));
        assert_ne!(tasks.all()[0].id, tasks.all()[1].id);

        let missing = ctx.temp_dir.path().join("missing.csv");
        assert!(ctx.run(&["import", missing.to_str().unwrap()]).await.is_err());
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_init_defaults(ctx: &mut CommandTestContext) {
        Cli::try_parse_from(["taskdesk", "init", "--defaults"]).unwrap().run().await.unwrap();

        let config = taskdesk::libs::config::Config::read().unwrap();
        assert_eq!(config, taskdesk::libs::config::Config::default());
        assert!(config.tasks_path().unwrap().starts_with(ctx.temp_dir.path()));
    }
}
