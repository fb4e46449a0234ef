#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use taskdesk::libs::reminder::{scan, ReminderKind, DEFAULT_DUE_SOON_DAYS};
    use taskdesk::libs::task::{Priority, Task};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn due_in(days: i64, title: &str) -> Task {
        let due = if days >= 0 {
            today().checked_add_days(Days::new(days as u64))
        } else {
            today().checked_sub_days(Days::new(days.unsigned_abs()))
        };
        Task::new(title, "", "General", Priority::High, due)
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(ReminderKind::classify(-1, 3), Some(ReminderKind::Overdue));
        assert_eq!(ReminderKind::classify(0, 3), Some(ReminderKind::DueToday));
        assert_eq!(ReminderKind::classify(1, 3), Some(ReminderKind::DueTomorrow));
        assert_eq!(ReminderKind::classify(2, 3), Some(ReminderKind::DueSoon));
        assert_eq!(ReminderKind::classify(3, 3), Some(ReminderKind::DueSoon));
        assert_eq!(ReminderKind::classify(4, 3), None);
        assert_eq!(ReminderKind::classify(5, 5), Some(ReminderKind::DueSoon));
    }

    #[test]
    fn test_scan() {
        let tasks = vec![
            due_in(-2, "Late"),
            due_in(0, "Today"),
            due_in(1, "Tomorrow"),
            due_in(3, "Soon"),
            due_in(4, "Later"),
            Task::new("Undated", "", "General", Priority::Low, None),
        ];

        let reminders = scan(&tasks, today(), DEFAULT_DUE_SOON_DAYS);
        let found: Vec<(&str, ReminderKind, i64)> = reminders.iter().map(|r| (r.title.as_str(), r.kind, r.days_until_due)).collect();

        assert_eq!(
            found,
            vec![
                ("Late", ReminderKind::Overdue, -2),
                ("Today", ReminderKind::DueToday, 0),
                ("Tomorrow", ReminderKind::DueTomorrow, 1),
                ("Soon", ReminderKind::DueSoon, 3),
            ]
        );
        assert_eq!(reminders[0].priority, "High");
    }

    #[test]
    fn test_completed_tasks_are_ignored() {
        let mut task = due_in(-1, "Done late");
        task.mark_complete();

        assert!(scan(&[task], today(), DEFAULT_DUE_SOON_DAYS).is_empty());
    }
}
