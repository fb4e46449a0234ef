#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, Timelike};
    use taskdesk::libs::error::TaskError;
    use taskdesk::libs::task::{parse_due_date, validate_category, validate_title, Priority, Task, TaskRecord, TaskUpdate};

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn timestamp(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn record(id: u64, title: &str) -> TaskRecord {
        TaskRecord {
            id: Some(id),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Write report", "Quarterly numbers", "Work", Priority::High, Some(date("2024-03-01")));

        assert_eq!(task.title, "Write report");
        assert_eq!(task.category, "Work");
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed());
        assert!(task.completed_at().is_none());
        assert_eq!(task.created_at().nanosecond(), 0);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let ids: Vec<u64> = (0..50).map(|i| Task::new(&format!("Task {}", i), "", "General", Priority::Low, None).id).collect();

        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "ids must increase: {:?}", pair);
        }
    }

    #[test]
    fn test_complete_and_reopen() {
        let mut task = Task::new("Pay rent", "", "Finance", Priority::Critical, None);
        let created_at = task.created_at();

        task.mark_complete();
        assert!(task.completed());
        assert!(task.completed_at().is_some());

        task.mark_incomplete();
        assert!(!task.completed());
        assert!(task.completed_at().is_none());
        assert_eq!(task.created_at(), created_at);
    }

    #[test]
    fn test_from_record_defaults() {
        let task = Task::from_record(record(7, "Minimal")).unwrap();

        assert_eq!(task.id, 7);
        assert_eq!(task.description, "");
        assert_eq!(task.category, "General");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
        assert!(!task.completed());
        assert!(task.completed_at().is_none());
    }

    #[test]
    fn test_from_record_requires_id_and_title() {
        let missing_id = TaskRecord {
            title: Some("No id".to_string()),
            ..Default::default()
        };
        assert!(matches!(Task::from_record(missing_id), Err(TaskError::MissingField("id"))));

        let blank_title = record(1, "   ");
        assert!(matches!(Task::from_record(blank_title), Err(TaskError::MissingField("title"))));

        let missing_title = TaskRecord {
            id: Some(2),
            ..Default::default()
        };
        assert!(matches!(Task::from_record(missing_title), Err(TaskError::MissingField("title"))));
    }

    #[test]
    fn test_from_record_repairs_completion_stamp() {
        let completed_without_stamp = TaskRecord {
            completed: Some(true),
            created_at: Some("2024-01-01 10:00:00".to_string()),
            ..record(1, "Done long ago")
        };
        let task = Task::from_record(completed_without_stamp).unwrap();
        assert!(task.completed());
        assert_eq!(task.completed_at(), Some(timestamp("2024-01-01 10:00:00")));

        let pending_with_stamp = TaskRecord {
            completed: Some(false),
            completed_at: Some("2024-01-02 10:00:00".to_string()),
            ..record(2, "Reopened")
        };
        let task = Task::from_record(pending_with_stamp).unwrap();
        assert!(!task.completed());
        assert!(task.completed_at().is_none());
    }

    #[test]
    fn test_from_record_drops_bad_dates() {
        let task = Task::from_record(TaskRecord {
            due_date: Some("next friday".to_string()),
            created_at: Some("yesterday".to_string()),
            ..record(3, "Fuzzy")
        })
        .unwrap();
        assert_eq!(task.due_date, None);

        let task = Task::from_record(TaskRecord {
            due_date: Some(String::new()),
            ..record(4, "Empty due date")
        })
        .unwrap();
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_from_record_keeps_unknown_values() {
        let task = Task::from_record(TaskRecord {
            category: Some("Garden".to_string()),
            priority: Some("Urgent".to_string()),
            ..record(5, "Mow the lawn")
        })
        .unwrap();

        assert_eq!(task.category, "Garden");
        assert_eq!(task.priority, Priority::Other("Urgent".to_string()));
        assert_eq!(task.to_record().priority.as_deref(), Some("Urgent"));
        assert!(Priority::Low < task.priority);
    }

    #[test]
    fn test_priority_order() {
        let mut priorities = vec![Priority::Low, Priority::Critical, Priority::Medium, Priority::High];
        priorities.sort();
        assert_eq!(priorities, vec![Priority::Critical, Priority::High, Priority::Medium, Priority::Low]);

        assert_eq!(Priority::parse_known("critical"), Some(Priority::Critical));
        assert_eq!(Priority::parse_known("urgent"), None);
    }

    #[test]
    fn test_record_round_trip() {
        let mut task = Task::new("Round trip", "Keeps every field", "Health", Priority::Low, Some(date("2024-05-20")));
        task.mark_complete();

        let restored = Task::from_record(task.to_record()).unwrap();
        assert_eq!(restored, task);
    }

    #[test]
    fn test_apply_rejects_empty_title() {
        let mut task = Task::new("Keep me", "", "Work", Priority::Medium, None);
        let update = TaskUpdate {
            title: Some("  ".to_string()),
            description: Some("changed".to_string()),
            ..Default::default()
        };

        assert!(matches!(task.apply(update), Err(TaskError::EmptyTitle)));
        assert_eq!(task.title, "Keep me");
        assert_eq!(task.description, "");
    }

    #[test]
    fn test_apply_clears_due_date() {
        let mut task = Task::new("Dated", "", "Work", Priority::Medium, Some(date("2024-01-01")));
        task.apply(TaskUpdate {
            title: Some("  Renamed  ".to_string()),
            due_date: Some(None),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(task.title, "Renamed");
        assert_eq!(task.due_date, None);
        assert!(TaskUpdate::default().is_empty());
    }

    #[test]
    fn test_overdue_and_days_until_due() {
        let today = date("2024-06-10");
        let mut task = Task::new("Dated", "", "Work", Priority::Medium, Some(date("2024-06-09")));

        assert!(task.is_overdue(today));
        assert_eq!(task.days_until_due(today), Some(-1));
        assert!(!task.is_overdue(date("2024-06-09")));

        task.mark_complete();
        assert!(!task.is_overdue(today));

        let undated = Task::new("Undated", "", "Work", Priority::Medium, None);
        assert!(!undated.is_overdue(today));
        assert_eq!(undated.days_until_due(today), None);
    }

    #[test]
    fn test_entry_validation() {
        assert_eq!(validate_title("  Trimmed ").unwrap(), "Trimmed");
        assert!(matches!(validate_title(""), Err(TaskError::EmptyTitle)));

        assert_eq!(parse_due_date("").unwrap(), None);
        assert_eq!(parse_due_date("2024-02-29").unwrap(), Some(date("2024-02-29")));
        assert!(matches!(parse_due_date("2024-13-01"), Err(TaskError::InvalidDueDate(_))));
        assert!(matches!(parse_due_date("01/02/2024"), Err(TaskError::InvalidDueDate(_))));

        let categories = vec!["General".to_string(), "Work".to_string()];
        assert_eq!(validate_category("work", &categories).unwrap(), "Work");
        assert!(matches!(validate_category("Garden", &categories), Err(TaskError::UnknownCategory(_))));
    }
}
