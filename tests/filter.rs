#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskdesk::libs::filter::{visible_tasks, StatusFilter, TaskQuery};
    use taskdesk::libs::task::{Priority, Task, TaskRecord};

    fn task(id: u64, title: &str, category: &str, priority: &str, due: Option<&str>, completed: bool) -> Task {
        Task::from_record(TaskRecord {
            id: Some(id),
            title: Some(title.to_string()),
            description: Some(format!("{} notes", title.to_lowercase())),
            category: Some(category.to_string()),
            priority: Some(priority.to_string()),
            due_date: due.map(str::to_string),
            completed: Some(completed),
            created_at: Some("2024-01-01 09:00:00".to_string()),
            completed_at: None,
        })
        .unwrap()
    }

    fn ids(tasks: &[&Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, "Buy groceries", "Personal", "Low", Some("2024-01-05"), false),
            task(2, "Fix production bug", "Work", "Critical", None, false),
            task(3, "Submit expenses", "Finance", "High", Some("2024-01-02"), true),
            task(4, "Prepare demo", "Work", "Critical", Some("2024-01-10"), false),
            task(5, "Dentist", "Health", "Medium", Some("2024-01-03"), false),
        ]
    }

    #[test]
    fn test_display_order() {
        let tasks = sample();
        let visible = visible_tasks(&tasks, &TaskQuery::default());

        // pending first, then priority rank, then due date with undated last
        assert_eq!(ids(&visible), vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn test_critical_before_high() {
        let tasks = vec![
            task(1, "Task A", "Work", "High", Some("2024-01-01"), false),
            task(2, "Task B", "Work", "Critical", Some("2024-06-01"), false),
        ];
        assert_eq!(ids(&visible_tasks(&tasks, &TaskQuery::default())), vec![2, 1]);
    }

    #[test]
    fn test_sort_is_stable() {
        let tasks = vec![
            task(10, "Same A", "Work", "High", None, false),
            task(11, "Same B", "Work", "High", None, false),
            task(12, "Same C", "Work", "High", None, false),
        ];
        let visible = visible_tasks(&tasks, &TaskQuery::default());
        assert_eq!(ids(&visible), vec![10, 11, 12]);
    }

    #[test]
    fn test_unknown_priority_sorts_last() {
        let tasks = vec![task(1, "Odd", "Work", "Someday", None, false), task(2, "Normal", "Work", "Low", None, false)];
        let visible = visible_tasks(&tasks, &TaskQuery::default());
        assert_eq!(ids(&visible), vec![2, 1]);
    }

    #[test]
    fn test_search_title_and_description() {
        let tasks = sample();

        let query = TaskQuery::from_raw("BUG", "All", "All", StatusFilter::All);
        assert_eq!(ids(&visible_tasks(&tasks, &query)), vec![2]);

        // descriptions are "<title> notes"
        let query = TaskQuery::from_raw("notes", "All", "All", StatusFilter::All);
        assert_eq!(visible_tasks(&tasks, &query).len(), tasks.len());

        let query = TaskQuery::from_raw("nothing like this", "All", "All", StatusFilter::All);
        assert!(visible_tasks(&tasks, &query).is_empty());
    }

    #[test]
    fn test_category_and_priority_filters() {
        let tasks = sample();

        let query = TaskQuery::from_raw("", "Work", "All", StatusFilter::All);
        assert_eq!(ids(&visible_tasks(&tasks, &query)), vec![4, 2]);

        let query = TaskQuery::from_raw("", "All", "Medium", StatusFilter::All);
        assert_eq!(ids(&visible_tasks(&tasks, &query)), vec![5]);

        let query = TaskQuery::from_raw("", "All", "critical", StatusFilter::All);
        assert_eq!(query.priority, Some(Priority::Critical));
        assert_eq!(ids(&visible_tasks(&tasks, &query)), vec![4, 2]);

        let query = TaskQuery::from_raw("", "All", "Someday", StatusFilter::All);
        assert_eq!(query.priority, Some(Priority::Other("Someday".to_string())));

        let query = TaskQuery::from_raw("", "all", "", StatusFilter::All);
        assert_eq!(query.category, None);
        assert_eq!(query.priority, None);
    }

    #[test]
    fn test_status_filter() {
        let tasks = sample();

        let completed = TaskQuery::from_raw("", "All", "All", StatusFilter::Completed);
        assert_eq!(ids(&visible_tasks(&tasks, &completed)), vec![3]);

        let pending = TaskQuery::from_raw("", "All", "All", StatusFilter::Pending);
        assert_eq!(visible_tasks(&tasks, &pending).len(), 4);

        assert_eq!("pending".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert!("done".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let tasks = sample();

        let query = TaskQuery {
            search: "demo".to_string(),
            category: Some("Work".to_string()),
            priority: Some(Priority::Critical),
            status: StatusFilter::Pending,
        };
        assert_eq!(ids(&visible_tasks(&tasks, &query)), vec![4]);

        let query = TaskQuery {
            search: "demo".to_string(),
            category: Some("Personal".to_string()),
            ..Default::default()
        };
        assert!(visible_tasks(&tasks, &query).is_empty());
    }

    #[test]
    fn test_overdue_is_date_only() {
        let tasks = sample();
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        let overdue: Vec<u64> = tasks.iter().filter(|t| t.is_overdue(today)).map(|t| t.id).collect();
        // task 1 is due today, task 3 is past due but completed
        assert_eq!(overdue, vec![5]);
    }
}
