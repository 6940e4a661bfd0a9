#[cfg(test)]
mod tests {
    use tasklite::db::db::Db;
    use tasklite::db::tasks::Tasks;
    use tasklite::libs::error::StoreError;
    use tasklite::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    fn task_under_test() -> Task {
        Task::new("-123", "1 task under test", -25, "Completed")
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_then_read_round_trip(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        assert_eq!(tasks.get_description("-123").unwrap(), "1 task under test");
        assert_eq!(tasks.get_status("-123").unwrap(), "Completed");
        assert_eq!(tasks.get_user_id("-123").unwrap(), -25);

        // Exactly one row exists for the id
        let stored = tasks.fetch_for_user(-25).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], task_under_test());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_duplicate_id_rejected(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        let duplicate = Task::new("-123", "another description", -25, "Active");
        let err = tasks.insert(&duplicate).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(ref id) if id == "-123"));

        // The stored row is untouched
        assert_eq!(tasks.get_description("-123").unwrap(), "1 task under test");
        assert_eq!(tasks.get_status("-123").unwrap(), "Completed");
        assert_eq!(tasks.fetch_for_user(-25).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_existing_task(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();
        tasks.delete("-123").unwrap();

        let err = tasks.get_status("-123").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(tasks.fetch_for_user(-25).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_non_existing_task(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        // Deleting an unknown id succeeds silently and touches nothing
        tasks.delete("-1000").unwrap();
        assert_eq!(tasks.fetch_for_user(-25).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_status_lifecycle(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();
        assert_eq!(tasks.get_status("-123").unwrap(), "Completed");

        tasks.set_status("-123", "Active").unwrap();
        assert_eq!(tasks.get_status("-123").unwrap(), "Active");

        tasks.delete("-123").unwrap();
        let err = tasks.get_status("-123").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_status_idempotent(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        tasks.set_status("-123", "Active").unwrap();
        tasks.set_status("-123", "Active").unwrap();

        assert_eq!(tasks.get_status("-123").unwrap(), "Active");
        assert_eq!(tasks.fetch_for_user(-25).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_status_accepts_arbitrary_string(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        // The store does not validate status values
        tasks.set_status("-123", "WRONG").unwrap();
        assert_eq!(tasks.get_status("-123").unwrap(), "WRONG");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_status_missing_id_is_noop(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        tasks.set_status("-1000", "Active").unwrap();

        // No row was created and the existing row is unchanged
        let err = tasks.get_status("-1000").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(tasks.get_status("-123").unwrap(), "Completed");
        assert_eq!(tasks.fetch_for_user(-25).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_description(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        tasks.set_description("-123", "Updated task description").unwrap();
        assert_eq!(tasks.get_description("-123").unwrap(), "Updated task description");
        assert_eq!(tasks.fetch_for_user(-25).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_description_empty_string(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        tasks.set_description("-123", "").unwrap();
        assert_eq!(tasks.get_description("-123").unwrap(), "");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_description_long_payload(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        let long_description = "qwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM1234567890".repeat(5);
        assert!(long_description.len() > 256);

        tasks.set_description("-123", &long_description).unwrap();
        assert_eq!(tasks.get_description("-123").unwrap(), long_description);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_description_special_symbols(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        let description = "TEST: `~!@#$%^&*()_+=-{}[]|';:\",.<>/?";
        tasks.set_description("-123", description).unwrap();
        assert_eq!(tasks.get_description("-123").unwrap(), description);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_description_missing_id_is_noop(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        tasks.set_description("-1000", "Updated task description").unwrap();

        // No row was created with the new description
        let err = tasks.get_description("-1000").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(tasks.get_description("-123").unwrap(), "1 task under test");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_read_missing_id_fails(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let tasks = Tasks::new(&db).unwrap();

        assert!(matches!(tasks.get_status("-1000").unwrap_err(), StoreError::NotFound(_)));
        assert!(matches!(tasks.get_description("-1000").unwrap_err(), StoreError::NotFound(_)));
        assert!(matches!(tasks.get_user_id("-1000").unwrap_err(), StoreError::NotFound(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_for_user_returns_all_in_insertion_order(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        let expected = vec![
            Task::new("-123", "1 task under test", -25, "Completed"),
            Task::new("-124", "2 task under test", -25, "Completed"),
            Task::new("-125", "3 task under test", -25, "Active"),
        ];
        for task in &expected {
            tasks.insert(task).unwrap();
        }

        // A task owned by somebody else must not show up
        tasks.insert(&Task::new("-200", "other user's task", 7, "Active")).unwrap();

        let fetched = tasks.fetch_for_user(-25).unwrap();
        assert_eq!(fetched, expected);

        // Order is stable across repeated calls
        assert_eq!(tasks.fetch_for_user(-25).unwrap(), fetched);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_for_user_single_task(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        let fetched = tasks.fetch_for_user(-25).unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0], task_under_test());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_for_unknown_user_is_empty(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();

        assert!(tasks.fetch_for_user(-1000).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_for_user_after_deletes_is_empty(_ctx: &mut TaskTestContext) {
        let db = Db::new().unwrap();
        let mut tasks = Tasks::new(&db).unwrap();

        tasks.insert(&task_under_test()).unwrap();
        tasks.delete("-123").unwrap();

        assert!(tasks.fetch_for_user(-25).unwrap().is_empty());
    }
}
