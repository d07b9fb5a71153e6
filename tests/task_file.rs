#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use std::fs;
    use std::path::PathBuf;
    use taskline::libs::task::Task;
    use taskline::libs::task_file::TaskFile;
    use tempfile::TempDir;

    fn data_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("tasks.txt")
    }

    fn untimed(name: &str, year: i32, month: u32, day: u32) -> Task {
        Task::new(name, NaiveDate::from_ymd_opt(year, month, day).unwrap(), None)
    }

    fn timed(name: &str, year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Task {
        Task::new(
            name,
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            Some(NaiveTime::from_hms_opt(hour, minute, 0).unwrap()),
        )
    }

    #[test]
    fn test_missing_file_yields_empty_collection() {
        let temp_dir = tempfile::tempdir().unwrap();

        let task_file = TaskFile::load_from(data_path(&temp_dir)).unwrap();
        assert!(task_file.tasks().is_empty());
    }

    #[test]
    fn test_add_persists_to_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = data_path(&temp_dir);

        let mut task_file = TaskFile::load_from(path.clone()).unwrap();
        task_file.add(untimed("Buy milk", 2024, 1, 2)).unwrap();
        task_file.add(timed("Standup", 2024, 1, 2, 9, 30)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Buy milk|2024|1|2\nStandup|2024|1|2|9|30\n");

        // A fresh load sees the same records
        let reloaded = TaskFile::load_from(path).unwrap();
        assert_eq!(reloaded.tasks(), task_file.tasks());
    }

    #[test]
    fn test_delete_removes_record_and_persists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = data_path(&temp_dir);

        let mut task_file = TaskFile::load_from(path.clone()).unwrap();
        task_file.add(untimed("first", 2024, 1, 1)).unwrap();
        task_file.add(untimed("second", 2024, 1, 2)).unwrap();

        let removed = task_file.delete(0).unwrap();
        assert_eq!(removed.name, "first");
        assert_eq!(task_file.tasks().len(), 1);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "second|2024|1|2\n");
    }

    #[test]
    fn test_delete_out_of_range_leaves_collection_unchanged() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = data_path(&temp_dir);

        let mut task_file = TaskFile::load_from(path.clone()).unwrap();
        task_file.add(untimed("only", 2024, 1, 1)).unwrap();

        assert!(task_file.delete(5).is_err());
        assert_eq!(task_file.tasks().len(), 1);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "only|2024|1|1\n");
    }

    #[test]
    fn test_load_skips_invalid_and_blank_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = data_path(&temp_dir);
        fs::write(
            &path,
            "Buy milk|2024|1|2\n\nMeeting|2024|2|30\nbad|line\nStandup|2024|1|2|9|30\nX|2024|1|1|24|0\n",
        )
        .unwrap();

        let task_file = TaskFile::load_from(path).unwrap();
        let names: Vec<&str> = task_file.tasks().iter().map(|task| task.name.as_str()).collect();
        assert_eq!(names, ["Buy milk", "Standup"]);
    }

    #[test]
    fn test_stored_order_is_insertion_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = data_path(&temp_dir);

        // Appended out of calendar order on purpose
        let mut task_file = TaskFile::load_from(path.clone()).unwrap();
        task_file.add(untimed("late", 2025, 12, 31)).unwrap();
        task_file.add(untimed("early", 2024, 1, 1)).unwrap();

        let reloaded = TaskFile::load_from(path).unwrap();
        let names: Vec<&str> = reloaded.tasks().iter().map(|task| task.name.as_str()).collect();
        assert_eq!(names, ["late", "early"]);
    }
}
