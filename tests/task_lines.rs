#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use taskline::libs::task::{LineError, Task};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_parse_untimed_line() {
        let task = Task::parse_line("Buy milk|2024|1|2").unwrap().unwrap();
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.date, date(2024, 1, 2));
        assert_eq!(task.time, None);
    }

    #[test]
    fn test_parse_timed_line() {
        let task = Task::parse_line("Standup|2024|1|2|9|30").unwrap().unwrap();
        assert_eq!(task.name, "Standup");
        assert_eq!(task.date, date(2024, 1, 2));
        assert_eq!(task.time, Some(time(9, 30)));
    }

    #[test]
    fn test_parse_trims_whitespace_around_fields() {
        let task = Task::parse_line("  Dentist  | 2024 | 11 | 5 | 16 | 45 ").unwrap().unwrap();
        assert_eq!(task.name, "Dentist");
        assert_eq!(task.date, date(2024, 11, 5));
        assert_eq!(task.time, Some(time(16, 45)));
    }

    #[test]
    fn test_parse_blank_line_produces_no_record() {
        assert_eq!(Task::parse_line("").unwrap(), None);
        assert_eq!(Task::parse_line("   \t  ").unwrap(), None);
    }

    #[test]
    fn test_parse_empty_name_accepted_on_load() {
        let task = Task::parse_line("|2024|1|1").unwrap().unwrap();
        assert_eq!(task.name, "");
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert_eq!(Task::parse_line("A|2024|1").unwrap_err(), LineError::FieldCount(3));
        assert_eq!(Task::parse_line("A|2024|1|2|9").unwrap_err(), LineError::FieldCount(5));
        assert_eq!(Task::parse_line("A|2024|1|2|9|30|0").unwrap_err(), LineError::FieldCount(7));
    }

    #[test]
    fn test_parse_rejects_non_numeric_fields() {
        assert_eq!(Task::parse_line("A|twenty|1|2").unwrap_err(), LineError::NonNumeric);
        assert_eq!(Task::parse_line("A|2024|1|2|nine|30").unwrap_err(), LineError::NonNumeric);
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        // Feb 30 never exists
        assert_eq!(Task::parse_line("Meeting|2024|2|30").unwrap_err(), LineError::InvalidDate);
        assert_eq!(Task::parse_line("A|2024|13|1").unwrap_err(), LineError::InvalidDate);
        // Feb 29 only on leap years
        assert_eq!(Task::parse_line("A|2023|2|29").unwrap_err(), LineError::InvalidDate);
        assert!(Task::parse_line("A|2024|2|29").unwrap().is_some());
    }

    #[test]
    fn test_parse_rejects_out_of_range_time() {
        assert_eq!(Task::parse_line("X|2024|1|1|24|0").unwrap_err(), LineError::InvalidTime);
        assert_eq!(Task::parse_line("X|2024|1|1|12|60").unwrap_err(), LineError::InvalidTime);
    }

    #[test]
    fn test_to_line_untimed() {
        let task = Task::new("Buy milk", date(2024, 1, 2), None);
        assert_eq!(task.to_line(), "Buy milk|2024|1|2");
    }

    #[test]
    fn test_to_line_has_no_zero_fill() {
        let task = Task::new("Standup", date(2024, 3, 4), Some(time(9, 5)));
        assert_eq!(task.to_line(), "Standup|2024|3|4|9|5");
    }

    #[test]
    fn test_round_trip_untimed() {
        let task = Task::new("Water plants", date(2025, 12, 31), None);
        let reparsed = Task::parse_line(&task.to_line()).unwrap().unwrap();
        assert_eq!(reparsed, task);
    }

    #[test]
    fn test_round_trip_timed() {
        let task = Task::new("Call mom", date(2025, 6, 1), Some(time(18, 0)));
        let reparsed = Task::parse_line(&task.to_line()).unwrap().unwrap();
        assert_eq!(reparsed, task);
    }
}
