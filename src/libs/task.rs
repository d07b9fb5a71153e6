//! Task record model: line parsing, serialization and schedule ordering.
//!
//! A task is a named entry on a calendar date with an optional time of
//! day. Records are stored one per line in a pipe-delimited text file:
//!
//! ```text
//! <name>|<year>|<month>|<day>                  (untimed)
//! <name>|<year>|<month>|<day>|<hour>|<minute>  (timed)
//! ```
//!
//! Numeric fields are plain base-10 integers without zero-fill;
//! whitespace around each field is tolerated on read. Whether a task is
//! timed is carried by a single `Option<NaiveTime>`, so a record can
//! never hold an hour without a minute or the other way around.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use std::str::FromStr;
use thiserror::Error;

/// Reasons a stored line is rejected by [`Task::parse_line`].
///
/// The caller decides how to report a rejection; rejected lines are
/// skipped, never fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 4 or 6 fields separated by '|', found {0}")]
    FieldCount(usize),
    #[error("date and time parts must be integers")]
    NonNumeric,
    #[error("no such calendar date")]
    InvalidDate,
    #[error("hour must be in 0-23 and minute in 0-59")]
    InvalidTime,
}

/// A single entry on the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub date: NaiveDate,
    /// Time of day for timed tasks, `None` for untimed ones.
    pub time: Option<NaiveTime>,
}

impl Task {
    pub fn new(name: &str, date: NaiveDate, time: Option<NaiveTime>) -> Self {
        Task {
            name: name.trim().to_string(),
            date,
            time,
        }
    }

    /// Parses one stored line into a task.
    ///
    /// Returns `Ok(None)` for whitespace-only lines, which produce no
    /// record and no warning. A line must carry exactly 4 fields
    /// (untimed) or 6 fields (timed); every numeric field must parse as
    /// an integer and the result must be a real calendar date/time.
    /// The name field is trimmed; an empty name is accepted here, only
    /// interactive add enforces a non-empty one.
    pub fn parse_line(line: &str) -> Result<Option<Task>, LineError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() != 4 && fields.len() != 6 {
            return Err(LineError::FieldCount(fields.len()));
        }

        let year: i32 = int_field(fields[1])?;
        let month: u32 = int_field(fields[2])?;
        let day: u32 = int_field(fields[3])?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(LineError::InvalidDate)?;

        let time = if fields.len() == 6 {
            let hour: u32 = int_field(fields[4])?;
            let minute: u32 = int_field(fields[5])?;
            Some(NaiveTime::from_hms_opt(hour, minute, 0).ok_or(LineError::InvalidTime)?)
        } else {
            None
        };

        Ok(Some(Task {
            name: fields[0].to_string(),
            date,
            time,
        }))
    }

    /// Renders the canonical stored form of this task.
    ///
    /// Numeric fields use their default text form; zero-padded `HH:MM`
    /// is a display concern and never reaches the file.
    pub fn to_line(&self) -> String {
        match self.time {
            Some(time) => format!(
                "{}|{}|{}|{}|{}|{}",
                self.name,
                self.date.year(),
                self.date.month(),
                self.date.day(),
                time.hour(),
                time.minute()
            ),
            None => format!("{}|{}|{}|{}", self.name, self.date.year(), self.date.month(), self.date.day()),
        }
    }

    /// Composite ordering key: date first, then time of day.
    ///
    /// `None < Some(_)` for `Option`, so an untimed task sorts ahead of
    /// every timed task sharing its date.
    pub fn schedule(&self) -> (NaiveDate, Option<NaiveTime>) {
        (self.date, self.time)
    }
}

/// Returns a new sequence ordered by [`Task::schedule`].
///
/// The sort is stable, so tasks with an equal schedule keep their
/// stored relative order. The input collection is left untouched;
/// stored order is never rewritten by sorting.
pub fn sorted_by_schedule(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(Task::schedule);
    sorted
}

fn int_field<T: FromStr>(raw: &str) -> Result<T, LineError> {
    raw.parse().map_err(|_| LineError::NonNumeric)
}
