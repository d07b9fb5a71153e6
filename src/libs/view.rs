//! Console rendering of the task list.
//!
//! Zero-padded dates and `HH:MM` times live here only; the stored form
//! keeps plain unpadded integers.

use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a table, in the order given.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "DATE", "TIME"]);
        for task in tasks {
            table.add_row(row![task.name, task.date.format("%Y-%m-%d"), Self::time_label(task)]);
        }
        table.printstd();

        Ok(())
    }

    /// One-line description used by interactive pickers.
    pub fn task_label(task: &Task) -> String {
        format!("{} - {} ({})", task.name, task.date.format("%Y-%m-%d"), Self::time_label(task))
    }

    fn time_label(task: &Task) -> String {
        match task.time {
            Some(time) => time.format("%H:%M").to_string(),
            None => "untimed".to_string(),
        }
    }
}
