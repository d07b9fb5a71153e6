//! Show the task list sorted by date and time.
//!
//! Sorting is a read-only view: the stored order in the backing file
//! stays untouched.

use crate::libs::messages::Message;
use crate::libs::task::sorted_by_schedule;
use crate::libs::task_file::TaskFile;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let task_file = TaskFile::load()?;
    if task_file.tasks().is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&sorted_by_schedule(task_file.tasks()))?;
    Ok(())
}
