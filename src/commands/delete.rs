//! Delete a task from the list.
//!
//! The index refers to the stored order of the backing file, not the
//! sorted view. Without an index the command offers an interactive
//! picker over the current entries.

use crate::libs::messages::Message;
use crate::libs::task_file::TaskFile;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// 0-based position of the task in stored order
    index: Option<usize>,
}

pub fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let mut task_file = TaskFile::load()?;
    if task_file.tasks().is_empty() {
        msg_info!(Message::NoTasksToDelete);
        return Ok(());
    }

    let index = match delete_args.index {
        Some(index) => {
            if index >= task_file.tasks().len() {
                msg_error!(Message::InvalidTaskIndex(index, task_file.tasks().len()));
                return Ok(());
            }
            index
        }
        None => {
            let labels: Vec<String> = task_file
                .tasks()
                .iter()
                .enumerate()
                .map(|(index, task)| format!("{}: {}", index, View::task_label(task)))
                .collect();
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectTaskToDelete.to_string())
                .items(&labels)
                .default(0)
                .interact()?
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask.to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::DeleteCancelled);
        return Ok(());
    }

    let removed = task_file.delete(index)?;

    msg_success!(Message::TaskDeleted(removed.name));
    Ok(())
}
