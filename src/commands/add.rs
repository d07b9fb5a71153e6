//! Add a task to the list.
//!
//! Every detail can be given as an argument; anything omitted is
//! collected interactively. Interactive date and time input re-prompts
//! on invalid values instead of aborting, and validation follows the
//! same calendar rules the line parser applies to stored records.

use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::task_file::TaskFile;
use crate::{msg_error, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    name: Option<String>,

    /// Task date in YYYY-MM-DD format
    #[arg(short, long)]
    date: Option<String>,

    /// Time of day in HH:MM format; omit for an untimed task
    #[arg(short, long)]
    time: Option<String>,
}

pub fn cmd(add_args: AddArgs) -> Result<()> {
    let name: String = match add_args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        msg_error!(Message::TaskNameEmpty);
        return Ok(());
    }

    let date = match add_args.date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateArg(raw)))?,
        None => prompt_date()?,
    };

    let time = match add_args.time {
        Some(raw) => Some(NaiveTime::parse_from_str(&raw, "%H:%M").map_err(|_| msg_error_anyhow!(Message::InvalidTimeArg(raw)))?),
        None => prompt_time()?,
    };

    let mut task_file = TaskFile::load()?;
    task_file.add(Task::new(&name, date, time))?;

    msg_success!(Message::TaskAdded(name));
    Ok(())
}

/// Collects year, month and day until they form a real calendar date.
fn prompt_date() -> Result<NaiveDate> {
    loop {
        let year: i32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskYear.to_string())
            .interact_text()?;
        let month: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskMonth.to_string())
            .interact_text()?;
        let day: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDay.to_string())
            .interact_text()?;

        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => return Ok(date),
            None => msg_error!(Message::InvalidDateEntered),
        }
    }
}

/// Asks whether the task is timed and, if so, collects hour and minute
/// until they form a valid time of day.
fn prompt_time() -> Result<Option<NaiveTime>> {
    let timed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskHasTime.to_string())
        .default(false)
        .interact()?;
    if !timed {
        return Ok(None);
    }

    loop {
        let hour: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskHour.to_string())
            .interact_text()?;
        let minute: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskMinute.to_string())
            .interact_text()?;

        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(time) => return Ok(Some(time)),
            None => msg_error!(Message::InvalidTimeEntered),
        }
    }
}
