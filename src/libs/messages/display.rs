//! Display implementation for taskline application messages.
//!
//! Single source of truth for all user-facing text: every `Message`
//! variant maps to its console wording here, with type-safe parameter
//! interpolation.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(name) => format!("Task '{}' added to the list.", name),
            Message::TaskDeleted(name) => format!("Deleted task: {}", name),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks to display.".to_string(),
            Message::NoTasksToDelete => "No tasks to delete.".to_string(),
            Message::InvalidTaskIndex(index, count) => format!("No task at index {} (the list has {} task(s)).", index, count),
            Message::DeleteCancelled => "Delete cancelled.".to_string(),

            // === STORAGE MESSAGES ===
            Message::SkippedLine(number, content, reason) => format!("Skipping invalid line {}: '{}' ({})", number, content, reason),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigRemoved => "Configuration removed".to_string(),

            // === PROMPTS ===
            Message::PromptDataFile => "Enter the task file path".to_string(),
            Message::PromptTaskName => "Enter task name".to_string(),
            Message::PromptTaskYear => "Enter year (e.g., 2026)".to_string(),
            Message::PromptTaskMonth => "Enter month (1-12)".to_string(),
            Message::PromptTaskDay => "Enter day (1-31)".to_string(),
            Message::PromptTaskHasTime => "Is this a timed task?".to_string(),
            Message::PromptTaskHour => "Enter hour (0-23)".to_string(),
            Message::PromptTaskMinute => "Enter minute (0-59)".to_string(),
            Message::PromptSelectTaskToDelete => "Select the task to delete".to_string(),
            Message::ConfirmDeleteTask => "Are you sure you want to delete this task?".to_string(),

            // === VALIDATION MESSAGES ===
            Message::TaskNameEmpty => "Task name cannot be empty.".to_string(),
            Message::InvalidDateArg(raw) => format!("Invalid date '{}', expected YYYY-MM-DD.", raw),
            Message::InvalidTimeArg(raw) => format!("Invalid time '{}', expected HH:MM.", raw),
            Message::InvalidDateEntered => "Invalid date entered. Please try again.".to_string(),
            Message::InvalidTimeEntered => "Invalid time entered. Please try again.".to_string(),
        };
        write!(f, "{}", text)
    }
}
