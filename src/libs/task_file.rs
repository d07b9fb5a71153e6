//! Flat-file persistence for the task collection.
//!
//! The backing file holds one record per line in storage order, which
//! is insertion order. The whole collection is rewritten after every
//! mutation; sorting for display is a read-only view and never touches
//! the stored order.

use super::config::Config;
use super::messages::Message;
use super::task::Task;
use crate::{msg_bail_anyhow, msg_warning};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Default backing file name inside the application data directory.
pub const DATA_FILE_NAME: &str = "tasks.txt";

/// Owns the in-memory task collection and its durable file image.
#[derive(Debug)]
pub struct TaskFile {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskFile {
    /// Opens the collection at the configured location.
    pub fn load() -> Result<Self> {
        Self::load_from(Config::read()?.data_file_path()?)
    }

    /// Opens the collection at an explicit path.
    ///
    /// A missing file is not an error; it yields an empty collection.
    /// Each line goes through [`Task::parse_line`]; lines it rejects
    /// are reported as warnings with their 1-based line number and raw
    /// content, then dropped.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let mut tasks = Vec::new();
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            for (index, line) in contents.lines().enumerate() {
                match Task::parse_line(line) {
                    Ok(Some(task)) => tasks.push(task),
                    Ok(None) => {}
                    Err(err) => {
                        msg_warning!(Message::SkippedLine(index + 1, line.trim().to_string(), err.to_string()))
                    }
                }
            }
            debug!("loaded {} tasks from {}", tasks.len(), path.display());
        }
        Ok(TaskFile { path, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task and persists the whole collection.
    pub fn add(&mut self, task: Task) -> Result<()> {
        self.tasks.push(task);
        self.save()
    }

    /// Removes the task at a 0-based stored position and persists.
    ///
    /// An out-of-range index is rejected and the collection stays
    /// unchanged.
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            msg_bail_anyhow!(Message::InvalidTaskIndex(index, self.tasks.len()));
        }
        let removed = self.tasks.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Overwrites the backing file with the current collection.
    ///
    /// On failure the in-memory collection remains valid; the caller
    /// reports the error.
    pub fn save(&self) -> Result<()> {
        let mut contents = String::new();
        for task in &self.tasks {
            contents.push_str(&task.to_line());
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
