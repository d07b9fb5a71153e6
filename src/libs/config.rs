//! Application configuration: where the task list lives.
//!
//! The configuration is a small JSON file in the platform data
//! directory. Every field is optional, so a missing or empty file
//! keeps the application fully functional on defaults.

use super::data_storage::DataStorage;
use super::messages::Message;
use super::task_file::DATA_FILE_NAME;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Overrides the default backing file location when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the filesystem.
    ///
    /// A missing configuration file is not an error; it yields the
    /// default configuration.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults so re-running the wizard
    /// only changes what the user edits.
    pub fn init() -> Result<Self> {
        let config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let current = match &config.data_file {
            Some(path) => path.display().to_string(),
            None => DataStorage::new().get_path(DATA_FILE_NAME)?.display().to_string(),
        };
        let data_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataFile.to_string())
            .default(current)
            .interact_text()?;

        Ok(Config {
            data_file: Some(PathBuf::from(data_file)),
        })
    }

    /// Resolves the backing file location: the configured override, or
    /// the default `tasks.txt` in the application data directory.
    pub fn data_file_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DATA_FILE_NAME),
        }
    }
}
