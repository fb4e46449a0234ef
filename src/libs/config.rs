//! Configuration management for taskdesk.
//!
//! Settings live in `config.json` inside the platform data directory resolved
//! by [`DataStorage`]. A missing file is not an error: every section has
//! defaults that match the behavior of a fresh install.
//!
//! ## Configuration Structure
//!
//! - **Storage**: optional custom path of the task file
//! - **Categories**: the categories offered when adding or editing tasks
//! - **Autosave**: how often a running session writes the task file
//! - **Reminders**: whether and how often due dates are checked
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.reminders.due_soon_days = 5;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::tasks::TASKS_FILE_NAME;
use crate::libs::messages::Message;
use crate::libs::reminder::DEFAULT_DUE_SOON_DAYS;
use crate::libs::task::DEFAULT_CATEGORIES;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Periodic save of a running session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AutosaveConfig {
    /// Seconds between two automatic saves.
    pub interval_secs: u64,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        AutosaveConfig { interval_secs: 30 }
    }
}

impl AutosaveConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

/// Due date reminder scan.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReminderConfig {
    pub enabled: bool,

    /// Seconds between two scans of a running session.
    pub interval_secs: u64,

    /// Pending tasks due within this many days get a "due soon" reminder.
    /// Overdue, due today and due tomorrow are always reported.
    pub due_soon_days: i64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        ReminderConfig {
            enabled: true,
            interval_secs: 3600,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
        }
    }
}

impl ReminderConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Custom task file location. The data directory is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Categories a user may pick for new or edited tasks.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    #[serde(default)]
    pub autosave: AutosaveConfig,

    #[serde(default)]
    pub reminders: ReminderConfig,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: None,
            categories: default_categories(),
            autosave: AutosaveConfig::default(),
            reminders: ReminderConfig::default(),
        }
    }
}

impl Config {
    /// Reads the configuration file, or returns defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, overwriting any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Path of the task file: the configured one, or `tasks.json` in the data
    /// directory.
    pub fn tasks_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(TASKS_FILE_NAME)?),
        }
    }

    /// Runs the interactive setup wizard, starting from the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: Message::ConfigModuleStorage.to_string(),
            },
            ConfigModule {
                key: "categories".to_string(),
                name: Message::ConfigModuleCategories.to_string(),
            },
            ConfigModule {
                key: "autosave".to_string(),
                name: Message::ConfigModuleAutosave.to_string(),
            },
            ConfigModule {
                key: "reminders".to_string(),
                name: Message::ConfigModuleReminders.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    msg_print!(Message::ConfigModuleStorage);
                    let current = config.data_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
                    let raw: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDataFile.to_string())
                        .default(current)
                        .allow_empty(true)
                        .interact_text()?;
                    config.data_file = Some(raw.trim()).filter(|p| !p.is_empty()).map(PathBuf::from);
                }
                "categories" => {
                    msg_print!(Message::ConfigModuleCategories);
                    let raw: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptCategories.to_string())
                        .default(config.categories.join(", "))
                        .interact_text()?;
                    let categories: Vec<String> = raw.split(',').map(str::trim).filter(|c| !c.is_empty()).map(str::to_string).collect();
                    if !categories.is_empty() {
                        config.categories = categories;
                    }
                }
                "autosave" => {
                    msg_print!(Message::ConfigModuleAutosave);
                    config.autosave.interval_secs = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptAutosaveInterval.to_string())
                        .default(config.autosave.interval_secs)
                        .interact_text()?;
                }
                "reminders" => {
                    msg_print!(Message::ConfigModuleReminders);
                    let default = config.reminders.clone();
                    config.reminders = ReminderConfig {
                        enabled: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRemindersEnabled.to_string())
                            .default(default.enabled)
                            .interact()?,
                        interval_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptReminderInterval.to_string())
                            .default(default.interval_secs)
                            .interact_text()?,
                        due_soon_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDueSoonDays.to_string())
                            .default(default.due_soon_days)
                            .interact_text()?,
                    };
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
