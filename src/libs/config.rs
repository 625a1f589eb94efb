//! Configuration for the emsys application.
//!
//! Settings are kept as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). A missing file is not an
//! error: the defaults below apply.
//!
//! ## Settings
//!
//! - `db_file_name`: SQLite file created next to the config file
//! - `currency_symbol`: prefix used when rendering salaries
//!
//! The `EMSYS_DB_PATH` environment variable, when set, replaces the resolved
//! database path entirely.
//!
//! ```rust,no_run
//! use emsys::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.db_path()?;
//! # Ok::<(), emsys::libs::error::EmsError>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::error::EmsResult;
use crate::libs::messages::Message;
use crate::msg_debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "employee_management.sqlite3";
pub const DB_PATH_ENV: &str = "EMSYS_DB_PATH";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// File name of the SQLite database inside the data directory.
    pub db_file_name: String,

    /// Currency prefix for salary output.
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_file_name: DB_FILE_NAME.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    /// Loads `config.json` from the data directory, or defaults if absent.
    pub fn read() -> EmsResult<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> EmsResult<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        msg_debug!(Message::ConfigLoaded(path.display().to_string()));
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> EmsResult<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Where the employee database lives.
    pub fn db_path(&self) -> EmsResult<PathBuf> {
        match env::var_os(DB_PATH_ENV) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(DataStorage::new().get_path(&self.db_file_name)?),
        }
    }
}
