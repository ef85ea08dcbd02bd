use crate::errors::{AppError, AppResult};
use crate::models::column::Column;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const APP_DIR: &str = "clocklog";
pub const DEFAULT_CHART_WIDTH: usize = 35;
pub const DEFAULT_TICK: &str = "▇";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_tick")]
    pub tick: String,
    #[serde(default = "default_columns")]
    pub default_columns: Vec<Column>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_chart_width() -> usize {
    DEFAULT_CHART_WIDTH
}
fn default_tick() -> String {
    DEFAULT_TICK.to_string()
}
pub fn default_columns() -> Vec<Column> {
    vec![Column::Range, Column::Duration, Column::Description]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            chart_width: default_chart_width(),
            tick: default_tick(),
            default_columns: default_columns(),
        }
    }
}

impl Config {
    /// Per-user data directory: `$XDG_DATA_HOME/clocklog`, or
    /// `~/.local/share/clocklog` when the variable is unset or empty.
    pub fn data_dir() -> PathBuf {
        let base = match env::var_os("XDG_DATA_HOME") {
            Some(v) if !v.is_empty() => PathBuf::from(v),
            _ => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local")
                .join("share"),
        };
        base.join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::data_dir().join("clocklog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::data_dir().join("db.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration file, creating the data directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::data_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Make sure the directory holding the database exists.
    pub fn ensure_database_dir(&self) -> AppResult<()> {
        let path = PathBuf::from(&self.database);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
