use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = ".rworklog";
pub const CONFIG_FILE: &str = "rworklog.conf";
pub const DATABASE_FILE: &str = "rworklog.sqlite";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Character repeated under the table header.
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Level for the diagnostic log file (`error` .. `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            separator_char: default_separator_char(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// `~/.rworklog`, or `./.rworklog` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    pub fn log_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load the configuration file, or defaults when it does not exist yet.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory, config file and the database file.
    ///
    /// A relative `custom_db` is placed inside the config directory. In test
    /// mode nothing is written under the config directory.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() || is_test => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => dir.join(DATABASE_FILE),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(config.to_yaml()?.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
