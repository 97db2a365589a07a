use crate::errors::{AppError, AppResult};
use crate::models::overnight::OvernightPolicy;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_worklog")]
    pub worklog: String,
    #[serde(default)]
    pub overnight: OvernightPolicy,
    #[serde(default = "default_start")]
    pub default_start: String,
    #[serde(default = "default_end")]
    pub default_end: String,
}

fn default_worklog() -> String {
    Config::worklog_file().to_string_lossy().to_string()
}
fn default_start() -> String {
    "09:00".to_string()
}
fn default_end() -> String {
    "17:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worklog: default_worklog(),
            overnight: OvernightPolicy::default(),
            default_start: default_start(),
            default_end: default_end(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("clocky")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".clocky")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clocky.conf")
    }

    /// Return the default path of the work log
    pub fn worklog_file() -> PathBuf {
        Self::config_dir().join("worklog.csv")
    }

    /// Work log path with `~` expanded.
    pub fn worklog_path(&self) -> PathBuf {
        expand_tilde(&self.worklog)
    }

    /// Operation log, kept next to the work log (`worklog.csv` → `worklog.ops.log`).
    ///
    /// The `.ops` infix keeps it distinct from the work log whatever its
    /// extension (`shifts.log` → `shifts.ops.log`).
    pub fn log_path(&self) -> PathBuf {
        self.worklog_path().with_extension("ops.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(&path, yaml)?;
        Ok(path)
    }
}
