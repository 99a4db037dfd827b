use crate::core::present::BITACORA_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::models::entry::columns;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_log_database")]
    pub log_database: String,
    #[serde(default = "default_limit")]
    pub bitacora_limit: usize,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_downtime_target")]
    pub downtime_target: f64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("bitacora.csv")
        .to_string_lossy()
        .to_string()
}
fn default_log_database() -> String {
    Config::config_dir()
        .join("bitacora.sqlite")
        .to_string_lossy()
        .to_string()
}
fn default_limit() -> usize {
    BITACORA_LIMIT
}
fn default_top_n() -> usize {
    3
}
fn default_downtime_target() -> f64 {
    83.0
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_database: default_log_database(),
            bitacora_limit: default_limit(),
            top_n: default_top_n(),
            downtime_target: default_downtime_target(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bitacora")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".bitacora")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bitacora.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            cfg.validate()?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    fn validate(&self) -> AppResult<()> {
        if self.bitacora_limit == 0 {
            return Err(AppError::Config("bitacora_limit must be at least 1".into()));
        }
        if self.top_n == 0 {
            return Err(AppError::Config("top_n must be at least 1".into()));
        }
        if !self.downtime_target.is_finite() || self.downtime_target < 0.0 {
            return Err(AppError::Config(
                "downtime_target must be a non-negative number".into(),
            ));
        }
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn log_db_path(&self) -> PathBuf {
        expand_tilde(&self.log_database)
    }

    /// Initialize configuration and data files
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(self)?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {:?}", Self::config_file()));
        }

        let data = self.data_path();
        ensure_parent(&data)?;
        if !data.exists() {
            let mut wtr = csv::Writer::from_path(&data)?;
            wtr.write_record(columns::ALL)?;
            wtr.flush()?;
        }
        success(format!("Data file:   {:?}", data));

        let db = self.log_db_path();
        ensure_parent(&db)?;
        success(format!("Log db:      {:?}", db));

        Ok(())
    }
}

fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("top_n: 5\n").unwrap();
        assert_eq!(cfg.top_n, 5);
        assert_eq!(cfg.bitacora_limit, BITACORA_LIMIT);
        assert_eq!(cfg.downtime_target, 83.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let cfg: Config = serde_yaml::from_str("bitacora_limit: 0\n").unwrap();
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
    }
}
