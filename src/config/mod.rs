use crate::core::clock::ClockPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::actor::{Actor, NAMESPACE_EMPLOYEE};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Keys every configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 4] = [
    "database",
    "namespace",
    "legacy_namespace",
    "min_clock_out_minutes",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Attendance dataset to clock into; `None` → the actor's role default.
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default = "default_legacy_namespace")]
    pub legacy_namespace: String,
    #[serde(default = "default_min_clock_out")]
    pub min_clock_out_minutes: i64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_legacy_namespace() -> String {
    "attendanceRows".to_string()
}
fn default_min_clock_out() -> i64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            namespace: None,
            legacy_namespace: default_legacy_namespace(),
            min_clock_out_minutes: default_min_clock_out(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Keys of `KNOWN_KEYS` absent from the config file on disk.
    pub fn missing_keys() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(serde_yaml::Value::String(k.to_string())))
            .collect())
    }

    pub fn policy(&self) -> AppResult<ClockPolicy> {
        ClockPolicy::from_minutes(self.min_clock_out_minutes).ok_or_else(|| {
            AppError::Config(format!(
                "min_clock_out_minutes out of range: {}",
                self.min_clock_out_minutes
            ))
        })
    }

    /// Values present but unusable, as messages.
    pub fn invalid_values(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Err(e) = self.policy() {
            problems.push(e.to_string());
        }
        problems
    }

    /// Namespace precedence: explicit override > configured > role default.
    pub fn resolve_namespace(&self, cli_override: Option<&String>, actor: Option<&Actor>) -> String {
        if let Some(ns) = cli_override {
            return ns.clone();
        }
        if let Some(ns) = &self.namespace {
            return ns.clone();
        }
        actor
            .map(|a| a.role.default_namespace())
            .unwrap_or(NAMESPACE_EMPLOYEE)
            .to_string()
    }

    /// Initialize configuration and database files.
    /// Returns the database path written in the configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("rattendance.sqlite"),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config.database)
    }
}
