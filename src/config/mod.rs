use crate::core::notify::{DEFAULT_DISPLAY_SECS, display_window};
use crate::core::tracker::TrackerOptions;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Keep the open session in the store so `start` and `stop` can run
    /// in separate invocations.
    #[serde(default = "default_true")]
    pub persist_active_session: bool,
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
    #[serde(default = "default_true")]
    pub show_duration: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_true() -> bool {
    true
}
fn default_notification_secs() -> u64 {
    DEFAULT_DISPLAY_SECS
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            persist_active_session: default_true(),
            notification_secs: default_notification_secs(),
            show_duration: default_true(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworklog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot be used.
    pub fn validate(&self) -> AppResult<()> {
        display_window(self.notification_secs)?;
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions {
            persist_active_session: self.persist_active_session,
            notification_secs: self.notification_secs,
        }
    }

    /// Initialize configuration and database files.
    /// Returns the database path written into the configuration.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = expand_tilde(&name);
            if p.is_absolute() {
                p
            } else {
                dir.join(p)
            }
        } else {
            dir.join("rworklog.sqlite")
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
