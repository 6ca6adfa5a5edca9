//! Loads the `tmon` configuration from `/etc/tmon.conf`. A missing file
//! is not an error: the web UI is expected to come up with usable
//! defaults on a box that has never been configured.

use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const ETC_PATH: &str = "/etc/tmon.conf";

/// Top-level configuration for the traffic monitor web UI.
///
/// Paths are stored as strings (as they appear in the TOML file) and
/// resolved through [`TmonConfig::log_path`] and friends.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct TmonConfig {
    /// Username accepted by the login form.
    pub web_username: String,
    /// Password accepted by the login form. Change this in production!
    pub web_password: String,
    /// Directory the accounting script appends daily logs to.
    pub log_dir: String,
    /// Directory the accounting script keeps its state files in.
    pub state_dir: String,
    /// Path of the accounting script to shell out to.
    pub script_path: String,
    /// How long a login session stays valid, in seconds.
    pub session_duration_secs: u64,
}

impl Default for TmonConfig {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let base = Path::new(&home).join(".traffic-monitor");
        Self {
            web_username: "admin".to_string(),
            web_password: "admin123".to_string(),
            log_dir: base.join("logs").to_string_lossy().to_string(),
            state_dir: base.join("state").to_string_lossy().to_string(),
            script_path: "traffic-monitor-v2.sh".to_string(),
            session_duration_secs: 3600,
        }
    }
}

impl TmonConfig {
    /// Load `/etc/tmon.conf`, or the built-in defaults if it isn't there.
    /// A file that exists but cannot be read or parsed is reported and
    /// replaced by the defaults rather than stopping the web UI.
    pub fn load_or_default() -> Self {
        match Self::load_from(Path::new(ETC_PATH)) {
            Ok(config) => config,
            Err(ConfigError::NotFound) => Self::default(),
            Err(e) => {
                error!("Unable to use {ETC_PATH}: {e}. Using defaults.");
                Self::default()
            }
        }
    }

    /// Load a configuration file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound);
        }
        let raw = std::fs::read_to_string(path).map_err(|e| {
            error!("Unable to read {}: {e}", path.display());
            ConfigError::UnableToRead
        })?;
        toml_edit::de::from_str(&raw).map_err(|e| {
            error!("Unable to parse {}: {e}", path.display());
            ConfigError::UnableToParse
        })
    }

    /// Directory holding the daily `traffic-YYYY-MM-DD.log` files.
    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log_dir)
    }

    /// Directory holding the per-interface `traffic-*.state` files.
    pub fn state_path(&self) -> PathBuf {
        PathBuf::from(&self.state_dir)
    }

    /// Create the log and state directories if they don't exist yet.
    /// The accounting script writes into these; the web UI only reads
    /// (and deletes state files on reset), but it is the long-running
    /// process and so does the bootstrap.
    pub fn ensure_directories(&self) -> Result<(), ConfigError> {
        for dir in [self.log_path(), self.state_path()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                warn!("Unable to create {}: {e}", dir.display());
                ConfigError::DirectoryCreation(dir)
            })?;
        }
        Ok(())
    }
}

/// Errors that can occur while loading or bootstrapping configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found")]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Unable to read configuration file")]
    UnableToRead,
    /// The configuration file is not valid TOML for [`TmonConfig`].
    #[error("Unable to parse configuration file")]
    UnableToParse,
    /// A log/state directory could not be created.
    #[error("Unable to create directory {0:?}")]
    DirectoryCreation(PathBuf),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = TmonConfig::default();
        assert_eq!(config.web_username, "admin");
        assert_eq!(config.session_duration_secs, 3600);
        assert!(config.log_dir.ends_with("logs"));
        assert!(config.state_dir.ends_with("state"));
    }

    #[test]
    fn parses_partial_toml() {
        let raw = r#"
web_username = "ops"
log_dir = "/var/log/tmon"
"#;
        let config: TmonConfig = toml_edit::de::from_str(raw).unwrap();
        assert_eq!(config.web_username, "ops");
        assert_eq!(config.log_dir, "/var/log/tmon");
        // Unspecified keys fall back to the defaults
        assert_eq!(config.web_password, "admin123");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = TmonConfig::load_from(Path::new("/nonexistent/tmon.conf"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound));
    }

    #[test]
    fn ensure_directories_creates_both() {
        let tmp = tempfile::tempdir().unwrap();
        let config = TmonConfig {
            log_dir: tmp.path().join("logs").to_string_lossy().to_string(),
            state_dir: tmp.path().join("state").to_string_lossy().to_string(),
            ..Default::default()
        };
        config.ensure_directories().unwrap();
        assert!(config.log_path().is_dir());
        assert!(config.state_path().is_dir());
    }
}
