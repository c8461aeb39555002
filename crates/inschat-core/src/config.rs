//! Configuration management for the InsChat client.
//!
//! Loads configuration from `${INSCHAT_HOME}/config.toml` with sensible
//! defaults. A missing file is not an error; defaults apply.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Development address of the InsChat server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the InsChat server.
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads the config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads the config from an explicit path. Missing file returns defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Writes a fresh config file with defaults. Refuses to overwrite.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("config file already exists: {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        fs::write(path, default_config_toml())
            .with_context(|| format!("write config file {}", path.display()))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.server_url)
            .with_context(|| format!("Invalid server_url: {}", self.server_url))?;
        Ok(())
    }
}

/// Template written by `Config::init`.
fn default_config_toml() -> String {
    format!(
        "# InsChat client configuration\n\
         \n\
         # Base URL of the InsChat server.\n\
         server_url = \"{DEFAULT_SERVER_URL}\"\n"
    )
}

pub mod paths {
    //! Path resolution for InsChat configuration and data directories.
    //!
    //! `INSCHAT_HOME` resolution order:
    //! 1. `INSCHAT_HOME` environment variable (if set)
    //! 2. `~/.config/inschat` (default)

    use std::path::PathBuf;

    /// Returns the user's home directory, if known.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
    }

    /// Returns the InsChat home directory.
    pub fn inschat_home() -> PathBuf {
        if let Ok(home) = std::env::var("INSCHAT_HOME") {
            return PathBuf::from(home);
        }
        home_dir()
            .map(|h| h.join(".config").join("inschat"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        inschat_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        inschat_home().join("logs")
    }
}
