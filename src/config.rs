//! Storage location resolution
//!
//! Paths are derived once at startup from the user's home directory (or an
//! explicit override) and handed to the store; nothing reads them from
//! ambient state afterwards.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{Error, Result};

/// Name of the configuration directory under the home directory
pub const CONFIG_DIR_NAME: &str = ".pondo";

/// Name of the tasks file inside the configuration directory
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Environment variable that overrides the home directory
pub const HOME_ENV: &str = "PONDO_HOME";

/// Resolved storage locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `~/.pondo`
    pub config_dir: PathBuf,
    /// `~/.pondo/tasks.json`
    pub tasks_file: PathBuf,
}

impl Config {
    /// Build the layout rooted at `home`.
    pub fn from_home(home: impl AsRef<Path>) -> Self {
        let config_dir = home.as_ref().join(CONFIG_DIR_NAME);
        Self {
            tasks_file: config_dir.join(TASKS_FILE_NAME),
            config_dir,
        }
    }

    /// Resolve the layout from an explicit home override, falling back to
    /// the current user's home directory.
    pub fn resolve(home_override: Option<&Path>) -> Result<Self> {
        let (config_dir, tasks_file) = resolve_paths(home_override)?;
        Ok(Self {
            config_dir,
            tasks_file,
        })
    }
}

/// Returns `(config_dir, tasks_file)`. No filesystem access.
pub fn resolve_paths(home_override: Option<&Path>) -> Result<(PathBuf, PathBuf)> {
    let home = match home_override {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or(Error::HomeNotFound)?,
    };

    let config = Config::from_home(&home);
    tracing::debug!(
        config_dir = %config.config_dir.display(),
        tasks_file = %config.tasks_file.display(),
        "resolved storage paths"
    );
    Ok((config.config_dir, config.tasks_file))
}
