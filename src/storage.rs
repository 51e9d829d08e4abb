//! Storage layer for pondo
//!
//! All state lives in one JSON file:
//!
//! ```text
//! ~/.pondo/              # Configuration directory
//!   tasks.json           # JSON array of task records, pretty-printed
//! ```
//!
//! Every mutation rewrites the whole file. There is no cross-process
//! locking; two concurrent invocations can lose an update.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::task::Task;

/// What `initialize_if_absent` had to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct InitOutcome {
    pub created_dir: bool,
    pub created_file: bool,
}

impl InitOutcome {
    /// Both the directory and the file were already present.
    pub fn already_initialized(&self) -> bool {
        !self.created_dir && !self.created_file
    }
}

/// File-backed task repository
#[derive(Debug, Clone)]
pub struct TaskStore {
    config: Config,
}

impl TaskStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Path to the configuration directory
    pub fn config_dir(&self) -> &Path {
        &self.config.config_dir
    }

    /// Path to the tasks file
    pub fn tasks_file(&self) -> &Path {
        &self.config.tasks_file
    }

    /// Check if the tasks file exists
    pub fn is_initialized(&self) -> bool {
        self.tasks_file().is_file()
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Create the configuration directory and an empty tasks file, each only
    /// if missing. A directory without a tasks file is completed, not
    /// rejected. Any failure here is reported as [`Error::InitFailed`].
    pub fn initialize_if_absent(&self) -> Result<InitOutcome> {
        let dir = self.config_dir();
        let created_dir = ensure_dir(dir).map_err(|source| Error::InitFailed {
            path: dir.to_path_buf(),
            source,
        })?;

        let file = self.tasks_file();
        let created_file = ensure_empty_list(file).map_err(|source| Error::InitFailed {
            path: file.to_path_buf(),
            source,
        })?;

        let outcome = InitOutcome {
            created_dir,
            created_file,
        };
        if outcome.already_initialized() {
            tracing::debug!(dir = %dir.display(), "store already initialized");
        } else {
            tracing::info!(
                dir = %dir.display(),
                created_dir,
                created_file,
                "initialized task store"
            );
        }
        Ok(outcome)
    }

    // =========================================================================
    // Load / save
    // =========================================================================

    /// Read the full task list.
    pub fn load(&self) -> Result<Vec<Task>> {
        let path = self.tasks_file();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotInitialized(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };

        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| Error::CorruptData {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the tasks file with `tasks`.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let path = self.tasks_file();
        let json = serde_json::to_string_pretty(tasks)?;
        write_atomic(path, json.as_bytes())?;
        tracing::debug!(path = %path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

/// Write data atomically using temp file + rename
///
/// Readers see either the old content or the new content, never a prefix.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(path);
    let result = write_synced(&temp_path, data).and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn ensure_dir(path: &Path) -> io::Result<bool> {
    if path.exists() {
        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("expected directory at {}", path.display()),
            ));
        }
        return Ok(false);
    }

    fs::create_dir_all(path)?;
    Ok(true)
}

fn ensure_empty_list(path: &Path) -> io::Result<bool> {
    if path.exists() {
        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("expected file at {}", path.display()),
            ));
        }
        return Ok(false);
    }

    write_atomic(path, b"[]")?;
    Ok(true)
}
