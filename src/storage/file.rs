//! File-based progress storage.
//!
//! The progress document lives at `~/.azul/progress.json`. Writes go
//! through a temp file + rename so a crash mid-write can never leave a
//! half-written document behind.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::config::progress_path;
use crate::error::{LedgerError, Result};
use crate::ledger::ProgressState;
use crate::storage::ProgressStore;

/// File-based progress storage.
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    /// Path of the progress document.
    path: PathBuf,
}

impl FileProgressStore {
    /// Create a store at the default location.
    ///
    /// Uses `~/.azul/progress.json` or `$AZUL_HOME/progress.json`.
    pub fn new() -> Result<Self> {
        let path = progress_path().ok_or_else(|| {
            LedgerError::config("Could not determine progress path (no home directory)")
        })?;
        Self::with_path(path)
    }

    /// Create a store at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| LedgerError::storage(parent, e))?;
            }
        }

        Ok(Self { path })
    }

    /// The path of the persisted document.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Path of the temp file used during atomic writes.
    fn temp_path(&self) -> PathBuf {
        let mut name = std::ffi::OsString::from(".");
        if let Some(file_name) = self.path.file_name() {
            name.push(file_name);
        }
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write the document atomically using temp file + rename.
    fn atomic_write(&self, state: &ProgressState) -> Result<()> {
        let temp_path = self.temp_path();

        let json = serde_json::to_string_pretty(state)?;

        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| LedgerError::storage(&temp_path, e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| LedgerError::storage(&temp_path, e))?;
            file.sync_all()
                .map_err(|e| LedgerError::storage(&temp_path, e))?;
        }

        // Rename temp file to final path (atomic on POSIX)
        fs::rename(&temp_path, &self.path).map_err(|e| LedgerError::storage(&self.path, e))?;

        Ok(())
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self) -> Result<Option<ProgressState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| LedgerError::storage(&self.path, e))?;

        let state: ProgressState = serde_json::from_str(&content)?;

        Ok(Some(state))
    }

    fn save(&self, state: &ProgressState) -> Result<()> {
        self.atomic_write(state)
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| LedgerError::storage(&self.path, e))?;
        }

        // Also clean up any leftover temp file
        let temp_path = self.temp_path();
        if temp_path.exists() {
            let _ = fs::remove_file(&temp_path);
        }

        Ok(())
    }
}
