//! Durable, crash-safe storage of one settings document per scope.
//!
//! The settings file is owned by this module: every mutation goes through
//! `write`, which backs up the previous file, serializes to a tempfile in
//! the target directory, and renames it into place. Concurrent readers see
//! either the old file or the new one, never a torn write. Two concurrent
//! writers race read-modify-write and the last rename wins; the pre-write
//! backup is the manual recovery path for that case.

use crate::error::{HookError, Result};
use crate::io;
use crate::paths;
use crate::settings::SettingsDocument;
use crate::types::Scope;
use chrono::Utc;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ScopePaths
// ---------------------------------------------------------------------------

/// Resolved file locations for one scope.
#[derive(Debug, Clone)]
pub struct ScopePaths {
    pub settings: PathBuf,
    pub backups: PathBuf,
}

impl ScopePaths {
    pub fn resolve(scope: Scope, root: &Path) -> Result<Self> {
        match scope {
            Scope::User => Ok(Self {
                settings: paths::user_settings_path()?,
                backups: paths::user_backups_dir()?,
            }),
            Scope::Project => Ok(Self {
                settings: paths::project_settings_path(root),
                backups: paths::project_backups_dir(root),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigStore
// ---------------------------------------------------------------------------

pub struct ConfigStore {
    paths: ScopePaths,
    keep: usize,
}

impl ConfigStore {
    pub fn for_scope(scope: Scope, root: &Path) -> Result<Self> {
        Ok(Self::at(ScopePaths::resolve(scope, root)?))
    }

    pub fn at(paths: ScopePaths) -> Self {
        Self {
            paths,
            keep: paths::DEFAULT_BACKUP_KEEP,
        }
    }

    pub fn with_keep(mut self, keep: usize) -> Self {
        self.keep = keep;
        self
    }

    pub fn settings_path(&self) -> &Path {
        &self.paths.settings
    }

    /// Parse the settings file. A missing file is an empty document, not an
    /// error; a file that exists but is not valid JSON is `CorruptConfig`
    /// and is never silently discarded.
    pub fn load(&self) -> Result<SettingsDocument> {
        let path = &self.paths.settings;
        if !path.exists() {
            return Ok(SettingsDocument::default());
        }
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|source| HookError::CorruptConfig {
            path: path.clone(),
            source,
        })
    }

    /// The only mutating primitive. Backup, temp-write, atomic rename; on
    /// any failure the previous file is untouched.
    pub fn write(&self, doc: &SettingsDocument) -> Result<()> {
        let mut data = serde_json::to_vec_pretty(doc)?;
        data.push(b'\n');

        if self.paths.settings.exists() {
            self.backup_current()?;
        }
        io::atomic_write(&self.paths.settings, &data)?;
        self.prune_backups()?;
        Ok(())
    }

    /// Restore the most recent backup over the current file, through the
    /// same atomic-rename path. Exceptional recovery only; the backup
    /// itself is left in place.
    pub fn rollback(&self) -> Result<PathBuf> {
        let newest = self
            .backups()?
            .into_iter()
            .next_back()
            .ok_or_else(|| HookError::NoBackup(self.paths.settings.clone()))?;
        let data = std::fs::read(&newest)?;
        io::atomic_write(&self.paths.settings, &data)?;
        Ok(newest)
    }

    /// Backup files for this scope, sorted oldest first. Timestamps in the
    /// filenames are fixed-width, so lexicographic order is chronological.
    pub fn backups(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.paths.backups;
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut found = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(paths::BACKUP_PREFIX) && name.ends_with(".json") {
                found.push(entry.path());
            }
        }
        found.sort();
        Ok(found)
    }

    fn backup_current(&self) -> Result<()> {
        io::ensure_dir(&self.paths.backups)?;
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.9fZ");
        let name = format!("{}{stamp}.json", paths::BACKUP_PREFIX);
        std::fs::copy(&self.paths.settings, self.paths.backups.join(name))?;
        Ok(())
    }

    fn prune_backups(&self) -> Result<()> {
        let backups = self.backups()?;
        if backups.len() > self.keep {
            for old in &backups[..backups.len() - self.keep] {
                std::fs::remove_file(old)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
