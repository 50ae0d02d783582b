use crate::error::{HookError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CLAUDE_DIR: &str = ".claude";
pub const SETTINGS_FILE: &str = "settings.json";
pub const BACKUPS_DIR: &str = "backups";
pub const BACKUP_PREFIX: &str = "settings-";

pub const HOOKS_OUTPUT_DIR: &str = ".claude/hooks";
pub const HOOK_FILE: &str = "hook.json";
pub const HOOK_README: &str = "README.md";
pub const TESTED_MARKER: &str = ".tested";

/// Backups kept per scope; older ones are pruned after a successful write.
pub const DEFAULT_BACKUP_KEEP: usize = 5;

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn project_settings_path(root: &Path) -> PathBuf {
    root.join(CLAUDE_DIR).join(SETTINGS_FILE)
}

pub fn project_backups_dir(root: &Path) -> PathBuf {
    root.join(CLAUDE_DIR).join(BACKUPS_DIR)
}

pub fn user_settings_path() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(HookError::HomeNotFound)?;
    Ok(home.join(CLAUDE_DIR).join(SETTINGS_FILE))
}

pub fn user_backups_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(HookError::HomeNotFound)?;
    Ok(home.join(CLAUDE_DIR).join(BACKUPS_DIR))
}

pub fn hooks_output_dir(root: &Path) -> PathBuf {
    root.join(HOOKS_OUTPUT_DIR)
}

pub fn hook_dir(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(name)
}

pub fn hook_file(output_dir: &Path, name: &str) -> PathBuf {
    hook_dir(output_dir, name).join(HOOK_FILE)
}

// ---------------------------------------------------------------------------
// Hook-name validation
// ---------------------------------------------------------------------------

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

/// Hook names are stable identifiers: lowercase alphanumeric with hyphens,
/// at most 64 characters. They double as directory names under the hooks
/// output directory, so the charset stays filesystem-safe.
pub fn validate_hook_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > 64 || !name_re().is_match(name) {
        return Err(HookError::InvalidHookName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
