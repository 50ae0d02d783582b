use crate::validator::RuleFailure;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("hook failed validation ({} rule(s)):\n{}", .0.len(), format_failures(.0))]
    Validation(Vec<RuleFailure>),

    #[error("settings file is not valid JSON: {path}")]
    CorruptConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("hook already installed: {0} (use --replace to overwrite)")]
    AlreadyInstalled(String),

    #[error("hook not installed: {0}")]
    NotFound(String),

    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("template '{template}' does not support language '{language}'")]
    UnsupportedLanguage { template: String, language: String },

    #[error("invalid parameter '{key}': {reason}")]
    InvalidParameter { key: String, reason: String },

    #[error("invalid hook name '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidHookName(String),

    #[error("no backup found for {0}")]
    NoBackup(PathBuf),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_failures(failures: &[RuleFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("  [{}] {}", f.rule, f.message))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, HookError>;
