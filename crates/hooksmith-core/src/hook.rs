use crate::error::Result;
use crate::io;
use crate::paths;
use crate::types::EventType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// Structured filter deciding which occurrences of an event fire the hook.
/// Which fields are legal depends on the event type (`MatcherPolicy`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matcher {
    /// Tool names, for tool-use events.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    /// Glob patterns over file paths, for tool-use events.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
    /// Substring filter over the prompt, for UserPromptSubmit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Branch names, for PrePush.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,
}

impl Matcher {
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
            && self.paths.is_empty()
            && self.content.is_none()
            && self.branches.is_empty()
    }

    /// One-line rendering for tables and README output.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "(any)".to_string();
        }
        let mut parts = Vec::new();
        if !self.tools.is_empty() {
            parts.push(format!("tools: {}", self.tools.join("|")));
        }
        if !self.paths.is_empty() {
            parts.push(format!("paths: {}", self.paths.join("|")));
        }
        if let Some(ref content) = self.content {
            parts.push(format!("content: {content}"));
        }
        if !self.branches.is_empty() {
            parts.push(format!("branches: {}", self.branches.join("|")));
        }
        parts.join(", ")
    }
}

// ---------------------------------------------------------------------------
// HookAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Command,
}

/// One entry in the ordered action sequence. The command is untrusted
/// configuration text: this system validates it and stores it, the host
/// runtime interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub command: String,
    pub timeout: u32,
}

impl HookAction {
    pub fn command(command: impl Into<String>, timeout: u32) -> Self {
        Self {
            kind: ActionKind::Command,
            command: command.into(),
            timeout,
        }
    }
}

// ---------------------------------------------------------------------------
// HookMetadata
// ---------------------------------------------------------------------------

/// Provenance, not behavior. Serialized under `_metadata` so the host
/// runtime ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookMetadata {
    pub generated_by: String,
    pub event_type: EventType,
    pub hook_name: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// HookDefinition
// ---------------------------------------------------------------------------

/// The unit of configuration: everything needed to install one hook.
///
/// Persisted form (`hook.json`):
/// `{matcher: {...}, hooks: [{type: "command", command, timeout}], _metadata: {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookDefinition {
    #[serde(default, skip_serializing_if = "Matcher::is_empty")]
    pub matcher: Matcher,
    pub hooks: Vec<HookAction>,
    #[serde(rename = "_metadata")]
    pub metadata: HookMetadata,
}

impl HookDefinition {
    pub fn new(
        name: impl Into<String>,
        event_type: EventType,
        matcher: Matcher,
        hooks: Vec<HookAction>,
        generated_by: impl Into<String>,
    ) -> Self {
        Self {
            matcher,
            hooks,
            metadata: HookMetadata {
                generated_by: generated_by.into(),
                event_type,
                hook_name: name.into(),
                created_at: Utc::now(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.hook_name
    }

    pub fn event_type(&self) -> EventType {
        self.metadata.event_type
    }

    /// First command, truncated for table display.
    pub fn command_preview(&self, width: usize) -> String {
        let command = self.hooks.first().map(|a| a.command.as_str()).unwrap_or("");
        if command.len() <= width {
            command.to_string()
        } else {
            let cut: String = command.chars().take(width.saturating_sub(1)).collect();
            format!("{cut}\u{2026}")
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write `hook.json` into `dir` (created if missing).
    pub fn save(&self, dir: &Path) -> Result<()> {
        io::ensure_dir(dir)?;
        io::atomic_write_json(&dir.join(paths::HOOK_FILE), self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
