use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// Lifecycle moments at which the host runtime fires hooks. Closed set:
/// a definition naming anything else is rejected before it reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventType {
    SessionStart,
    PostToolUse,
    PreToolUse,
    SubagentStop,
    UserPromptSubmit,
    Stop,
    PrePush,
}

/// What shape of matcher an event type accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherPolicy {
    /// Matcher must be empty.
    Empty,
    /// At least a tool-name or path filter is required.
    ToolFilter,
    /// Empty or a content filter.
    ContentOptional,
    /// Empty or a branch filter.
    BranchOptional,
}

impl EventType {
    pub fn all() -> &'static [EventType] {
        &[
            EventType::SessionStart,
            EventType::PostToolUse,
            EventType::PreToolUse,
            EventType::SubagentStop,
            EventType::UserPromptSubmit,
            EventType::Stop,
            EventType::PrePush,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::SessionStart => "SessionStart",
            EventType::PostToolUse => "PostToolUse",
            EventType::PreToolUse => "PreToolUse",
            EventType::SubagentStop => "SubagentStop",
            EventType::UserPromptSubmit => "UserPromptSubmit",
            EventType::Stop => "Stop",
            EventType::PrePush => "PrePush",
        }
    }

    /// Legal `timeout` values in seconds, inclusive on both ends.
    pub fn timeout_range(self) -> RangeInclusive<u32> {
        match self {
            EventType::SessionStart => 1..=10,
            EventType::PostToolUse => 1..=60,
            EventType::PreToolUse => 1..=5,
            EventType::SubagentStop => 1..=120,
            EventType::UserPromptSubmit => 1..=5,
            EventType::Stop => 1..=30,
            EventType::PrePush => 1..=60,
        }
    }

    pub fn matcher_policy(self) -> MatcherPolicy {
        match self {
            EventType::SessionStart | EventType::SubagentStop | EventType::Stop => {
                MatcherPolicy::Empty
            }
            EventType::PostToolUse | EventType::PreToolUse => MatcherPolicy::ToolFilter,
            EventType::UserPromptSubmit => MatcherPolicy::ContentOptional,
            EventType::PrePush => MatcherPolicy::BranchOptional,
        }
    }

    /// Whether the host lets a nonzero exit from this event's hooks abort
    /// the calling workflow. Only these events may skip the silent-failure
    /// suffix.
    pub fn may_block(self) -> bool {
        matches!(
            self,
            EventType::PreToolUse | EventType::UserPromptSubmit | EventType::PrePush
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = crate::error::HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SessionStart" => Ok(EventType::SessionStart),
            "PostToolUse" => Ok(EventType::PostToolUse),
            "PreToolUse" => Ok(EventType::PreToolUse),
            "SubagentStop" => Ok(EventType::SubagentStop),
            "UserPromptSubmit" => Ok(EventType::UserPromptSubmit),
            "Stop" => Ok(EventType::Stop),
            "PrePush" => Ok(EventType::PrePush),
            _ => Err(crate::error::HookError::UnknownEventType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

/// The two independent configuration domains. Each has its own settings
/// document; nothing ever merges across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Applies to all projects (`~/.claude/settings.json`).
    User,
    /// Applies to one repository (`<root>/.claude/settings.json`).
    Project,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::User => "user",
            Scope::Project => "project",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Scope::User),
            "project" => Ok(Scope::Project),
            _ => Err(format!("unknown scope '{s}'; valid: user, project")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
