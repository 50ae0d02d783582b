//! Fixed catalog of hook templates.
//!
//! Rendering is string interpolation into fixed, quoted positions only:
//! user parameters are checked against a restricted charset and can never
//! introduce new shell control structures. Every rendered definition goes
//! through the safety validator before it is returned, so no caller ever
//! receives an invalid hook from this path.

use crate::error::{HookError, Result};
use crate::hook::{HookAction, HookDefinition, Matcher};
use crate::paths;
use crate::types::EventType;
use crate::validator;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const GENERATED_BY: &str = concat!("hooksmith ", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Catalog data
// ---------------------------------------------------------------------------

pub struct LanguageEntry {
    pub language: &'static str,
    /// Guarded external tool, for the PATH advisory in `hook build`.
    pub tool: Option<&'static str>,
    command: &'static str,
    paths: &'static [&'static str],
}

pub struct TemplateDef {
    pub name: &'static str,
    pub event_type: EventType,
    pub description: &'static str,
    pub default_timeout: u32,
    tools_matcher: &'static [&'static str],
    pub languages: &'static [LanguageEntry],
    command: &'static str,
    pub tool: Option<&'static str>,
    defaults: &'static [(&'static str, &'static str)],
}

impl TemplateDef {
    pub fn language_names(&self) -> Vec<&'static str> {
        self.languages.iter().map(|l| l.language).collect()
    }
}

static TEMPLATES: &[TemplateDef] = &[
    TemplateDef {
        name: "formatter",
        event_type: EventType::PostToolUse,
        description: "Format a file after it is edited or written",
        default_timeout: 30,
        tools_matcher: &["Edit", "Write"],
        languages: &[
            LanguageEntry {
                language: "python",
                tool: Some("black"),
                command: "if command -v black >/dev/null 2>&1; then black \"$CLAUDE_FILE_PATHS\"; fi || true",
                paths: &["*.py"],
            },
            LanguageEntry {
                language: "rust",
                tool: Some("rustfmt"),
                command: "if command -v rustfmt >/dev/null 2>&1; then rustfmt \"$CLAUDE_FILE_PATHS\"; fi || true",
                paths: &["*.rs"],
            },
            LanguageEntry {
                language: "javascript",
                tool: Some("npx"),
                command: "if command -v npx >/dev/null 2>&1; then npx prettier --write \"$CLAUDE_FILE_PATHS\"; fi || true",
                paths: &["*.js", "*.jsx"],
            },
            LanguageEntry {
                language: "typescript",
                tool: Some("npx"),
                command: "if command -v npx >/dev/null 2>&1; then npx prettier --write \"$CLAUDE_FILE_PATHS\"; fi || true",
                paths: &["*.ts", "*.tsx"],
            },
            LanguageEntry {
                language: "go",
                tool: Some("gofmt"),
                command: "if command -v gofmt >/dev/null 2>&1; then gofmt -w \"$CLAUDE_FILE_PATHS\"; fi || true",
                paths: &["*.go"],
            },
        ],
        command: "",
        tool: None,
        defaults: &[],
    },
    TemplateDef {
        name: "git-add",
        event_type: EventType::PostToolUse,
        description: "Stage a file after it is edited or written",
        default_timeout: 10,
        tools_matcher: &["Edit", "Write"],
        languages: &[],
        command: "git add \"$CLAUDE_FILE_PATHS\" || true",
        tool: None,
        defaults: &[],
    },
    TemplateDef {
        name: "test-runner",
        event_type: EventType::Stop,
        description: "Run the test suite when the agent finishes",
        default_timeout: 30,
        tools_matcher: &[],
        languages: &[
            LanguageEntry {
                language: "python",
                tool: Some("pytest"),
                command: "if command -v pytest >/dev/null 2>&1; then pytest -q; fi || true",
                paths: &[],
            },
            LanguageEntry {
                language: "rust",
                tool: Some("cargo"),
                command: "if command -v cargo >/dev/null 2>&1; then cargo test --quiet; fi || true",
                paths: &[],
            },
            LanguageEntry {
                language: "javascript",
                tool: Some("npm"),
                command: "if command -v npm >/dev/null 2>&1; then npm test --silent; fi || true",
                paths: &[],
            },
            LanguageEntry {
                language: "go",
                tool: Some("go"),
                command: "if command -v go >/dev/null 2>&1; then go test ./...; fi || true",
                paths: &[],
            },
        ],
        command: "",
        tool: None,
        defaults: &[],
    },
    TemplateDef {
        name: "pre-tool-guard",
        event_type: EventType::PreToolUse,
        description: "Block shell commands that match risky patterns",
        default_timeout: 5,
        tools_matcher: &["Bash"],
        languages: &[],
        command: "case \"$CLAUDE_TOOL_INPUT\" in *\"rm -rf\"*) exit 2 ;; esac",
        tool: None,
        defaults: &[],
    },
    TemplateDef {
        name: "session-context",
        event_type: EventType::SessionStart,
        description: "Print branch and recent history when a session starts",
        default_timeout: 5,
        tools_matcher: &[],
        languages: &[],
        command: "git status -sb 2>/dev/null; git log --oneline -5 2>/dev/null; exit 0",
        tool: None,
        defaults: &[],
    },
    TemplateDef {
        name: "notifier",
        event_type: EventType::Stop,
        description: "Desktop notification when the agent finishes",
        default_timeout: 5,
        tools_matcher: &[],
        languages: &[],
        command: "if command -v notify-send >/dev/null 2>&1; then notify-send \"Claude Code\" \"{message}\"; fi || true",
        tool: Some("notify-send"),
        defaults: &[("message", "Session finished")],
    },
    TemplateDef {
        name: "security-scan",
        event_type: EventType::PrePush,
        description: "Scan staged changes for secrets before a push",
        default_timeout: 60,
        tools_matcher: &[],
        languages: &[],
        command: "if command -v gitleaks >/dev/null 2>&1; then gitleaks protect --staged --no-banner; fi",
        tool: Some("gitleaks"),
        defaults: &[],
    },
];

/// Pure read of the static catalog.
pub fn catalog() -> &'static [TemplateDef] {
    TEMPLATES
}

pub fn find(name: &str) -> Result<&'static TemplateDef> {
    TEMPLATES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| HookError::UnknownTemplate(name.to_string()))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Produce a validated `HookDefinition` from a template.
///
/// `language` selects the per-language command for parameterized templates.
/// `name` overrides the derived `<template>-<language>` hook name.
/// `timeout` overrides the template default (still subject to the event
/// type's bounds). `params` fill `{placeholder}` positions.
pub fn render(
    template: &str,
    language: Option<&str>,
    name: Option<&str>,
    timeout: Option<u32>,
    params: &BTreeMap<String, String>,
) -> Result<HookDefinition> {
    let def = find(template)?;

    let (command, lang_paths) = resolve_command(def, language)?;
    let command = substitute(def, command, params)?;

    let hook_name = match name {
        Some(n) => n.to_string(),
        None => match language {
            Some(lang) => format!("{}-{lang}", def.name),
            None => def.name.to_string(),
        },
    };
    paths::validate_hook_name(&hook_name)?;

    let matcher = Matcher {
        tools: def.tools_matcher.iter().map(|t| t.to_string()).collect(),
        paths: lang_paths.iter().map(|p| p.to_string()).collect(),
        ..Default::default()
    };

    let hook = HookDefinition::new(
        hook_name,
        def.event_type,
        matcher,
        vec![HookAction::command(
            command,
            timeout.unwrap_or(def.default_timeout),
        )],
        GENERATED_BY,
    );

    let result = validator::validate(&hook);
    if !result.ok {
        return Err(HookError::Validation(result.failures));
    }
    Ok(hook)
}

/// The external tool the rendered command relies on, if any.
pub fn primary_tool(template: &str, language: Option<&str>) -> Option<&'static str> {
    let def = find(template).ok()?;
    match language {
        Some(lang) => def
            .languages
            .iter()
            .find(|l| l.language == lang)
            .and_then(|l| l.tool),
        None => def.tool,
    }
}

fn resolve_command(
    def: &'static TemplateDef,
    language: Option<&str>,
) -> Result<(&'static str, &'static [&'static str])> {
    if def.languages.is_empty() {
        if let Some(lang) = language {
            return Err(HookError::InvalidParameter {
                key: "language".to_string(),
                reason: format!("template '{}' takes no language (got '{lang}')", def.name),
            });
        }
        return Ok((def.command, &[]));
    }
    let Some(lang) = language else {
        return Err(HookError::InvalidParameter {
            key: "language".to_string(),
            reason: format!(
                "template '{}' requires --language (one of: {})",
                def.name,
                def.language_names().join(", ")
            ),
        });
    };
    def.languages
        .iter()
        .find(|l| l.language == lang)
        .map(|l| (l.command, l.paths))
        .ok_or_else(|| HookError::UnsupportedLanguage {
            template: def.name.to_string(),
            language: lang.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Parameter substitution
// ---------------------------------------------------------------------------

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
static PARAM_VALUE_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap())
}

/// Values are interpolated into quoted positions; the charset still
/// excludes everything that could close a quote or open a new construct.
fn param_value_re() -> &'static Regex {
    PARAM_VALUE_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9 _.,:!?-]+$").unwrap())
}

fn substitute(
    def: &'static TemplateDef,
    command: &'static str,
    params: &BTreeMap<String, String>,
) -> Result<String> {
    let placeholders: Vec<&str> = placeholder_re()
        .captures_iter(command)
        .map(|c| c.get(1).unwrap().as_str())
        .collect();

    for key in params.keys() {
        if !placeholders.iter().any(|p| p == key) {
            return Err(HookError::InvalidParameter {
                key: key.clone(),
                reason: format!("template '{}' has no such parameter", def.name),
            });
        }
    }

    let mut out = command.to_string();
    for key in placeholders {
        let value = params
            .get(key)
            .map(String::as_str)
            .or_else(|| {
                def.defaults
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
            })
            .ok_or_else(|| HookError::InvalidParameter {
                key: key.to_string(),
                reason: "required parameter has no value".to_string(),
            })?;
        if !param_value_re().is_match(value) {
            return Err(HookError::InvalidParameter {
                key: key.to_string(),
                reason: "value contains characters outside the allowed set".to_string(),
            });
        }
        out = out.replace(&format!("{{{key}}}"), value);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
