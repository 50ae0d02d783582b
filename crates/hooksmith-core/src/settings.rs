use crate::error::Result;
use crate::hook::HookDefinition;
use crate::types::EventType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// SettingsDocument
// ---------------------------------------------------------------------------

/// Parsed form of one scope's `settings.json`.
///
/// The file is shared with the host runtime and with other writers, so hook
/// entries are kept as raw JSON values and every key this tool does not
/// understand (top-level settings, foreign event types, foreign entry
/// fields) survives a load/mutate/write cycle untouched. Entries written by
/// this tool carry `_metadata.hook_name`; entries without it are foreign and
/// are never matched, replaced, or removed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hooks: BTreeMap<String, Vec<Value>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Read-side view of one installed entry, for `hook list` and status
/// aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookSummary {
    pub event_type: String,
    /// `None` for foreign entries that carry no provenance metadata.
    pub name: Option<String>,
    pub command: String,
    pub timeout: Option<u32>,
}

fn entry_name(entry: &Value) -> Option<&str> {
    entry.pointer("/_metadata/hook_name").and_then(Value::as_str)
}

impl SettingsDocument {
    pub fn is_empty(&self) -> bool {
        self.hooks.values().all(Vec::is_empty)
    }

    /// Ordered entries for one event type. Order is meaningful: the host
    /// runs an event's hooks in the stored sequence.
    pub fn entries(&self, event: EventType) -> &[Value] {
        self.hooks
            .get(event.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The event type under which `name` is installed, if any. Names are
    /// unique per scope across all event types, so the first match wins.
    pub fn find(&self, name: &str) -> Option<&str> {
        self.hooks.iter().find_map(|(event, entries)| {
            entries
                .iter()
                .any(|e| entry_name(e) == Some(name))
                .then_some(event.as_str())
        })
    }

    /// Append `hook` to the ordered list for its event type.
    pub fn append(&mut self, hook: &HookDefinition) -> Result<()> {
        let entry = serde_json::to_value(hook)?;
        self.hooks
            .entry(hook.event_type().as_str().to_string())
            .or_default()
            .push(entry);
        Ok(())
    }

    /// Remove the first entry across all event types whose name matches.
    /// Returns the event type it was removed from, or `None`.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let mut removed_from = None;
        for (event, entries) in self.hooks.iter_mut() {
            if let Some(pos) = entries.iter().position(|e| entry_name(e) == Some(name)) {
                entries.remove(pos);
                removed_from = Some(event.clone());
                break;
            }
        }
        if removed_from.is_some() {
            self.hooks.retain(|_, v| !v.is_empty());
        }
        removed_from
    }

    /// Every entry in the document, foreign ones included, in event order.
    pub fn summaries(&self) -> Vec<HookSummary> {
        let mut out = Vec::new();
        for (event, entries) in &self.hooks {
            for entry in entries {
                let first = entry.get("hooks").and_then(|h| h.get(0));
                out.push(HookSummary {
                    event_type: event.clone(),
                    name: entry_name(entry).map(str::to_string),
                    command: first
                        .and_then(|a| a.get("command"))
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    timeout: first
                        .and_then(|a| a.get("timeout"))
                        .and_then(Value::as_u64)
                        .map(|t| t as u32),
                });
            }
        }
        out
    }

    /// Installed hook names (entries with provenance metadata only).
    pub fn names(&self) -> Vec<String> {
        self.hooks
            .values()
            .flatten()
            .filter_map(|e| entry_name(e).map(str::to_string))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
