//! The only component permitted to mutate a settings document's hook
//! entries. Everything else reads through `list` or goes to the store.

use crate::error::{HookError, Result};
use crate::hook::HookDefinition;
use crate::settings::HookSummary;
use crate::store::ConfigStore;
use crate::validator;

/// Validate and append `hook` to the scope's settings document.
///
/// A hook whose name is already installed under *any* event type is
/// rejected with `AlreadyInstalled` unless `replace` is set, in which case
/// the old entry is removed first. On write failure nothing is visible and
/// the underlying error is reported verbatim.
pub fn install(store: &ConfigStore, hook: &HookDefinition, replace: bool) -> Result<()> {
    let result = validator::validate(hook);
    if !result.ok {
        return Err(HookError::Validation(result.failures));
    }

    let mut doc = store.load()?;
    if doc.find(hook.name()).is_some() {
        if !replace {
            return Err(HookError::AlreadyInstalled(hook.name().to_string()));
        }
        doc.remove(hook.name());
    }
    doc.append(hook)?;
    store.write(&doc)
}

/// Remove the first entry across all event types whose name matches.
/// Returns the event type the hook was removed from.
pub fn uninstall(store: &ConfigStore, name: &str) -> Result<String> {
    let mut doc = store.load()?;
    let event = doc
        .remove(name)
        .ok_or_else(|| HookError::NotFound(name.to_string()))?;
    store.write(&doc)?;
    Ok(event)
}

/// Pure read: every entry in the scope's settings document.
pub fn list(store: &ConfigStore) -> Result<Vec<HookSummary>> {
    Ok(store.load()?.summaries())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
