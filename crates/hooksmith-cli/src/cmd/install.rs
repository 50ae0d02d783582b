use crate::output::print_json;
use anyhow::Context;
use hooksmith_core::{hook::HookDefinition, installer, store::ConfigStore, types::Scope};
use std::path::Path;

pub fn run(root: &Path, path: &Path, scope: Scope, replace: bool, json: bool) -> anyhow::Result<()> {
    let hook = HookDefinition::load(path)
        .with_context(|| format!("failed to read hook definition {}", path.display()))?;
    let store = ConfigStore::for_scope(scope, root)?;
    installer::install(&store, &hook, replace)?;

    if json {
        print_json(&serde_json::json!({
            "name": hook.name(),
            "event_type": hook.event_type().as_str(),
            "scope": scope,
            "settings": store.settings_path(),
        }))?;
    } else {
        println!(
            "Installed '{}' ({}) into {} settings.",
            hook.name(),
            hook.event_type(),
            scope
        );
    }
    Ok(())
}
