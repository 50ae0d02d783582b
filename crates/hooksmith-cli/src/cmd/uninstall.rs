use crate::output::print_json;
use hooksmith_core::{installer, store::ConfigStore, types::Scope};
use std::path::Path;

pub fn run(root: &Path, name: &str, scope: Scope, json: bool) -> anyhow::Result<()> {
    let store = ConfigStore::for_scope(scope, root)?;
    let event = installer::uninstall(&store, name)?;

    if json {
        print_json(&serde_json::json!({
            "name": name,
            "event_type": event,
            "scope": scope,
        }))?;
    } else {
        println!("Uninstalled '{name}' ({event}) from {scope} settings.");
    }
    Ok(())
}
