use crate::output::print_json;
use hooksmith_core::{store::ConfigStore, types::Scope};
use std::path::Path;

pub fn run(root: &Path, scope: Scope, json: bool) -> anyhow::Result<()> {
    let store = ConfigStore::for_scope(scope, root)?;
    let restored_from = store.rollback()?;

    if json {
        print_json(&serde_json::json!({
            "scope": scope,
            "settings": store.settings_path(),
            "restored_from": restored_from,
        }))?;
    } else {
        println!(
            "Restored {} from {}.",
            store.settings_path().display(),
            restored_from.display()
        );
    }
    Ok(())
}
