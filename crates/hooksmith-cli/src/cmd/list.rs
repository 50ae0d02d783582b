use crate::output::{preview, print_json, print_table};
use hooksmith_core::{installer, store::ConfigStore, types::Scope};
use std::path::Path;

pub fn run(root: &Path, scope: Scope, json: bool) -> anyhow::Result<()> {
    let store = ConfigStore::for_scope(scope, root)?;
    let summaries = installer::list(&store)?;

    if json {
        print_json(&summaries)?;
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No hooks installed in {scope} settings.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.event_type.clone(),
                s.name.clone().unwrap_or_else(|| "-".to_string()),
                s.timeout.map(|t| format!("{t}s")).unwrap_or_else(|| "-".to_string()),
                preview(&s.command, 48),
            ]
        })
        .collect();
    print_table(&["EVENT", "NAME", "TIMEOUT", "COMMAND"], &rows);
    Ok(())
}
