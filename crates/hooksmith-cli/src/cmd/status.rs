use crate::output::{print_json, print_table};
use hooksmith_core::{status, store::ConfigStore, types::Scope};
use std::path::Path;
use tracing::warn;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    // User scope is best-effort: status still works on machines where no
    // home directory resolves.
    let user_store = match ConfigStore::for_scope(Scope::User, root) {
        Ok(store) => Some(store),
        Err(e) => {
            warn!("skipping user scope: {e}");
            None
        }
    };
    let project_store = ConfigStore::for_scope(Scope::Project, root)?;
    let report = status::report(root, user_store.as_ref(), &project_store)?;

    if json {
        return print_json(&report);
    }

    if report.hooks.is_empty() {
        println!("No hooks generated or installed.");
        return Ok(());
    }

    let flag = |b: bool| if b { "yes" } else { "-" }.to_string();
    let rows: Vec<Vec<String>> = report
        .hooks
        .iter()
        .map(|h| {
            let installed = match (h.installed_user, h.installed_project) {
                (true, true) => "user, project".to_string(),
                (true, false) => "user".to_string(),
                (false, true) => "project".to_string(),
                (false, false) => "-".to_string(),
            };
            vec![
                h.name.clone(),
                h.event_type.clone().unwrap_or_else(|| "?".to_string()),
                flag(h.generated),
                flag(h.validated),
                installed,
                flag(h.tested),
            ]
        })
        .collect();
    print_table(
        &["NAME", "EVENT", "GENERATED", "VALID", "INSTALLED", "TESTED"],
        &rows,
    );

    if !report.next_actions.is_empty() {
        println!("\nNext actions:");
        for (i, action) in report.next_actions.iter().enumerate() {
            println!("  {}. {action}", i + 1);
        }
    }
    Ok(())
}
