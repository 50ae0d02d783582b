//! Read-side aggregation: what is generated, validated, installed, tested.
//! Owns no state and performs no writes.

use crate::error::Result;
use crate::hook::HookDefinition;
use crate::paths;
use crate::store::ConfigStore;
use crate::validator;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct HookStatus {
    pub name: String,
    pub event_type: Option<String>,
    pub generated: bool,
    pub validated: bool,
    pub installed_user: bool,
    pub installed_project: bool,
    pub tested: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub hooks: Vec<HookStatus>,
    pub next_actions: Vec<String>,
}

/// Cross-reference the generated-hooks output directory against the
/// installed entries of both scopes. `user` is optional so status still
/// works when no home directory can be resolved.
pub fn report(
    root: &Path,
    user: Option<&ConfigStore>,
    project: &ConfigStore,
) -> Result<StatusReport> {
    let user_names = match user {
        Some(store) => store.load()?.names(),
        None => Vec::new(),
    };
    let project_names = project.load()?.names();

    // name -> status, keyed so generated and installed views merge.
    let mut items: BTreeMap<String, HookStatus> = BTreeMap::new();

    let output_dir = paths::hooks_output_dir(root);
    if output_dir.is_dir() {
        for entry in std::fs::read_dir(&output_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            let hook_file = entry.path().join(paths::HOOK_FILE);
            if !hook_file.exists() {
                continue;
            }
            let (event_type, validated) = match HookDefinition::load(&hook_file) {
                Ok(hook) => (
                    Some(hook.event_type().to_string()),
                    validator::validate(&hook).ok,
                ),
                Err(_) => (None, false),
            };
            items.insert(
                name.clone(),
                HookStatus {
                    name,
                    event_type,
                    generated: true,
                    validated,
                    installed_user: false,
                    installed_project: false,
                    tested: entry.path().join(paths::TESTED_MARKER).exists(),
                },
            );
        }
    }

    for (names, user_scope) in [(&user_names, true), (&project_names, false)] {
        for name in names.iter() {
            let item = items.entry(name.clone()).or_insert_with(|| HookStatus {
                name: name.clone(),
                event_type: None,
                generated: false,
                // it passed validation when it was installed
                validated: true,
                installed_user: false,
                installed_project: false,
                tested: false,
            });
            if user_scope {
                item.installed_user = true;
            } else {
                item.installed_project = true;
            }
        }
    }

    let next_actions = next_actions(&items);
    Ok(StatusReport {
        hooks: items.into_values().collect(),
        next_actions,
    })
}

/// Priority order: broken hooks first, then installable ones, then
/// untested ones.
fn next_actions(items: &BTreeMap<String, HookStatus>) -> Vec<String> {
    let mut actions = Vec::new();
    for item in items.values() {
        if item.generated && !item.validated {
            actions.push(format!("fix validation failures in '{}'", item.name));
        }
    }
    for item in items.values() {
        if item.generated && item.validated && !item.installed_user && !item.installed_project {
            actions.push(format!("install '{}' (user or project scope)", item.name));
        }
    }
    for item in items.values() {
        if (item.installed_user || item.installed_project) && !item.tested {
            actions.push(format!("exercise '{}' and mark it tested", item.name));
        }
    }
    actions
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::{HookAction, Matcher};
    use crate::installer;
    use crate::store::ScopePaths;
    use crate::types::EventType;
    use tempfile::TempDir;

    fn project_store(dir: &TempDir) -> ConfigStore {
        ConfigStore::at(ScopePaths {
            settings: dir.path().join(".claude/settings.json"),
            backups: dir.path().join(".claude/backups"),
        })
    }

    fn generate(dir: &TempDir, name: &str, command: &str) {
        let hook = HookDefinition::new(
            name,
            EventType::Stop,
            Matcher::default(),
            vec![HookAction::command(command, 5)],
            "test",
        );
        hook.save(&paths::hooks_output_dir(dir.path()).join(name))
            .unwrap();
    }

    #[test]
    fn empty_project_reports_nothing() {
        let dir = TempDir::new().unwrap();
        let report = report(dir.path(), None, &project_store(&dir)).unwrap();
        assert!(report.hooks.is_empty());
        assert!(report.next_actions.is_empty());
    }

    #[test]
    fn generated_but_not_installed_suggests_install() {
        let dir = TempDir::new().unwrap();
        generate(&dir, "on-stop", "echo done || true");

        let report = report(dir.path(), None, &project_store(&dir)).unwrap();
        assert_eq!(report.hooks.len(), 1);
        let item = &report.hooks[0];
        assert!(item.generated && item.validated);
        assert!(!item.installed_project && !item.tested);
        assert!(report.next_actions[0].contains("install 'on-stop'"));
    }

    #[test]
    fn invalid_generated_hook_is_flagged_first() {
        let dir = TempDir::new().unwrap();
        generate(&dir, "bad-hook", "rm -rf / || true");
        generate(&dir, "good-hook", "echo done || true");

        let report = report(dir.path(), None, &project_store(&dir)).unwrap();
        assert!(report.next_actions[0].contains("fix validation failures in 'bad-hook'"));
    }

    #[test]
    fn installed_hook_is_cross_referenced() {
        let dir = TempDir::new().unwrap();
        let store = project_store(&dir);
        generate(&dir, "on-stop", "echo done || true");
        let hook = HookDefinition::load(
            &paths::hooks_output_dir(dir.path()).join("on-stop/hook.json"),
        )
        .unwrap();
        installer::install(&store, &hook, false).unwrap();

        let report = report(dir.path(), None, &store).unwrap();
        let item = report.hooks.iter().find(|h| h.name == "on-stop").unwrap();
        assert!(item.generated && item.validated && item.installed_project);
        assert!(!item.installed_user);
        // installed but untested
        assert!(report
            .next_actions
            .iter()
            .any(|a| a.contains("mark it tested")));
    }

    #[test]
    fn tested_marker_is_read() {
        let dir = TempDir::new().unwrap();
        let store = project_store(&dir);
        generate(&dir, "on-stop", "echo done || true");
        let hook_dir = paths::hooks_output_dir(dir.path()).join("on-stop");
        std::fs::write(hook_dir.join(paths::TESTED_MARKER), "").unwrap();
        let hook = HookDefinition::load(&hook_dir.join("hook.json")).unwrap();
        installer::install(&store, &hook, false).unwrap();

        let report = report(dir.path(), None, &store).unwrap();
        let item = report.hooks.iter().find(|h| h.name == "on-stop").unwrap();
        assert!(item.tested);
        assert!(report.next_actions.is_empty());
    }

    #[test]
    fn installed_without_generated_dir_still_listed() {
        let dir = TempDir::new().unwrap();
        let store = project_store(&dir);
        let hook = HookDefinition::new(
            "hand-authored",
            EventType::Stop,
            Matcher::default(),
            vec![HookAction::command("echo hi || true", 5)],
            "test",
        );
        installer::install(&store, &hook, false).unwrap();

        let report = report(dir.path(), None, &store).unwrap();
        let item = report
            .hooks
            .iter()
            .find(|h| h.name == "hand-authored")
            .unwrap();
        assert!(!item.generated);
        assert!(item.installed_project);
    }

    #[test]
    fn unparseable_hook_json_is_not_validated() {
        let dir = TempDir::new().unwrap();
        let hook_dir = paths::hooks_output_dir(dir.path()).join("broken");
        std::fs::create_dir_all(&hook_dir).unwrap();
        std::fs::write(hook_dir.join("hook.json"), "{nope").unwrap();

        let report = report(dir.path(), None, &project_store(&dir)).unwrap();
        let item = report.hooks.iter().find(|h| h.name == "broken").unwrap();
        assert!(item.generated);
        assert!(!item.validated);
        assert!(item.event_type.is_none());
    }
}
