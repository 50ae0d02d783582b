use crate::output::print_json;
use anyhow::Context;
use hooksmith_core::{hook::HookDefinition, validator};
use std::path::Path;

pub fn run(path: &Path, json: bool) -> anyhow::Result<()> {
    let hook = HookDefinition::load(path)
        .with_context(|| format!("failed to read hook definition {}", path.display()))?;
    let result = validator::validate(&hook);

    if json {
        print_json(&result)?;
    } else if result.ok {
        println!("Hook '{}' is valid.", hook.name());
    } else {
        println!("Hook '{}' failed validation:", hook.name());
        for failure in &result.failures {
            println!("  [{}] {}", failure.rule, failure.message);
        }
    }

    if !result.ok {
        anyhow::bail!(
            "{} validation rule(s) failed for {}",
            result.failures.len(),
            path.display()
        );
    }
    Ok(())
}
