use crate::output::print_json;
use anyhow::Context;
use hooksmith_core::{io, paths, template};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

#[allow(clippy::too_many_arguments)]
pub fn run(
    root: &Path,
    template_name: &str,
    language: Option<&str>,
    name: Option<&str>,
    params: &[String],
    timeout: Option<u32>,
    output: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let params = parse_params(params)?;
    let hook = template::render(template_name, language, name, timeout, &params)?;

    // Advisory only: the rendered command guards against a missing tool,
    // but a hook that always no-ops is usually a surprise worth flagging.
    if let Some(tool) = template::primary_tool(template_name, language) {
        if which::which(tool).is_err() {
            warn!("'{tool}' not found on PATH; this hook will no-op until it is installed");
        }
    }

    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths::hooks_output_dir(root));
    let hook_dir = paths::hook_dir(&output_dir, hook.name());
    hook.save(&hook_dir)
        .with_context(|| format!("failed to write {}", hook_dir.display()))?;
    io::atomic_write(&hook_dir.join(paths::HOOK_README), readme(&hook).as_bytes())?;

    if json {
        print_json(&serde_json::json!({
            "name": hook.name(),
            "event_type": hook.event_type().as_str(),
            "path": hook_dir.join(paths::HOOK_FILE),
        }))?;
    } else {
        println!(
            "Built hook '{}' ({}) at {}",
            hook.name(),
            hook.event_type(),
            hook_dir.display()
        );
        println!(
            "Install it with: hook install {} <user|project>",
            hook_dir.join(paths::HOOK_FILE).display()
        );
    }
    Ok(())
}

fn parse_params(params: &[String]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for param in params {
        let (key, value) = param
            .split_once('=')
            .with_context(|| format!("invalid --param '{param}': expected KEY=VALUE"))?;
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

fn readme(hook: &hooksmith_core::hook::HookDefinition) -> String {
    let action = &hook.hooks[0];
    format!(
        "# {name}\n\n\
         Generated by {generated_by} on {created_at}.\n\n\
         | | |\n|---|---|\n\
         | Event | {event} |\n\
         | Matcher | {matcher} |\n\
         | Timeout | {timeout}s |\n\n\
         ## Command\n\n```sh\n{command}\n```\n\n\
         ## Install\n\n```sh\nhook install .claude/hooks/{name}/hook.json project\n```\n",
        name = hook.name(),
        generated_by = hook.metadata.generated_by,
        created_at = hook.metadata.created_at.format("%Y-%m-%d %H:%M UTC"),
        event = hook.event_type(),
        matcher = hook.matcher.summary(),
        timeout = action.timeout,
        command = action.command,
    )
}
