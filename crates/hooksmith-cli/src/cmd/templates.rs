use crate::output::{print_json, print_table};
use hooksmith_core::template;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<serde_json::Value> = template::catalog()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "event_type": t.event_type.as_str(),
                    "languages": t.language_names(),
                    "default_timeout": t.default_timeout,
                    "description": t.description,
                })
            })
            .collect();
        return print_json(&entries);
    }

    let rows: Vec<Vec<String>> = template::catalog()
        .iter()
        .map(|t| {
            let languages = if t.languages.is_empty() {
                "-".to_string()
            } else {
                t.language_names().join(", ")
            };
            vec![
                t.name.to_string(),
                t.event_type.to_string(),
                languages,
                t.description.to_string(),
            ]
        })
        .collect();
    print_table(&["NAME", "EVENT", "LANGUAGES", "DESCRIPTION"], &rows);
    Ok(())
}
