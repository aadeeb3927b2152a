use super::inputs::required_marker;
use super::table::{code, Align, MarkdownTable};
use crate::core::config::RenderConfig;
use crate::core::workflow::schema::{entries, scalar_to_string};
use crate::core::workflow::SecretSpec;
use indexmap::IndexMap;
use serde_yaml::Value;

pub const NO_TRIGGERS: &str = "This workflow does not declare any triggers.";

/// Keys documented in the inputs/outputs/secrets sections instead.
const DOCUMENTED_ELSEWHERE: [&str; 3] = ["inputs", "outputs", "secrets"];

/// One event from the `on` section with its optional configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerEvent<'a> {
    pub name: String,
    pub config: Option<&'a Value>,
}

/// Flatten the three shapes of `on` (scalar, sequence, mapping) into events.
pub fn normalize_triggers(value: Option<&Value>) -> Vec<TriggerEvent<'_>> {
    let Some(value) = value else {
        return Vec::new();
    };
    match value {
        Value::Null => Vec::new(),
        Value::Tagged(tagged) => normalize_triggers(Some(&tagged.value)),
        Value::Sequence(items) => items
            .iter()
            .flat_map(|item| normalize_triggers(Some(item)))
            .collect(),
        Value::Mapping(mapping) => entries(mapping)
            .map(|(name, config)| TriggerEvent {
                name,
                config: (!config.is_null()).then_some(config),
            })
            .collect(),
        scalar => scalar_to_string(scalar)
            .map(|name| TriggerEvent { name, config: None })
            .into_iter()
            .collect(),
    }
}

fn event_summary(event: &str) -> Option<&'static str> {
    match event {
        "workflow_call" => Some("reusable workflow"),
        "workflow_dispatch" => Some("can be triggered manually"),
        "workflow_run" => Some("runs after other workflows complete"),
        "schedule" => Some("runs on a schedule"),
        "repository_dispatch" => Some("triggered through the repository dispatch API"),
        _ => None,
    }
}

/// Triggers section: a bullet per event, its filters as nested bullets, and
/// the secrets a reusable workflow expects.
pub fn render_triggers(
    triggers: Option<&Value>,
    secrets: &IndexMap<String, SecretSpec>,
    config: &RenderConfig,
) -> String {
    let heading = format!("{} Triggers", config.heading());
    let events = normalize_triggers(triggers);
    if events.is_empty() {
        return format!("{}\n\n{}", heading, NO_TRIGGERS);
    }

    let mut lines = Vec::new();
    for event in &events {
        match event_summary(&event.name) {
            Some(summary) => lines.push(format!("- {}: {}", code(&event.name), summary)),
            None => lines.push(format!("- {}", code(&event.name))),
        }
        if let Some(value) = event.config {
            render_filters(value, 1, &mut lines);
        }
    }

    let mut fragment = format!("{}\n\n{}", heading, lines.join("\n"));
    if !secrets.is_empty() {
        fragment.push_str(&format!(
            "\n\n{} Secrets\n\n{}",
            config.sub_heading(),
            secrets_table(secrets)
        ));
    }
    fragment
}

fn render_filters(value: &Value, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Mapping(mapping) => {
            for (key, child) in entries(mapping) {
                if depth == 1 && DOCUMENTED_ELSEWHERE.contains(&key.as_str()) {
                    continue;
                }
                match child {
                    Value::Null => lines.push(format!("{}- {}", indent, key)),
                    Value::Sequence(items) if items.iter().all(is_scalar) => {
                        let rendered: Vec<String> = items
                            .iter()
                            .filter_map(scalar_to_string)
                            .map(|item| code(&item))
                            .collect();
                        lines.push(format!("{}- {}: {}", indent, key, rendered.join(", ")));
                    }
                    Value::Sequence(_) | Value::Mapping(_) => {
                        lines.push(format!("{}- {}:", indent, key));
                        render_filters(child, depth + 1, lines);
                    }
                    scalar => {
                        let text = scalar_to_string(scalar).unwrap_or_default();
                        lines.push(format!("{}- {}: {}", indent, key, code(&text)));
                    }
                }
            }
        }
        Value::Sequence(items) => {
            for item in items {
                if is_scalar(item) {
                    let text = scalar_to_string(item).unwrap_or_default();
                    lines.push(format!("{}- {}", indent, code(&text)));
                } else {
                    render_filters(item, depth, lines);
                }
            }
        }
        Value::Tagged(tagged) => render_filters(&tagged.value, depth, lines),
        Value::Null => {}
        scalar => {
            let text = scalar_to_string(scalar).unwrap_or_default();
            lines.push(format!("{}- {}", indent, code(&text)));
        }
    }
}

fn is_scalar(value: &Value) -> bool {
    scalar_to_string(value).is_some()
}

fn secrets_table(secrets: &IndexMap<String, SecretSpec>) -> String {
    let mut table = MarkdownTable::new(&[
        ("Name", Align::Left),
        ("Description", Align::Left),
        ("Required", Align::Center),
    ]);
    for (name, spec) in secrets {
        table.push_row(vec![
            code(name),
            spec.description.clone().unwrap_or_default(),
            required_marker(spec.required).to_string(),
        ]);
    }
    table.render()
}
