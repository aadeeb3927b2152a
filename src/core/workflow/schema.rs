#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;

const DESCRIPTION_MARKER: &str = "# <!-- description -->";

/// Trigger events whose `inputs` feed the inputs section, in lookup order.
const INPUT_EVENTS: [&str; 2] = ["workflow_call", "workflow_dispatch"];

/// Parsed workflow (or action metadata) file, reduced to the documented fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowDocument {
    pub name: Option<String>,
    pub description: Option<String>,
    pub inputs: IndexMap<String, InputSpec>,
    pub outputs: IndexMap<String, OutputSpec>,
    pub secrets: IndexMap<String, SecretSpec>,
    /// Raw `on` section; scalar, sequence and mapping forms are all valid.
    pub triggers: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputSpec {
    pub description: Option<String>,
    pub default: Option<String>,
    pub required: Option<bool>,
    pub input_type: Option<String>,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutputSpec {
    pub description: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SecretSpec {
    pub description: Option<String>,
    pub required: Option<bool>,
}

impl WorkflowDocument {
    /// Parse YAML text. Only syntax is checked; sections with an unexpected
    /// shape are treated as absent.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let root: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(text).map_err(|err| {
                AppError::with_source(
                    ErrorCategory::ParseError,
                    format!("workflow is not valid YAML: {}", err),
                    Box::new(err),
                )
            })?
        };
        Ok(Self::from_value(&root, text))
    }

    fn from_value(root: &Value, text: &str) -> Self {
        let triggers = trigger_section(root).cloned();

        let description = root
            .get("description")
            .and_then(scalar_to_string)
            .filter(|text| !text.trim().is_empty())
            .or_else(|| comment_description(text));

        let inputs = match root.get("inputs") {
            Some(section) => parse_entries(section, InputSpec::from_value),
            None => event_inputs(triggers.as_ref()),
        };

        let outputs = match root.get("outputs") {
            Some(section) => parse_entries(section, OutputSpec::from_value),
            None => event_section(triggers.as_ref(), "workflow_call", "outputs")
                .map(|section| parse_entries(section, OutputSpec::from_value))
                .unwrap_or_default(),
        };

        let secrets = event_section(triggers.as_ref(), "workflow_call", "secrets")
            .map(|section| parse_entries(section, SecretSpec::from_value))
            .unwrap_or_default();

        WorkflowDocument {
            name: root.get("name").and_then(scalar_to_string),
            description,
            inputs,
            outputs,
            secrets,
            triggers,
        }
    }
}

impl InputSpec {
    fn from_value(value: &Value) -> Self {
        InputSpec {
            description: value.get("description").and_then(scalar_to_string),
            default: value.get("default").and_then(value_to_string),
            required: value.get("required").and_then(flag),
            input_type: value.get("type").and_then(scalar_to_string),
            options: value
                .get("options")
                .and_then(Value::as_sequence)
                .map(|items| items.iter().filter_map(scalar_to_string).collect())
                .unwrap_or_default(),
        }
    }
}

impl OutputSpec {
    fn from_value(value: &Value) -> Self {
        OutputSpec {
            description: value.get("description").and_then(scalar_to_string),
            value: value.get("value").and_then(scalar_to_string),
        }
    }
}

impl SecretSpec {
    fn from_value(value: &Value) -> Self {
        SecretSpec {
            description: value.get("description").and_then(scalar_to_string),
            required: value.get("required").and_then(flag),
        }
    }
}

/// Read and parse a workflow file.
pub async fn load_workflow(path: &Path) -> Result<WorkflowDocument, AppError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| AppError::from_read(path, err))?;
    WorkflowDocument::parse(&text).map_err(|mut err| {
        err.add_context("path", &path.display().to_string());
        err
    })
}

/// Locate the `on` section. YAML 1.1 emitters may have turned the key into `true`.
fn trigger_section(root: &Value) -> Option<&Value> {
    let mapping = root.as_mapping()?;
    mapping.get("on").or_else(|| mapping.get(Value::Bool(true)))
}

fn event_section<'a>(triggers: Option<&'a Value>, event: &str, key: &str) -> Option<&'a Value> {
    triggers?.get(event)?.get(key)
}

fn event_inputs(triggers: Option<&Value>) -> IndexMap<String, InputSpec> {
    let mut inputs = IndexMap::new();
    for event in INPUT_EVENTS {
        if let Some(section) = event_section(triggers, event, "inputs") {
            for (name, spec) in parse_entries(section, InputSpec::from_value) {
                inputs.entry(name).or_insert(spec);
            }
        }
    }
    inputs
}

fn parse_entries<T>(section: &Value, build: fn(&Value) -> T) -> IndexMap<String, T> {
    let Some(mapping) = section.as_mapping() else {
        return IndexMap::new();
    };
    entries(mapping)
        .map(|(name, value)| (name, build(value)))
        .collect()
}

/// Mapping entries with keys rendered as text, in document order.
pub(crate) fn entries(mapping: &Mapping) -> impl Iterator<Item = (String, &Value)> {
    mapping
        .iter()
        .filter_map(|(key, value)| scalar_to_string(key).map(|name| (name, value)))
}

/// Text form of a scalar; `None` for null, sequences and mappings.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Like [`scalar_to_string`], but collections are rendered as compact JSON.
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Sequence(_) | Value::Mapping(_) => serde_json::to_string(value).ok(),
        other => scalar_to_string(other),
    }
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => text.trim().to_lowercase().parse().ok(),
        _ => None,
    }
}

/// Description written as a top-level comment block introduced by
/// `# <!-- description -->` at column 0. Indented comments never count.
fn comment_description(text: &str) -> Option<String> {
    let mut lines = text
        .lines()
        .skip_while(|line| !line.starts_with(DESCRIPTION_MARKER));
    lines.next()?;

    let body: Vec<&str> = lines
        .take_while(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim())
        .collect();
    let description = body.join("\n").trim().to_string();
    (!description.is_empty()).then_some(description)
}
