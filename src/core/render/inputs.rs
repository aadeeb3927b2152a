use super::table::{code, Align, MarkdownTable};
use crate::core::config::RenderConfig;
use crate::core::workflow::InputSpec;
use indexmap::IndexMap;

pub const NO_INPUTS: &str = "This workflow has no inputs.";

const COLUMNS: [(&str, Align); 5] = [
    ("Name", Align::Left),
    ("Description", Align::Left),
    ("Default", Align::Left),
    ("Required", Align::Center),
    ("Type", Align::Left),
];

/// Inputs section: one table row per input, in declaration order.
pub fn render_inputs(inputs: &IndexMap<String, InputSpec>, config: &RenderConfig) -> String {
    let heading = format!("{} Inputs", config.heading());
    if inputs.is_empty() {
        return format!("{}\n\n{}", heading, NO_INPUTS);
    }

    let mut table = MarkdownTable::new(&COLUMNS);
    for (name, spec) in inputs {
        table.push_row(vec![
            code(name),
            spec.description.clone().unwrap_or_default(),
            spec.default.as_deref().map(default_cell).unwrap_or_default(),
            required_marker(spec.required).to_string(),
            type_cell(spec),
        ]);
    }

    format!("{}\n\n{}", heading, table.render())
}

pub(crate) fn required_marker(required: Option<bool>) -> &'static str {
    if required.unwrap_or(false) {
        "yes"
    } else {
        "no"
    }
}

/// An empty-string default is shown as `""` rather than an empty code span.
fn default_cell(default: &str) -> String {
    if default.is_empty() {
        code("\"\"")
    } else {
        code(default)
    }
}

fn type_cell(spec: &InputSpec) -> String {
    let Some(input_type) = spec.input_type.as_deref() else {
        return String::new();
    };
    if input_type == "choice" && !spec.options.is_empty() {
        let items: String = spec
            .options
            .iter()
            .map(|option| format!("<li>{}</li>", option))
            .collect();
        return format!("{}:<br /><ul>{}</ul>", code(input_type), items);
    }
    code(input_type)
}
