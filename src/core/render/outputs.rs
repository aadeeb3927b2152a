use super::table::{code, Align, MarkdownTable};
use crate::core::config::RenderConfig;
use crate::core::workflow::OutputSpec;
use indexmap::IndexMap;

pub const NO_OUTPUTS: &str = "This workflow has no outputs.";

pub fn render_outputs(outputs: &IndexMap<String, OutputSpec>, config: &RenderConfig) -> String {
    let heading = format!("{} Outputs", config.heading());
    if outputs.is_empty() {
        return format!("{}\n\n{}", heading, NO_OUTPUTS);
    }

    let mut table = MarkdownTable::new(&[("Name", Align::Left), ("Description", Align::Left)]);
    for (name, spec) in outputs {
        table.push_row(vec![code(name), spec.description.clone().unwrap_or_default()]);
    }

    format!("{}\n\n{}", heading, table.render())
}
