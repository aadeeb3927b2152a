//! Markdown rendering: one extractor per documented section plus the assembler
//! that stitches them together.

pub mod assemble;
pub mod description;
pub mod inputs;
pub mod outputs;
pub mod table;
pub mod triggers;

pub use assemble::{assemble, normalize_line_breaks};
pub use description::render_description;
pub use inputs::render_inputs;
pub use outputs::render_outputs;
pub use triggers::{normalize_triggers, render_triggers, TriggerEvent};

use crate::core::config::RenderConfig;
use crate::core::workflow::WorkflowDocument;
use serde::Serialize;

/// The four rendered sections of one workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocsBundle {
    /// Title from the workflow name plus the Description section.
    pub description: String,
    pub inputs: String,
    pub outputs: String,
    pub triggers: String,
}

impl DocsBundle {
    /// Fragments in assembly order.
    pub fn fragments(&self) -> [&str; 4] {
        [
            self.description.as_str(),
            self.inputs.as_str(),
            self.outputs.as_str(),
            self.triggers.as_str(),
        ]
    }
}

/// Run every extractor over the document. Fragments already use the
/// configured line terminator.
pub fn render_bundle(document: &WorkflowDocument, config: &RenderConfig) -> DocsBundle {
    let finish = |fragment: String| normalize_line_breaks(&fragment, config.line_breaks);
    DocsBundle {
        description: finish(render_description(
            document.name.as_deref(),
            document.description.as_deref(),
            config,
        )),
        inputs: finish(render_inputs(&document.inputs, config)),
        outputs: finish(render_outputs(&document.outputs, config)),
        triggers: finish(render_triggers(
            document.triggers.as_ref(),
            &document.secrets,
            config,
        )),
    }
}
