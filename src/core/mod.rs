pub mod config;
pub mod error;
pub mod generator;
pub mod readme;
pub mod render;
pub mod types;
pub mod workflow;

pub use config::{ConfigLoader, ConfigValidator, DocsConfig, ReadmeConfig, RenderConfig};
pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use generator::{
    generate_workflow_docs, generate_workflow_markdown_docs, GenerateOptions, GenerationOutcome,
};
pub use readme::{splice_markers, update_readme, MarkerError, ReadmeUpdate};
pub use render::{assemble, render_bundle, DocsBundle};
pub use types::*;
pub use workflow::{load_workflow, WorkflowDocument};
