//! Workflow file parsing: YAML text to the fields that get documented.
pub mod schema;

pub use schema::{load_workflow, InputSpec, OutputSpec, SecretSpec, WorkflowDocument};
