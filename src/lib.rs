//! Markdown documentation for GitHub Actions workflows and action metadata.
//!
//! The pipeline parses a YAML file into a [`core::WorkflowDocument`], renders
//! one markdown fragment per section, assembles them and can splice the result
//! into a README between two marker comments.

pub mod cli;
pub mod core;
pub mod logging;

/// Current crate version string exposed for CLI and tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, anyhow::Error>;
