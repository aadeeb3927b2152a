use crate::core::config::DocsConfig;
use crate::core::types::LineBreaks;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Workflow (or action metadata) file to analyse and document
    #[arg(value_name = "WORKFLOW_FILE")]
    pub workflow_file: PathBuf,

    /// Replace the marker region of the README with the generated markdown
    #[arg(long, help_heading = "README Injection")]
    pub update_readme: bool,

    /// README to update (default: README.md)
    #[arg(long, value_name = "FILE", help_heading = "README Injection")]
    pub readme_file: Option<PathBuf>,

    /// Marker opening the injection region (default: <!--start-->)
    #[arg(long, value_name = "TEXT", help_heading = "README Injection")]
    pub start_marker: Option<String>,

    /// Marker closing the injection region (default: <!--end-->)
    #[arg(long, value_name = "TEXT", help_heading = "README Injection")]
    pub end_marker: Option<String>,

    /// Line endings of the generated markdown: LF or CRLF (default: LF)
    #[arg(long, value_name = "STYLE", help_heading = "Rendering")]
    pub line_breaks: Option<LineBreaks>,

    /// Heading level of the generated sections, 1-6 (default: 2)
    #[arg(long, value_name = "LEVEL", help_heading = "Rendering")]
    pub toc_level: Option<u8>,

    /// Also write the markdown to this file
    #[arg(long, value_name = "FILE", help_heading = "Output Options")]
    pub output: Option<PathBuf>,

    /// Print markdown or a JSON document with every section
    #[arg(long, default_value = "markdown", value_name = "FORMAT", help_heading = "Output Options")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, help_heading = "Output Options")]
    pub verbose: bool,

    /// Path to config file (default: ./workflowdoc.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Command-line values win over config file and environment values.
    pub fn apply_overrides(&self, config: &mut DocsConfig) {
        if let Some(readme_file) = &self.readme_file {
            config.readme.file = readme_file.clone();
        }
        if let Some(start_marker) = &self.start_marker {
            config.readme.start_marker = start_marker.clone();
        }
        if let Some(end_marker) = &self.end_marker {
            config.readme.end_marker = end_marker.clone();
        }
        if let Some(line_breaks) = self.line_breaks {
            config.render.line_breaks = line_breaks;
        }
        if let Some(toc_level) = self.toc_level {
            config.render.toc_level = toc_level;
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The assembled markdown document
    Markdown,
    /// JSON payload with each section, suitable for downstream tooling
    Json,
}
