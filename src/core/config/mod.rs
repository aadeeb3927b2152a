use crate::core::types::LineBreaks;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "workflowdoc.toml";
pub const DEFAULT_README_FILE: &str = "README.md";
pub const DEFAULT_START_MARKER: &str = "<!--start-->";
pub const DEFAULT_END_MARKER: &str = "<!--end-->";
pub const DEFAULT_TOC_LEVEL: u8 = 2;

/// Main configuration loaded from workflowdoc.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DocsConfig {
    /// Markdown rendering options
    #[serde(default)]
    pub render: RenderConfig,

    /// README injection options
    #[serde(default)]
    pub readme: ReadmeConfig,
}

/// Options that shape the emitted markdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderConfig {
    /// Line terminator for every emitted line
    #[serde(default)]
    pub line_breaks: LineBreaks,

    /// Heading depth of generated section headers
    #[serde(default = "default_toc_level")]
    pub toc_level: u8,
}

/// Target file and marker pair for README injection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadmeConfig {
    #[serde(default = "default_readme_file")]
    pub file: PathBuf,

    #[serde(default = "default_start_marker")]
    pub start_marker: String,

    #[serde(default = "default_end_marker")]
    pub end_marker: String,
}

fn default_toc_level() -> u8 {
    DEFAULT_TOC_LEVEL
}

fn default_readme_file() -> PathBuf {
    PathBuf::from(DEFAULT_README_FILE)
}

fn default_start_marker() -> String {
    DEFAULT_START_MARKER.to_string()
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            line_breaks: LineBreaks::default(),
            toc_level: default_toc_level(),
        }
    }
}

impl RenderConfig {
    /// Heading prefix for top-level sections, e.g. `##` for level 2.
    pub fn heading(&self) -> String {
        "#".repeat(usize::from(self.toc_level.clamp(1, 6)))
    }

    /// Heading prefix for the document title, one level above the sections.
    pub fn title_heading(&self) -> String {
        "#".repeat(usize::from(self.toc_level.saturating_sub(1).clamp(1, 6)))
    }

    /// Heading prefix one level below the section headings.
    pub fn sub_heading(&self) -> String {
        "#".repeat(usize::from(self.toc_level.saturating_add(1).clamp(1, 6)))
    }
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        ReadmeConfig {
            file: default_readme_file(),
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
        }
    }
}


pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;
