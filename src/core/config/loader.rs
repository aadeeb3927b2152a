#![allow(clippy::result_large_err)]

use super::{DocsConfig, DEFAULT_CONFIG_FILE};
use crate::core::error::AppError;
use crate::core::types::{ErrorCategory, LineBreaks};
use std::env;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve configuration for one invocation.
    /// An explicit path must exist; otherwise `workflowdoc.toml` in `base_dir` is
    /// used when present. Environment variables override file values.
    pub fn load(explicit: Option<&Path>, base_dir: &Path) -> Result<DocsConfig, AppError> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?.ok_or_else(|| {
                AppError::new(
                    ErrorCategory::FileNotFound,
                    format!("config file {} does not exist", path.display()),
                )
            })?,
            None => Self::load_from_file(&base_dir.join(DEFAULT_CONFIG_FILE))?.unwrap_or_default(),
        };

        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<DocsConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| AppError::from_read(path, e))?;

        let config: DocsConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(Some(config))
    }

    /// Environment variables take precedence over config file values.
    /// Values that do not parse are ignored.
    fn apply_env_overrides(config: &mut DocsConfig) {
        if let Ok(line_breaks) = env::var("WORKFLOWDOC_LINE_BREAKS") {
            if let Ok(line_breaks) = line_breaks.parse::<LineBreaks>() {
                config.render.line_breaks = line_breaks;
            }
        }

        if let Ok(toc_level) = env::var("WORKFLOWDOC_TOC_LEVEL") {
            if let Ok(toc_level) = toc_level.trim().parse::<u8>() {
                config.render.toc_level = toc_level;
            }
        }

        if let Ok(readme_file) = env::var("WORKFLOWDOC_README_FILE") {
            config.readme.file = PathBuf::from(readme_file);
        }

        if let Ok(start_marker) = env::var("WORKFLOWDOC_START_MARKER") {
            config.readme.start_marker = start_marker;
        }

        if let Ok(end_marker) = env::var("WORKFLOWDOC_END_MARKER") {
            config.readme.end_marker = end_marker;
        }
    }

    /// One line per supported environment variable, shown in `generate --help`.
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "WORKFLOWDOC_LINE_BREAKS - Line endings of the generated markdown (LF/CRLF, default: LF)",
            "WORKFLOWDOC_TOC_LEVEL - Heading depth of generated sections (1-6, default: 2)",
            "WORKFLOWDOC_README_FILE - README to update (default: README.md)",
            "WORKFLOWDOC_START_MARKER - Start of the injection region (default: <!--start-->)",
            "WORKFLOWDOC_END_MARKER - End of the injection region (default: <!--end-->)",
            "WORKFLOWDOC_LOG_FILE - Append logs to this file",
            "WORKFLOWDOC_LOG_CONSOLE - Console log sink (stdout/stderr/none, default: stderr)",
        ]
    }
}
