#![allow(clippy::result_large_err)]

use super::DocsConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &DocsConfig) -> Result<(), AppError> {
        if !(1..=6).contains(&config.render.toc_level) {
            return Err(AppError::new(
                ErrorCategory::ConfigError,
                format!(
                    "render.toc_level must be between 1 and 6, got {}",
                    config.render.toc_level
                ),
            ));
        }

        if config.readme.file.as_os_str().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ConfigError,
                "readme.file cannot be empty",
            ));
        }

        if config.readme.start_marker.is_empty() || config.readme.end_marker.is_empty() {
            return Err(AppError::new(
                ErrorCategory::ConfigError,
                "readme markers cannot be empty",
            ));
        }

        if config.readme.start_marker == config.readme.end_marker {
            return Err(AppError::new(
                ErrorCategory::ConfigError,
                "readme.start_marker and readme.end_marker must differ",
            ));
        }

        Ok(())
    }
}
