use crate::core::config::DEFAULT_CONFIG_FILE;
use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Resolved logging configuration after reading config files and env overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub default_level: String,
    pub console_output: ConsoleOutput,
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL.to_string(),
            console_output: ConsoleOutput::default(),
            log_file: None,
        }
    }
}

impl LoggingConfig {
    /// Load configuration with deterministic precedence: defaults, `[logging]`
    /// section of the config file, env overrides, then the verbose flag.
    pub fn load(config_path: Option<&Path>, base_dir: &Path, verbose: bool) -> Result<Self> {
        let mut config = LoggingConfig::default();
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base_dir.join(DEFAULT_CONFIG_FILE));
        if let Some(section) = Self::load_from_file(&path)? {
            let config_dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => base_dir.join(parent),
                _ => base_dir.to_path_buf(),
            };
            config.apply(section, &config_dir);
        }
        config.apply_env_overrides(base_dir);
        if verbose {
            config.default_level = VERBOSE_LEVEL.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Option<TomlLoggingSection>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read logging config {}", path.display()))?;
        let parsed: TomlLogging = toml::from_str(&content)
            .with_context(|| format!("failed to parse logging config {}", path.display()))?;
        Ok(parsed.logging)
    }

    /// `log_file` in the file is relative to the directory holding that file.
    fn apply(&mut self, logging: TomlLoggingSection, config_dir: &Path) {
        if let Some(default_level) = logging.default_level {
            self.default_level = default_level;
        }
        if let Some(console_output) = logging.console_output {
            self.console_output = console_output;
        }
        if let Some(log_file) = logging.log_file {
            self.log_file = Some(config_dir.join(log_file));
        }
    }

    fn apply_env_overrides(&mut self, base_dir: &Path) {
        if let Ok(log_file) = env::var("WORKFLOWDOC_LOG_FILE") {
            if !log_file.trim().is_empty() {
                self.log_file = Some(base_dir.join(log_file));
            }
        }
        if let Ok(console_output) = env::var("WORKFLOWDOC_LOG_CONSOLE") {
            if let Ok(console_output) = console_output.parse::<ConsoleOutput>() {
                self.console_output = console_output;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        Directive::from_str(&self.default_level)
            .map_err(|_| anyhow!("logging.default_level must be a valid tracing directive"))?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TomlLogging {
    pub logging: Option<TomlLoggingSection>,
}

#[derive(Debug, Deserialize)]
struct TomlLoggingSection {
    pub default_level: Option<String>,
    #[serde(default)]
    pub console_output: Option<ConsoleOutput>,
    pub log_file: Option<String>,
}
