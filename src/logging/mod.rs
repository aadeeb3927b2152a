pub mod config;
pub mod layers;

pub use layers::console::ConsoleOutput;

use crate::logging::config::LoggingConfig;
use crate::logging::layers::{console, file};
use crate::{cli::Command, Result};
use anyhow::{anyhow, Context};
use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Keeps the non-blocking file writer flushing until the command ends.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize the logging framework for the provided CLI command.
///
/// Filters come from `RUST_LOG` when set, otherwise from the `[logging]`
/// section of the config file. Errors when invoked more than once per process.
pub fn init(command: &Command) -> Result<LoggingGuard> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let base_dir = env::current_dir().context("failed to resolve current directory")?;
    let (config_path, verbose) = command_settings(command);
    let config = LoggingConfig::load(config_path, &base_dir, verbose)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_level))
        .context("failed to configure tracing level")?;

    type BaseRegistry = Registry;
    type FileSubscriber = file::FileLayerStack<BaseRegistry>;

    let (file_layer, file_guard) = file::file_layer::<BaseRegistry>(config.log_file.as_deref())?;
    let console_layer = console::console_layer::<FileSubscriber>(config.console_output);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(
        level = %config.default_level,
        console = %config.console_output,
        log_file = ?config.log_file,
        "logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn command_settings(command: &Command) -> (Option<&Path>, bool) {
    match command {
        Command::Generate(args) => (args.config.as_deref(), args.verbose),
    }
}
