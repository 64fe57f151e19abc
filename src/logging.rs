//! Log output setup.
//!
//! The terminal is owned by the game's interface, so log records go to a file instead.

use std::{env, fs::File, sync::Mutex};

use color_eyre::eyre::{eyre, Result, WrapErr as _};
use tracing_subscriber::EnvFilter;

use crate::config::Logging;

/// Installs the global tracing subscriber.
///
/// The filter is chosen by [`filter`] from the settings and the `RUST_LOG` environment variable.
/// The log file is truncated on every start.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - The chosen level is not a valid filter directive
/// - A global subscriber is already installed
pub fn init(config: &Logging) -> Result<()> {
    let file = File::create(&config.file)
        .wrap_err_with(|| format!("failed to create log file {}", config.file.display()))?;
    let filter = filter(config, env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!(err))
}

/// Builds the log filter.
///
/// A level given on the command line wins over `rust_log`, the value of `RUST_LOG`, which in turn
/// wins over the level read from the configuration file.
///
/// # Errors
///
/// This function returns an error if the winning directive is not a valid filter.
fn filter(config: &Logging, rust_log: Option<&str>) -> Result<EnvFilter> {
    match rust_log {
        Some(directive) if !config.level_from_cli => EnvFilter::try_new(directive)
            .wrap_err_with(|| format!("invalid {} value '{directive}'", EnvFilter::DEFAULT_ENV)),
        _ => EnvFilter::try_new(&config.level)
            .wrap_err_with(|| format!("invalid log level '{}'", config.level)),
    }
}
