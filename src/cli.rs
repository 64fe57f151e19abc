//! Command line interface of the game binary.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments.
///
/// Every flag except `--config` overrides the matching setting read from the configuration file.
#[derive(Debug, Parser)]
#[command(name = "labyrinth", version, about = "A terminal maze game")]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "labyrinth.toml")]
    pub config: PathBuf,
    /// Frames drawn per second.
    #[arg(long)]
    pub fps: Option<u16>,
    /// Log level or filter directive, such as `debug` or `labyrinth=trace`.
    #[arg(long)]
    pub log_level: Option<String>,
}
