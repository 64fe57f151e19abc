//! This crate contains the source code for the binary for the game labyrinth.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use labyrinth::{cli::Cli, config::Config, logging, terminal::with_mouse_capture, App};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)?;
    config.apply(&cli);
    config.validate()?;
    logging::init(&config.logging)?;

    let mut app = App::new(&config)?;
    let mut terminal = ratatui::init();
    let result = with_mouse_capture(&mut io::stdout(), || app.run(&mut terminal));
    ratatui::restore();

    result
}
