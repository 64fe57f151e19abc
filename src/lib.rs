//! This crate contains the menu, scene and game state layer of the terminal maze game labyrinth.
//!
//! The game runs as a loop over scenes: the active scene receives terminal events, updates a
//! shared key-value game state and draws itself. Scenes request a switch by writing the
//! `current_scene` key; the loop ends when the `running` key is cleared.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod cli;
pub mod config;
mod events;
mod font;
mod game;
pub mod logging;
mod scenes;
mod state;
mod systems;
pub mod terminal;
mod types;
mod ui;

pub use app::App;
