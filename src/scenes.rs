//! Scene abstraction and construction.
//!
//! A scene is a self-contained mode of the game: it receives input events, updates the shared
//! game state and draws a frame. Scenes never switch to each other directly; they write the
//! `current_scene` key and the main loop builds the requested scene with [`build`].

mod game_over;
mod gameplay;
mod main_menu;
mod options;

use color_eyre::eyre::Result;
use ratatui::{crossterm::event::Event, Frame};

use crate::{font::Font, game::Manager, types::SceneType};

use self::{game_over::GameOver, gameplay::Gameplay, main_menu::MainMenu, options::Options};

/// Behaviour shared by every scene.
///
/// All methods except [`kind`](Scene::kind) do nothing by default.
pub(crate) trait Scene {
    /// Returns the type of the scene, compared against the `current_scene` key every frame.
    fn kind(&self) -> SceneType;

    /// Handles a terminal event.
    ///
    /// # Errors
    ///
    /// Implementations may return errors when the game state is inconsistent.
    fn handle_event(&mut self, _event: &Event, _manager: &mut Manager) -> Result<()> {
        Ok(())
    }

    /// Advances the scene's logic by one frame.
    ///
    /// # Errors
    ///
    /// Implementations may return errors when the game state is inconsistent.
    fn update(&mut self, _manager: &mut Manager) -> Result<()> {
        Ok(())
    }

    /// Draws the scene into `frame`.
    ///
    /// # Errors
    ///
    /// Implementations may return errors when the game state is inconsistent.
    fn render(&mut self, _frame: &mut Frame, _manager: &Manager) -> Result<()> {
        Ok(())
    }
}

/// Builds the scene of the given type.
///
/// The main menu draws its labels with `font`; the other scenes use the plain panel layout.
pub(crate) fn build(kind: SceneType, font: Font) -> Box<dyn Scene> {
    match kind {
        SceneType::Menu => Box::new(MainMenu::new(font)),
        SceneType::Game => Box::new(Gameplay),
        SceneType::Options => Box::new(Options::default()),
        SceneType::GameOver => Box::new(GameOver),
    }
}
