//! Gameplay scene showing the player's standing.

use color_eyre::eyre::Result;
use ratatui::{crossterm::event::Event, text::Line, Frame};
use tracing::info;

use crate::{
    events::{self, Navigation},
    game::Manager,
    scenes::Scene,
    state::CURRENT_SCENE,
    types::SceneType,
    ui,
};

/// Key hint drawn below the panel.
const HINT: &str = "(h) return to menu / (q) quit";

/// Gameplay scene.
#[derive(Debug)]
pub(crate) struct Gameplay;

impl Scene for Gameplay {
    fn kind(&self) -> SceneType {
        SceneType::Game
    }

    fn handle_event(&mut self, event: &Event, manager: &mut Manager) -> Result<()> {
        if events::navigation(event) == Some(Navigation::Back) {
            info!("returning to the main menu");
            manager.state_mut().set(CURRENT_SCENE, SceneType::Menu);
        }

        Ok(())
    }

    fn update(&mut self, manager: &mut Manager) -> Result<()> {
        let health = manager.state().health()?;
        if health <= 0 {
            info!(health, "player is out of health");
            manager.state_mut().set(CURRENT_SCENE, SceneType::GameOver);
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, manager: &Manager) -> Result<()> {
        ui::clear(frame);

        let (content, hint) = ui::split_hint(frame.area());
        let rows = ui::panel(frame, content, SceneType::Game.repr(), 2);
        let lines = [
            format!("Score: {}", manager.state().score()?),
            format!("Health: {}", manager.state().health()?),
        ];

        for (text, row) in lines.into_iter().zip(rows.iter()) {
            frame.render_widget(Line::styled(text, ui::entry_style(false)), *row);
        }

        ui::hint(frame, hint, HINT);

        Ok(())
    }
}
