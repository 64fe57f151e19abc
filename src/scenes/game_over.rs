//! Game over scene.

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
const HINT: &str = "(l) return to menu / (q) quit";

/// Game over scene.
///
/// Leaving it starts over: score and health go back to their initial values.
#[derive(Debug)]
pub(crate) struct GameOver;

impl Scene for GameOver {
    fn kind(&self) -> SceneType {
        SceneType::GameOver
    }

    fn handle_event(&mut self, event: &Event, manager: &mut Manager) -> Result<()> {
        if events::navigation(event) == Some(Navigation::Select) {
            info!("starting over from the main menu");
            manager.state_mut().reset();
            manager.state_mut().set(CURRENT_SCENE, SceneType::Menu);
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, manager: &Manager) -> Result<()> {
        ui::clear(frame);

        let (content, hint) = ui::split_hint(frame.area());
        let rows = ui::panel(frame, content, SceneType::GameOver.repr(), 3);

        if let [score, _, back] = rows.as_ref() {
            frame.render_widget(
                Line::styled(
                    format!("Final score: {}", manager.state().score()?),
                    ui::entry_style(false),
                )
                .centered(),
                *score,
            );
            frame.render_widget(
                Line::styled("Return to menu", ui::entry_style(true)).centered(),
                *back,
            );
        }

        ui::hint(frame, hint, HINT);

        Ok(())
    }
}
