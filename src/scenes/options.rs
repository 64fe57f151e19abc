//! Options scene listing the active settings.

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{Event, MouseButton, MouseEventKind},
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    Frame,
};
use tracing::info;

use crate::{
    config::Config,
    events::{self, Navigation},
    font::Font,
    game::Manager,
    scenes::Scene,
    state::CURRENT_SCENE,
    systems,
    types::SceneType,
    ui,
};

/// Key hint drawn below the panel.
const HINT: &str = "(l) select / (h) return / (q) quit";

/// Label of the entry leading back to the main menu.
const BACK: &str = "Back";

/// Options scene state.
#[derive(Debug, Default)]
pub(crate) struct Options {
    /// Area the "Back" label was last drawn in.
    ///
    /// This field holds exactly the cells covered by the label, so that clicks elsewhere on its
    /// row are ignored as they are in the main menu.
    back: Rect,
}

impl Options {
    /// Returns to the main menu.
    fn leave(manager: &mut Manager) {
        info!("leaving the options scene");
        manager.state_mut().set(CURRENT_SCENE, SceneType::Menu);
    }

    /// Returns the read-only lines describing the settings.
    fn settings(manager: &Manager) -> Vec<String> {
        let mut lines = if let Some(config) = manager.systems().get::<Config>(systems::CONFIG) {
            vec![
                format!("Font size: {}", config.graphics.font_size),
                format!("Frame rate: {} fps", config.graphics.fps),
            ]
        } else {
            vec!["Settings unavailable".to_owned(), String::new()]
        };
        lines.push(format!(
            "Systems: {}",
            manager.systems().names().join(", ")
        ));

        lines
    }
}

impl Scene for Options {
    fn kind(&self) -> SceneType {
        SceneType::Options
    }

    fn handle_event(&mut self, event: &Event, manager: &mut Manager) -> Result<()> {
        match events::navigation(event) {
            Some(Navigation::Select | Navigation::Back) => Self::leave(manager),
            Some(Navigation::Up | Navigation::Down) => {}
            None => {
                if let Some((MouseEventKind::Down(MouseButton::Left), position)) =
                    events::mouse(event)
                {
                    if self.back.contains(position) {
                        Self::leave(manager);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, manager: &Manager) -> Result<()> {
        ui::clear(frame);

        let (content, hint) = ui::split_hint(frame.area());
        let rows = ui::panel(frame, content, SceneType::Options.repr(), 5);

        for (text, row) in Self::settings(manager).into_iter().zip(rows.iter()) {
            frame.render_widget(Line::styled(text, ui::entry_style(false)), *row);
        }

        let row = rows.last().copied().unwrap_or_default();
        let [back] = Layout::horizontal([Constraint::Length(Font::plain().text_width(BACK))])
            .flex(Flex::Center)
            .areas(row);
        self.back = back;
        frame.render_widget(Line::styled(BACK, ui::entry_style(true)), self.back);

        ui::hint(frame, hint, HINT);

        Ok(())
    }
}
