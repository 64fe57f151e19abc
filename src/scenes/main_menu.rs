//! Main menu scene with keyboard and mouse navigation.

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{Event, MouseButton, MouseEventKind},
    layout::Rect,
    text::Line,
    Frame,
};
use tracing::info;

use crate::{
    events::{self, Navigation},
    font::Font,
    game::Manager,
    scenes::Scene,
    state::{CURRENT_SCENE, RUNNING},
    types::{MainMenuItem, SceneType},
    ui,
};

/// Key hint drawn below the menu.
const HINT: &str = "(j) down / (k) up / (l) select / (q) quit";

/// Main menu state.
///
/// The menu remembers the area it was last drawn in, so that mouse events are hit-tested against
/// exactly the rectangles the labels were drawn into.
#[derive(Debug)]
pub(crate) struct MainMenu {
    /// Index of the selected item.
    ///
    /// This field holds the position of the highlighted item in [`MainMenuItem::ALL`]. It starts
    /// at the first item and wraps around in both directions.
    selected: usize,
    /// Requested label font.
    ///
    /// This field holds the font the labels are drawn with when they fit the screen.
    font: Font,
    /// Area the labels were last laid out in.
    ///
    /// This field holds the content area of the last drawn frame. Mouse events are hit-tested
    /// against the label rectangles laid out in this area.
    area: Rect,
}

impl MainMenu {
    /// Creates the menu with the first item selected.
    pub(crate) const fn new(font: Font) -> Self {
        Self {
            selected: 0,
            font,
            area: Rect::ZERO,
        }
    }

    /// Returns the selected item.
    pub(crate) fn selected(&self) -> MainMenuItem {
        MainMenuItem::ALL
            .get(self.selected)
            .copied()
            .unwrap_or(MainMenuItem::StartGame)
    }

    /// Moves the selection down, wrapping around after the last item.
    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MainMenuItem::ALL.len();
    }

    /// Moves the selection up, wrapping around before the first item.
    fn select_previous(&mut self) {
        let len = MainMenuItem::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Returns the font and label rectangles for the last drawn area.
    fn layout(&self) -> (Font, Vec<Rect>) {
        let labels = MainMenuItem::ALL.map(MainMenuItem::label);
        let font = self.font.fit(self.area, &labels);

        (font, font.layout(self.area, &labels))
    }

    /// Applies the selected item to the game state.
    fn activate(&self, manager: &mut Manager) {
        let item = self.selected();
        info!(?item, "main menu option selected");

        match item {
            MainMenuItem::StartGame => manager.state_mut().set(CURRENT_SCENE, SceneType::Game),
            MainMenuItem::Options => manager.state_mut().set(CURRENT_SCENE, SceneType::Options),
            MainMenuItem::Quit => manager.state_mut().set(RUNNING, false),
        }
    }

    /// Handles a mouse event: hovering selects, a left click activates the hovered selection.
    fn handle_mouse(&mut self, event: &Event, manager: &mut Manager) {
        let Some((kind, position)) = events::mouse(event) else {
            return;
        };
        let (_, rects) = self.layout();

        match kind {
            MouseEventKind::Moved => {
                if let Some(idx) = rects.iter().position(|rect| rect.contains(position)) {
                    self.selected = idx;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if rects
                    .get(self.selected)
                    .is_some_and(|rect| rect.contains(position))
                {
                    self.activate(manager);
                }
            }
            _ => {}
        }
    }
}

impl Scene for MainMenu {
    fn kind(&self) -> SceneType {
        SceneType::Menu
    }

    fn handle_event(&mut self, event: &Event, manager: &mut Manager) -> Result<()> {
        match events::navigation(event) {
            Some(Navigation::Up) => self.select_previous(),
            Some(Navigation::Down) => self.select_next(),
            Some(Navigation::Select) => self.activate(manager),
            Some(Navigation::Back) => {}
            None => self.handle_mouse(event, manager),
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, _manager: &Manager) -> Result<()> {
        ui::clear(frame);

        let (content, hint) = ui::split_hint(frame.area());
        self.area = content;
        let (font, rects) = self.layout();

        for (idx, (item, rect)) in MainMenuItem::ALL.iter().zip(rects).enumerate() {
            let style = ui::entry_style(idx == self.selected).add_modifier(font.modifier());
            let line = Line::styled(font.spaced(item.label()), style).centered();
            let middle = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, rect.height.min(1));

            frame.render_widget(line, middle);
        }

        ui::hint(frame, hint, HINT);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::tests::{mouse_at, press};
    use ratatui::{backend::TestBackend, crossterm::event::KeyCode, style::Color, Terminal};

    /// Creates a menu laid out as on an 80x24 terminal.
    fn create_test_menu() -> MainMenu {
        let mut menu = MainMenu::new(Font::default());
        menu.area = Rect::new(0, 0, 80, 23);
        menu
    }

    /// Returns the label rectangle of the item at `idx`.
    fn rect_of(menu: &MainMenu, idx: usize) -> Rect {
        menu.layout()
            .1
            .get(idx)
            .copied()
            .expect("menu should have a rect per item")
    }

    #[test]
    fn test_main_menu_starts_on_first_item() {
        let menu = create_test_menu();

        assert_eq!(menu.selected(), MainMenuItem::StartGame);
        assert_eq!(menu.kind(), SceneType::Menu);
    }

    #[test]
    fn test_main_menu_down_wraps_around() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();

        for expected in [MainMenuItem::Options, MainMenuItem::Quit, MainMenuItem::StartGame] {
            menu.handle_event(&press(KeyCode::Down), &mut manager)
                .expect("navigation should succeed");
            assert_eq!(menu.selected(), expected);
        }
    }

    #[test]
    fn test_main_menu_up_wraps_around() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();

        menu.handle_event(&press(KeyCode::Up), &mut manager)
            .expect("navigation should succeed");
        assert_eq!(menu.selected(), MainMenuItem::Quit);

        menu.handle_event(&press(KeyCode::Char('k')), &mut manager)
            .expect("navigation should succeed");
        assert_eq!(menu.selected(), MainMenuItem::Options);
    }

    #[test]
    fn test_main_menu_start_game() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();

        menu.handle_event(&press(KeyCode::Enter), &mut manager)
            .expect("selection should succeed");

        assert_eq!(manager.state().current_scene(), SceneType::Game);
        assert!(manager.state().running());
    }

    #[test]
    fn test_main_menu_options() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();

        menu.handle_event(&press(KeyCode::Char('j')), &mut manager)
            .expect("navigation should succeed");
        menu.handle_event(&press(KeyCode::Char('l')), &mut manager)
            .expect("selection should succeed");

        assert_eq!(manager.state().current_scene(), SceneType::Options);
    }

    #[test]
    fn test_main_menu_quit() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();

        menu.handle_event(&press(KeyCode::Up), &mut manager)
            .expect("navigation should succeed");
        menu.handle_event(&press(KeyCode::Enter), &mut manager)
            .expect("selection should succeed");

        assert!(!manager.state().running());
        assert_eq!(manager.state().current_scene(), SceneType::Menu);
    }

    #[test]
    fn test_main_menu_back_is_ignored() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();

        menu.handle_event(&press(KeyCode::Esc), &mut manager)
            .expect("event should be handled");

        assert_eq!(menu.selected(), MainMenuItem::StartGame);
        assert_eq!(manager.state().current_scene(), SceneType::Menu);
    }

    #[test]
    fn test_main_menu_hover_selects() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();
        let quit = rect_of(&menu, 2);

        menu.handle_event(&mouse_at(MouseEventKind::Moved, quit.x, quit.y), &mut manager)
            .expect("hover should succeed");

        assert_eq!(menu.selected(), MainMenuItem::Quit);
    }

    #[test]
    fn test_main_menu_hover_outside_keeps_selection() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();

        menu.handle_event(&mouse_at(MouseEventKind::Moved, 0, 0), &mut manager)
            .expect("hover should succeed");

        assert_eq!(menu.selected(), MainMenuItem::StartGame);
    }

    #[test]
    fn test_main_menu_click_on_selected_activates() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();
        let options = rect_of(&menu, 1);
        let inside = (options.right() - 1, options.bottom() - 1);

        menu.handle_event(&mouse_at(MouseEventKind::Moved, inside.0, inside.1), &mut manager)
            .expect("hover should succeed");
        menu.handle_event(
            &mouse_at(MouseEventKind::Down(MouseButton::Left), inside.0, inside.1),
            &mut manager,
        )
        .expect("click should succeed");

        assert_eq!(manager.state().current_scene(), SceneType::Options);
    }

    #[test]
    fn test_main_menu_click_on_other_option_does_nothing() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();
        let quit = rect_of(&menu, 2);

        menu.handle_event(
            &mouse_at(MouseEventKind::Down(MouseButton::Left), quit.x, quit.y),
            &mut manager,
        )
        .expect("click should succeed");

        assert!(manager.state().running());
        assert_eq!(menu.selected(), MainMenuItem::StartGame);
    }

    #[test]
    fn test_main_menu_right_click_does_nothing() {
        let mut menu = create_test_menu();
        let mut manager = Manager::default();
        let start = rect_of(&menu, 0);

        menu.handle_event(
            &mouse_at(MouseEventKind::Down(MouseButton::Right), start.x, start.y),
            &mut manager,
        )
        .expect("click should succeed");

        assert_eq!(manager.state().current_scene(), SceneType::Menu);
    }

    #[test]
    fn test_main_menu_render_highlights_selection() {
        let mut menu = MainMenu::new(Font::default());
        let manager = Manager::default();
        let mut terminal =
            Terminal::new(TestBackend::new(80, 24)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| {
            menu.render(frame, &manager).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing main menu should succeed");

        let start = rect_of(&menu, 0);
        let quit = rect_of(&menu, 2);
        let buffer = terminal.backend().buffer();
        let start_cell = buffer
            .cell((start.x, start.y + 1))
            .expect("start label cell should exist");
        let quit_cell = buffer
            .cell((quit.x, quit.y + 1))
            .expect("quit label cell should exist");

        assert_eq!(menu.area, Rect::new(0, 0, 80, 23));
        assert_eq!(start_cell.symbol(), "S");
        assert_eq!(start_cell.fg, Color::Yellow);
        assert_eq!(quit_cell.symbol(), "Q");
        assert_eq!(quit_cell.fg, Color::White);
    }

    #[test]
    fn test_main_menu_render_small_terminal_uses_plain_font() {
        let mut menu = MainMenu::new(Font::default());
        let manager = Manager::default();
        let mut terminal =
            Terminal::new(TestBackend::new(20, 8)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| {
            menu.render(frame, &manager).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing main menu should succeed");

        let (font, rects) = menu.layout();
        assert_eq!(font, Font::plain());
        assert_eq!(rects.len(), 3);
    }
}
