//! Input polling and translation of terminal events into game input.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind},
    layout::Position,
};

/// Menu navigation requested by a key press.
///
/// Both the arrow keys and the `hjkl` keys navigate, so every scene reads input through this
/// enumeration instead of matching key codes itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Navigation {
    /// Move the selection up.
    ///
    /// This variant represents a press of the Up arrow or `k`.
    Up,
    /// Move the selection down.
    ///
    /// This variant represents a press of the Down arrow or `j`.
    Down,
    /// Activate the selection.
    ///
    /// This variant represents a press of Enter or `l`.
    Select,
    /// Leave the scene.
    ///
    /// This variant represents a press of Esc or `h`.
    Back,
}

/// Waits at most `timeout` for the next terminal event.
///
/// # Errors
///
/// This function may return errors from polling or reading the terminal's event queue.
pub(crate) fn poll(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Returns whether `event` asks to close the game: `q` or Ctrl-C.
pub(crate) fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key.code == KeyCode::Char('q')
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

/// Translates a key press into menu navigation.
///
/// Key releases and repeats are ignored so a single press never navigates twice.
pub(crate) fn navigation(event: &Event) -> Option<Navigation> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Navigation::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Navigation::Down),
        KeyCode::Enter | KeyCode::Char('l') => Some(Navigation::Select),
        KeyCode::Esc | KeyCode::Char('h') => Some(Navigation::Back),
        _ => None,
    }
}

/// Returns the kind and cell position of a mouse event.
pub(crate) fn mouse(event: &Event) -> Option<(MouseEventKind, Position)> {
    match event {
        Event::Mouse(mouse) => Some((mouse.kind, Position::new(mouse.column, mouse.row))),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEvent, KeyEventState, MouseButton, MouseEvent};

    /// Builds a key press event.
    pub(crate) fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Builds a mouse event at the given cell.
    pub(crate) fn mouse_at(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_navigation_arrows_and_vim_keys() {
        assert_eq!(navigation(&press(KeyCode::Up)), Some(Navigation::Up));
        assert_eq!(navigation(&press(KeyCode::Char('k'))), Some(Navigation::Up));
        assert_eq!(navigation(&press(KeyCode::Down)), Some(Navigation::Down));
        assert_eq!(navigation(&press(KeyCode::Char('j'))), Some(Navigation::Down));
        assert_eq!(navigation(&press(KeyCode::Enter)), Some(Navigation::Select));
        assert_eq!(navigation(&press(KeyCode::Char('l'))), Some(Navigation::Select));
        assert_eq!(navigation(&press(KeyCode::Esc)), Some(Navigation::Back));
        assert_eq!(navigation(&press(KeyCode::Char('h'))), Some(Navigation::Back));
        assert_eq!(navigation(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_navigation_ignores_release() {
        let release = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));

        assert_eq!(navigation(&release), None);
        assert!(!is_quit(&release));
    }

    #[test]
    fn test_is_quit() {
        assert!(is_quit(&press(KeyCode::Char('q'))));
        assert!(is_quit(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ))));
        assert!(!is_quit(&press(KeyCode::Char('c'))));
        assert!(!is_quit(&mouse_at(MouseEventKind::Moved, 0, 0)));
    }

    #[test]
    fn test_mouse_position() {
        let event = mouse_at(MouseEventKind::Down(MouseButton::Left), 12, 7);

        assert_eq!(
            mouse(&event),
            Some((MouseEventKind::Down(MouseButton::Left), Position::new(12, 7)))
        );
        assert_eq!(mouse(&press(KeyCode::Enter)), None);
    }
}
