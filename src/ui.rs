//! Rendering helpers shared by the scenes.

use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Clear},
    Frame,
};

/// Colour of regular text.
pub(crate) const TEXT_COLOR: Color = Color::White;
/// Colour of the selected entry.
pub(crate) const SELECTED_COLOR: Color = Color::Yellow;
/// Colour every scene is drawn on.
pub(crate) const BACKGROUND_COLOR: Color = Color::Black;
/// Colour of the key hints at the bottom of the screen.
const HINT_COLOR: Color = Color::DarkGray;
/// Width of the panels drawn by [`panel`], borders included.
const PANEL_WIDTH: u16 = 36;

/// Clears the frame and paints the background colour over it.
///
/// This removes artifacts from previous buffers rendered on the same frame before a scene draws.
pub(crate) fn clear(frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(BACKGROUND_COLOR)),
        area,
    );
}

/// Splits `area` into the scene's content and the bottom row reserved for key hints.
pub(crate) fn split_hint(area: Rect) -> (Rect, Rect) {
    let [content, hint] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    (content, hint)
}

/// Renders a centred key hint in `area`.
pub(crate) fn hint(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Line::styled(text, Style::default().fg(HINT_COLOR)).centered(),
        area,
    );
}

/// Renders a titled, bordered panel centred in `area` and returns one rect per content row.
///
/// The panel is as high as `rows` plus its borders; scenes render their lines into the returned
/// rows.
pub(crate) fn panel(frame: &mut Frame, area: Rect, title: &str, rows: u16) -> Rc<[Rect]> {
    let [column] = Layout::horizontal([Constraint::Length(PANEL_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [space] = Layout::vertical([Constraint::Length(rows.saturating_add(2))])
        .flex(Flex::Center)
        .areas(column);

    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_COLOR).bg(BACKGROUND_COLOR))
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(space);

    frame.render_widget(block, space);

    Layout::vertical(vec![Constraint::Length(1); usize::from(rows)]).split(inner_space)
}

/// Returns the style of an entry, highlighted when `selected`.
pub(crate) fn entry_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(SELECTED_COLOR)
    } else {
        Style::default().fg(TEXT_COLOR)
    }
}
