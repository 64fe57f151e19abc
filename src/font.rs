//! Terminal font metrics for large menu labels.
//!
//! A terminal cannot scale glyphs, so a font here is a point size translated into cell metrics: a
//! label of a larger font occupies more rows and spreads its letters over more columns. Layout and
//! mouse hit-testing both go through [`Font::layout`] so the two always agree.

use ratatui::{layout::Rect, style::Modifier};
use tracing::debug;

/// Point size of the main menu font.
pub(crate) const DEFAULT_SIZE: u16 = 74;

/// Point size that maps to a single terminal row; also the size of the plain font.
const POINTS_PER_ROW: u16 = 24;

/// Empty rows between two consecutive labels.
const GAP_ROWS: u16 = 1;

/// Font described by its point size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Font {
    /// Requested point size.
    ///
    /// This field holds the size every cell metric of the font is derived from.
    size: u16,
}

impl Default for Font {
    fn default() -> Self {
        Self::get(DEFAULT_SIZE)
    }
}

impl Font {
    /// Resolves the font for the requested point size.
    pub(crate) const fn get(size: u16) -> Self {
        Self { size }
    }

    /// The plain font: one row high, no letter spacing.
    pub(crate) const fn plain() -> Self {
        Self::get(POINTS_PER_ROW)
    }

    /// Returns the number of rows a label occupies, at least one.
    pub(crate) fn line_height(self) -> u16 {
        let rows = rounded_div::i32(i32::from(self.size), i32::from(POINTS_PER_ROW));

        u16::try_from(rows).unwrap_or(u16::MAX).max(1)
    }

    /// Returns the number of blank columns inserted between two letters.
    pub(crate) fn letter_spacing(self) -> u16 {
        self.line_height() - 1
    }

    /// Returns the text modifier matching the font's weight.
    pub(crate) fn modifier(self) -> Modifier {
        if self.line_height() > 1 {
            Modifier::BOLD
        } else {
            Modifier::empty()
        }
    }

    /// Returns the number of columns `label` occupies once spaced.
    pub(crate) fn text_width(self, label: &str) -> u16 {
        let letters = label.chars().count();
        let spacing = usize::from(self.letter_spacing());
        let width = letters
            .saturating_mul(spacing + 1)
            .saturating_sub(spacing);

        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// Returns `label` with the font's letter spacing applied.
    pub(crate) fn spaced(self, label: &str) -> String {
        let gap = " ".repeat(usize::from(self.letter_spacing()));
        let letters: Vec<String> = label.chars().map(String::from).collect();

        letters.join(&gap)
    }

    /// Returns the number of rows a column of `count` labels occupies.
    pub(crate) fn block_height(self, count: usize) -> u16 {
        let count = u16::try_from(count).unwrap_or(u16::MAX);

        count
            .saturating_mul(self.line_height())
            .saturating_add(count.saturating_sub(1).saturating_mul(GAP_ROWS))
    }

    /// Returns this font if `labels` fit in `area`, or the plain font otherwise.
    pub(crate) fn fit(self, area: Rect, labels: &[&str]) -> Self {
        let widest = labels
            .iter()
            .map(|label| self.text_width(label))
            .max()
            .unwrap_or(0);

        if widest <= area.width && self.block_height(labels.len()) <= area.height {
            self
        } else {
            debug!(
                size = self.size,
                width = area.width,
                height = area.height,
                "labels do not fit the screen, using the plain font"
            );
            Self::plain()
        }
    }

    /// Lays out `labels` as a column centred in `area`.
    ///
    /// Each label gets a rectangle as wide as its spaced text and as high as a line of the font;
    /// rectangles are clipped to `area`.
    pub(crate) fn layout(self, area: Rect, labels: &[&str]) -> Vec<Rect> {
        let line_height = self.line_height();
        let top = area
            .y
            .saturating_add(area.height.saturating_sub(self.block_height(labels.len())) / 2);

        labels
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let width = self.text_width(label).min(area.width);
                let left = area.x + (area.width - width) / 2;
                let offset = u16::try_from(idx)
                    .unwrap_or(u16::MAX)
                    .saturating_mul(line_height + GAP_ROWS);

                Rect::new(left, top.saturating_add(offset), width, line_height).intersection(area)
            })
            .collect()
    }
}
