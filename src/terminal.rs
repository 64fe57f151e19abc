//! Terminal mode handling around the game loop.

use std::io::Write;

use color_eyre::eyre::Result;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

/// Runs `body` with mouse capture enabled on `out`.
///
/// Mouse capture is released again whether `body` succeeds or fails, and every error is handed
/// back to the caller instead of returning early, so the caller can always restore the rest of the
/// terminal afterwards. `body` does not run if mouse capture cannot be enabled.
///
/// # Errors
///
/// This function may return errors if:
/// - Mouse capture cannot be enabled or released
/// - `body` returns an error, which takes precedence over a failure to release mouse capture
pub fn with_mouse_capture<W, F>(out: &mut W, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> Result<()>,
{
    execute!(out, EnableMouseCapture)?;
    let result = body();
    let released = execute!(out, DisableMouseCapture);

    result?;
    released?;

    Ok(())
}
