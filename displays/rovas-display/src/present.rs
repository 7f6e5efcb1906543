//! Getting a screen onto a display
//!
//! A screen reaches the glass either through a local [`DisplayBackend`] or
//! as a stream of protocol frames for a display terminal on the other end
//! of a serial link.

use rovas_protocol::{FaceMessage, Frame};

use crate::backend::{DisplayBackend, DisplayError};
use crate::screen::{Screen, SCREEN_ROWS};

/// Draw `screen` on `backend` if it changed since the last call
///
/// Returns true if anything was drawn. The screen stays dirty if drawing
/// fails, so the next call retries.
pub fn present<B: DisplayBackend>(
    screen: &mut Screen,
    backend: &mut B,
) -> Result<bool, DisplayError> {
    if !screen.is_dirty() {
        return Ok(false);
    }
    if !backend.is_ready() {
        return Err(DisplayError::NotInitialized);
    }

    backend.clear()?;
    for (row, (weight, text)) in screen.rows().enumerate() {
        if !text.is_empty() {
            backend.draw_line(row as u8, weight, text)?;
        }
    }
    backend.flush()?;

    screen.mark_clean();
    Ok(true)
}

/// Encode a screen to a series of frames
///
/// Yields a clear frame followed by one line frame per row, empty rows
/// included, so the terminal ends up with exactly this screen.
pub fn encode_screen(screen: &Screen) -> impl Iterator<Item = Frame> + '_ {
    ScreenEncoder { screen, next: None }
}

/// Iterator that encodes a screen into frames
struct ScreenEncoder<'a> {
    screen: &'a Screen,
    /// Next row to send; `None` until the clear frame has gone out
    next: Option<usize>,
}

impl<'a> Iterator for ScreenEncoder<'a> {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.next {
            None => {
                self.next = Some(0);
                return FaceMessage::Clear.to_frame().ok();
            }
            Some(row) if row < SCREEN_ROWS => row,
            Some(_) => return None,
        };
        self.next = Some(row + 1);

        let msg = FaceMessage::Line {
            row: row as u8,
            weight: self.screen.weight(row)?,
            text: self.screen.get_line(row)?,
        };
        msg.to_frame().ok()
    }
}
