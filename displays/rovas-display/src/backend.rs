//! Display backend trait
//!
//! Defines the interface the face draws through. The backend owns fonts,
//! alignment and colours; the face only says which text goes on which row
//! and in which weight.

use rovas_protocol::LineWeight;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Backend could not reach the display; returned by backends from any
    /// drawing call and passed through by [`present`](crate::present)
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for showing the face's rows.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw one row of text
    ///
    /// - `row`: Row number (0-based)
    /// - `weight`: Typeface for the row
    /// - `text`: Text to display; may be empty
    fn draw_line(&mut self, row: u8, weight: LineWeight, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
