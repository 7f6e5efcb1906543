//! Screen buffer types
//!
//! Holds the four text rows of the face, each in a fixed 44-byte buffer.

use heapless::String;
use rovas_core::vocab::{LINE_BUFFER_SIZE, MAX_LINE_LEN};
use rovas_core::{WordTime, LINE_COUNT};
use rovas_protocol::{fit_text, LineWeight};

/// Number of text rows on the face
pub const SCREEN_ROWS: usize = LINE_COUNT;

/// One row of text
pub type Line = String<LINE_BUFFER_SIZE>;

/// Text buffer for the four rows of the face
///
/// Rows 0 and 1 (the hour) use the bold face and rows 2 and 3 (the
/// minutes) the light one, unless overridden.
#[derive(Clone)]
pub struct Screen {
    /// Current row content
    lines: [Line; SCREEN_ROWS],
    /// Typeface per row
    weights: [LineWeight; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            weights: core::array::from_fn(|row| LineWeight::for_row(row as u8)),
            dirty: true,
        }
    }

    /// Blank every row
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Set the content of a row
    ///
    /// Text longer than [`MAX_LINE_LEN`] bytes is cut at the last whole
    /// character that fits. Rows past the bottom are ignored.
    pub fn set_line(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear();
            // Cannot fail: fit_text keeps us under capacity
            let _ = line.push_str(fit_text(text, MAX_LINE_LEN));
            self.dirty = true;
        }
    }

    /// Replace every row with the lines of `word_time`
    ///
    /// Rows that are empty in `word_time` end up empty, never holding
    /// text from an earlier reading.
    pub fn show(&mut self, word_time: &WordTime) {
        for (row, text) in word_time.lines().iter().enumerate() {
            self.set_line(row, text);
        }
    }

    /// Get the content of a row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Override the typeface of a row
    pub fn set_weight(&mut self, row: usize, weight: LineWeight) {
        if let Some(slot) = self.weights.get_mut(row) {
            *slot = weight;
            self.dirty = true;
        }
    }

    /// Typeface of a row
    pub fn weight(&self, row: usize) -> Option<LineWeight> {
        self.weights.get(row).copied()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Rows with their typeface, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = (LineWeight, &str)> {
        self.weights
            .iter()
            .copied()
            .zip(self.lines.iter().map(|s| s.as_str()))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, " | ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
