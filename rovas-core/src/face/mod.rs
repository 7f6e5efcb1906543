//! Watchface controller
//!
//! Turns clock ticks and button presses into the lines to draw.

pub mod events;
pub mod watchface;

pub use events::FaceEvent;
pub use watchface::Watchface;
