//! Face/display link protocol
//!
//! Defines the serial protocol between the word-clock face controller and a
//! display terminal that owns the screen and the buttons. The terminal only
//! draws what it is told and reports button presses; the time-to-words logic
//! stays on the controller side.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–64B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod events;
pub mod frame;
pub mod messages;

pub use events::InputEvent;
pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use messages::{fit_text, DisplayCommand, FaceMessage, LineWeight, FACE_ROWS, MAX_TEXT_LEN};
