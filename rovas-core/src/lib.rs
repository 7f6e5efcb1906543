//! Core logic for the Rovas word-clock face
//!
//! Spells a 24-hour time as four lines of words for a small screen. The
//! crate has no knowledge of the screen or the clock hardware:
//!
//! - Word tables and the time-to-words encoder
//! - Validated clock times and the host time source trait
//! - Debug clock stepped by buttons
//! - Watchface controller driven by ticks and button events
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod debug;
pub mod encoder;
pub mod face;
pub mod time;
pub mod vocab;

pub use encoder::{encode, WordTime, LINE_COUNT};
pub use time::{ClockTime, FixedTime, TimeError, TimeSource};
