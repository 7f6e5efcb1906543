//! Display abstraction for the Rovas word-clock face
//!
//! This crate provides:
//! - `Screen`, the four-row text buffer the face draws into
//! - `DisplayBackend` trait for whatever actually owns the glass
//! - `present` / `encode_screen` to push a screen to a local backend or
//!   to a display terminal over the serial protocol
//! - `FaceLink`, the face side of that serial link
//!
//! # Architecture
//!
//! The face controller in `rovas-core` decides *what* to show. This crate
//! only moves those rows to a display:
//!
//! - **Direct displays**: the host implements `DisplayBackend` over its own
//!   text layers and calls `present` after each update.
//!
//! - **External displays**: a terminal MCU receives `FaceMessage` frames
//!   from `encode_screen` over UART and draws them locally. `FaceLink`
//!   runs the controller side: it feeds button frames to the face and
//!   answers heartbeats.

#![no_std]

pub mod backend;
pub mod link;
pub mod present;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use link::FaceLink;
pub use present::{encode_screen, present};
pub use rovas_protocol::LineWeight;
pub use screen::{Line, Screen, SCREEN_ROWS};
