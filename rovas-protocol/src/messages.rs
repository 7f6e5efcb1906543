//! Message types for the face/display link
//!
//! - Display → Face: button events, heartbeat requests
//! - Face → Display: line updates, heartbeat responses

use crate::events::InputEvent;
use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use heapless::Vec;

// Message type IDs: Display → Face
pub const MSG_INPUT: u8 = 0x01;
pub const MSG_PING: u8 = 0x02;

// Message type IDs: Face → Display
pub const MSG_CLEAR: u8 = 0x20;
pub const MSG_LINE: u8 = 0x21;
pub const MSG_PONG: u8 = 0x24;

/// Number of text rows on the watchface
pub const FACE_ROWS: u8 = 4;

/// Largest line the display accepts, in bytes (44-byte buffer minus terminator)
pub const MAX_TEXT_LEN: usize = 43;

/// Typeface weight for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineWeight {
    /// Large face used for the hour rows
    #[default]
    Bold,
    /// Smaller face used for the minute rows
    Light,
}

impl LineWeight {
    /// Default weight for a row: hour rows bold, minute rows light
    pub fn for_row(row: u8) -> Self {
        if row < 2 {
            LineWeight::Bold
        } else {
            LineWeight::Light
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            LineWeight::Bold => 0,
            LineWeight::Light => 1,
        }
    }

    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(LineWeight::Bold),
            1 => Some(LineWeight::Light),
            _ => None,
        }
    }
}

/// Longest prefix of `text` that fits in `max` bytes without splitting a character
pub fn fit_text(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Messages from the face controller to the display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceMessage<'a> {
    /// Blank every row
    Clear,
    /// Replace the content of one row
    Line {
        row: u8,
        weight: LineWeight,
        text: &'a str,
    },
    /// Heartbeat response
    Pong,
}

impl<'a> FaceMessage<'a> {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            FaceMessage::Clear => Ok(Frame::empty(MSG_CLEAR)),
            FaceMessage::Line { row, weight, text } => {
                if *row >= FACE_ROWS {
                    return Err(FrameError::InvalidFrame);
                }
                // Payload: [row][weight][len][utf-8 bytes...]
                let text = fit_text(text, MAX_TEXT_LEN);

                let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();
                payload
                    .extend_from_slice(&[*row, weight.to_byte(), text.len() as u8])
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(text.as_bytes())
                    .map_err(|_| FrameError::PayloadTooLarge)?;

                Frame::new(MSG_LINE, &payload)
            }
            FaceMessage::Pong => Ok(Frame::empty(MSG_PONG)),
        }
    }

    /// Parse a message from a frame (display side)
    ///
    /// Line text borrows from the frame payload.
    pub fn from_frame(frame: &'a Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_CLEAR => Ok(FaceMessage::Clear),
            MSG_LINE => {
                if frame.payload.len() < 3 {
                    return Err(FrameError::InvalidFrame);
                }
                let (header, body) = frame.payload.split_at(3);
                let (row, weight, len) = (header[0], header[1], header[2]);
                if row >= FACE_ROWS || len as usize != body.len() {
                    return Err(FrameError::InvalidFrame);
                }
                let weight = LineWeight::from_byte(weight).ok_or(FrameError::InvalidFrame)?;
                let text = core::str::from_utf8(body).map_err(|_| FrameError::InvalidFrame)?;
                Ok(FaceMessage::Line { row, weight, text })
            }
            MSG_PONG => Ok(FaceMessage::Pong),
            _ => Err(FrameError::InvalidFrame),
        }
    }
}

/// Commands parsed from display-originated frames
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand {
    /// Button event
    Input(InputEvent),
    /// Heartbeat request
    Ping,
}

impl DisplayCommand {
    /// Parse a command from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match (frame.msg_type, frame.payload.first()) {
            (MSG_INPUT, Some(&byte)) => InputEvent::from_byte(byte)
                .map(DisplayCommand::Input)
                .ok_or(FrameError::InvalidFrame),
            (MSG_PING, _) => Ok(DisplayCommand::Ping),
            _ => Err(FrameError::InvalidFrame),
        }
    }

    /// Encode this command into a frame (display side, or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            DisplayCommand::Input(event) => Frame::new(MSG_INPUT, &[event.to_byte()]),
            DisplayCommand::Ping => Ok(Frame::empty(MSG_PING)),
        }
    }
}
