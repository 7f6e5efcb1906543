//! Frame encoding and decoding for the face/display link.
//!
//! Frame format:
//! - START (1 byte): 0xA5 synchronization byte
//! - LENGTH (1 byte): payload length (0-64)
//! - TYPE (1 byte): message type identifier
//! - PAYLOAD (0-64 bytes): type-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, TYPE, and all PAYLOAD bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xA5;

/// Maximum payload size in bytes
///
/// Large enough for a line message: row, weight, length, and a full line.
pub const MAX_PAYLOAD_SIZE: usize = 64;

/// Bytes surrounding the payload (START, LENGTH, TYPE, CHECKSUM)
const FRAME_OVERHEAD: usize = 4;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = FRAME_OVERHEAD + MAX_PAYLOAD_SIZE;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    InvalidChecksum,
    /// Invalid frame structure or unknown message
    InvalidFrame,
    /// Output buffer too small for encoding
    BufferTooSmall,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub msg_type: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

fn checksum(msg_type: u8, payload: &[u8]) -> u8 {
    payload
        .iter()
        .fold(payload.len() as u8 ^ msg_type, |acc, &byte| acc ^ byte)
}

impl Frame {
    /// Create a new frame with the given message type and payload
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { msg_type, payload })
    }

    /// Create a frame with no payload
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    /// Number of bytes this frame occupies on the wire
    pub fn wire_len(&self) -> usize {
        FRAME_OVERHEAD + self.payload.len()
    }

    /// Encode this frame into `buffer`, returning the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let len = self.wire_len();
        let out = buffer.get_mut(..len).ok_or(FrameError::BufferTooSmall)?;

        let (header, rest) = out.split_at_mut(3);
        header.copy_from_slice(&[FRAME_START, self.payload.len() as u8, self.msg_type]);
        let (body, tail) = rest.split_at_mut(self.payload.len());
        body.copy_from_slice(&self.payload);
        tail[0] = checksum(self.msg_type, &self.payload);

        Ok(len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut bytes = Vec::new();
        bytes
            .resize(self.wire_len(), 0)
            .map_err(|_| FrameError::BufferTooSmall)?;
        self.encode(&mut bytes)?;
        Ok(bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Sync,
    Length,
    Type { len: u8 },
    Payload { len: u8 },
    Checksum,
}

/// Byte-at-a-time frame parser
///
/// Bytes seen before a START byte are dropped, so the parser recovers from
/// line noise and from joining a stream mid-frame.
#[derive(Debug, Clone)]
pub struct FrameParser {
    phase: Phase,
    msg_type: u8,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self {
            phase: Phase::Sync,
            msg_type: 0,
            payload: Vec::new(),
        }
    }

    /// Drop any partially received frame
    pub fn reset(&mut self) {
        self.phase = Phase::Sync;
        self.msg_type = 0;
        self.payload.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on a corrupt frame.
    /// The parser is reset after every error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.phase {
            Phase::Sync => {
                if byte == FRAME_START {
                    self.phase = Phase::Length;
                }
            }
            Phase::Length => {
                // A repeated START can't be a length (0xA5 > 64): treat it as
                // the start of the real frame
                if byte == FRAME_START {
                    return Ok(None);
                }
                if byte as usize > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::InvalidFrame);
                }
                self.phase = Phase::Type { len: byte };
            }
            Phase::Type { len } => {
                self.msg_type = byte;
                self.payload.clear();
                self.phase = if len == 0 {
                    Phase::Checksum
                } else {
                    Phase::Payload { len }
                };
            }
            Phase::Payload { len } => {
                // Length was bounded in Phase::Length, so this cannot overflow
                let _ = self.payload.push(byte);
                if self.payload.len() == len as usize {
                    self.phase = Phase::Checksum;
                }
            }
            Phase::Checksum => {
                let valid = byte == checksum(self.msg_type, &self.payload);
                let frame = Frame {
                    msg_type: self.msg_type,
                    payload: core::mem::take(&mut self.payload),
                };
                self.reset();
                return if valid {
                    Ok(Some(frame))
                } else {
                    Err(FrameError::InvalidChecksum)
                };
            }
        }
        Ok(None)
    }

    /// Feed bytes until the first complete frame
    ///
    /// Bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}
