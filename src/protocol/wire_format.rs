//! Wire format encoding and decoding.
//!
//! Implements the 4-byte Keyglove header format:
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │ Type     │ Length   │ Class ID │ Cmd ID   │
//! │ 1 byte   │ 1 byte   │ 1 byte   │ 1 byte   │
//! └──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! followed by `Length` payload bytes. All multi-byte payload fields are
//! Little Endian. The top two bits of the type byte select the frame
//! direction (`0xC0` = command/response, `0x80` = event); the low three
//! bits extend the length byte for payloads beyond a single byte's range.

use crate::error::{KgError, Result};

/// Header size in bytes (fixed, exactly 4).
pub const HEADER_SIZE: usize = 4;

/// Type byte marking a command or response frame.
pub const MARKER_COMMAND: u8 = 0xC0;

/// Type byte marking an event frame.
pub const MARKER_EVENT: u8 = 0x80;

/// Mask selecting the direction bits of the type byte.
pub const TYPE_MASK: u8 = 0xC0;

/// Mask selecting the extended-length bits of the type byte.
pub const LENGTH_EXT_MASK: u8 = 0x07;

/// Nominal maximum payload length.
pub const MAX_PAYLOAD_SIZE: u8 = 250;

/// Compute the total expected frame length from the first two header bytes.
///
/// The low three bits of the type byte contribute to the length alongside
/// the explicit length byte, extending the encodable payload range.
///
/// # Example
///
/// ```
/// use kgwire::protocol::expected_frame_len;
///
/// assert_eq!(expected_frame_len(0xC0, 0x00), 4);
/// assert_eq!(expected_frame_len(0xC0, 0x04), 8);
/// assert_eq!(expected_frame_len(0xC1, 0x04), 9);
/// ```
#[inline]
pub fn expected_frame_len(type_byte: u8, length_byte: u8) -> usize {
    HEADER_SIZE + (type_byte & LENGTH_EXT_MASK) as usize + length_byte as usize
}

/// Decoded header from wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Type byte (direction bits + extended-length bits).
    pub message_type: u8,
    /// Payload length byte.
    pub length: u8,
    /// Packet class (System, Touch, Feedback, Motion, Protocol).
    pub class_id: u8,
    /// Operation within the class.
    pub command_id: u8,
}

impl Header {
    /// Create a new header.
    pub fn new(message_type: u8, length: u8, class_id: u8, command_id: u8) -> Self {
        Self {
            message_type,
            length,
            class_id,
            command_id,
        }
    }

    /// Encode header to its 4 wire bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use kgwire::protocol::{Header, MARKER_COMMAND};
    ///
    /// let header = Header::new(MARKER_COMMAND, 0, 1, 1);
    /// assert_eq!(header.encode(), [0xC0, 0x00, 0x01, 0x01]);
    /// ```
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        [self.message_type, self.length, self.class_id, self.command_id]
    }

    /// Decode header from bytes.
    ///
    /// Returns `None` if the buffer is too short.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < HEADER_SIZE {
            return None;
        }
        Some(Self {
            message_type: buf[0],
            length: buf[1],
            class_id: buf[2],
            command_id: buf[3],
        })
    }

    /// Validate the header for protocol compliance.
    ///
    /// Checks the direction bits name a known frame kind and the nominal
    /// payload ceiling is respected.
    pub fn validate(&self) -> Result<()> {
        if !self.is_command_or_response() && !self.is_event() {
            return Err(KgError::Protocol(format!(
                "Invalid type byte {:#04X}",
                self.message_type
            )));
        }
        if self.length > MAX_PAYLOAD_SIZE {
            return Err(KgError::Protocol(format!(
                "Payload length {} exceeds maximum {}",
                self.length, MAX_PAYLOAD_SIZE
            )));
        }
        Ok(())
    }

    /// Total frame length implied by this header.
    #[inline]
    pub fn frame_len(&self) -> usize {
        expected_frame_len(self.message_type, self.length)
    }

    /// Payload length implied by this header (including extended bits).
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.frame_len() - HEADER_SIZE
    }

    /// Check if this is a command/response frame.
    #[inline]
    pub fn is_command_or_response(&self) -> bool {
        self.message_type & TYPE_MASK == MARKER_COMMAND
    }

    /// Check if this is an event frame.
    #[inline]
    pub fn is_event(&self) -> bool {
        self.message_type & TYPE_MASK == MARKER_EVENT
    }
}

/// Check whether a byte is a valid frame lead byte.
///
/// Only the exact markers start a frame; anything else seen between
/// frames is noise to be discarded.
#[inline]
pub fn is_lead_byte(b: u8) -> bool {
    b == MARKER_COMMAND || b == MARKER_EVENT
}

/// Build a complete frame as a single byte vector.
///
/// Encodes the header and appends the payload into a contiguous buffer.
///
/// # Example
///
/// ```
/// use kgwire::protocol::{build_frame, Header, MARKER_COMMAND};
///
/// let header = Header::new(MARKER_COMMAND, 1, 2, 2);
/// let bytes = build_frame(&header, &[0x03]);
/// assert_eq!(bytes, vec![0xC0, 0x01, 0x02, 0x02, 0x03]);
/// ```
pub fn build_frame(header: &Header, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
    buf.extend_from_slice(&header.encode());
    buf.extend_from_slice(payload);
    buf
}
