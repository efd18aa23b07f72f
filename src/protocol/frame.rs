//! Frame struct with typed accessors.
//!
//! Represents a complete wire frame with header and payload.
//! Uses `bytes::Bytes` for zero-copy payload sharing.
//!
//! # Example
//!
//! ```
//! use kgwire::protocol::{Frame, Header, MARKER_COMMAND};
//! use bytes::Bytes;
//!
//! let header = Header::new(MARKER_COMMAND, 4, 1, 1);
//! let payload = Bytes::from_static(&[0x2A, 0x00, 0x00, 0x00]);
//! let frame = Frame::new(header, payload);
//!
//! assert_eq!(frame.class_id(), 1);
//! assert_eq!(frame.payload(), &[0x2A, 0x00, 0x00, 0x00]);
//! ```

use bytes::Bytes;

use super::wire_format::Header;

/// A complete protocol frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Decoded header.
    pub header: Header,
    /// Payload bytes (zero-copy via `bytes::Bytes`).
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame from header and payload.
    pub fn new(header: Header, payload: Bytes) -> Self {
        Self { header, payload }
    }

    /// Create a frame from header and raw bytes (copies data).
    pub fn from_parts(header: Header, payload: &[u8]) -> Self {
        Self {
            header,
            payload: Bytes::copy_from_slice(payload),
        }
    }

    /// Get a reference to the payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Get the payload length.
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// Get the packet class ID.
    #[inline]
    pub fn class_id(&self) -> u8 {
        self.header.class_id
    }

    /// Get the command ID.
    #[inline]
    pub fn command_id(&self) -> u8 {
        self.header.command_id
    }

    /// Check if this is a command/response frame.
    #[inline]
    pub fn is_command_or_response(&self) -> bool {
        self.header.is_command_or_response()
    }

    /// Check if this is an event frame.
    #[inline]
    pub fn is_event(&self) -> bool {
        self.header.is_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::wire_format::{MARKER_COMMAND, MARKER_EVENT};

    #[test]
    fn test_frame_creation() {
        let header = Header::new(MARKER_COMMAND, 2, 1, 2);
        let frame = Frame::new(header, Bytes::from_static(&[0x00, 0x00]));

        assert_eq!(frame.class_id(), 1);
        assert_eq!(frame.command_id(), 2);
        assert_eq!(frame.payload_len(), 2);
        assert!(frame.is_command_or_response());
        assert!(!frame.is_event());
    }

    #[test]
    fn test_frame_from_parts() {
        let header = Header::new(MARKER_EVENT, 1, 2, 1);
        let frame = Frame::from_parts(header, &[0x07]);

        assert!(frame.is_event());
        assert_eq!(frame.payload(), &[0x07]);
    }

    #[test]
    fn test_frame_empty_payload() {
        let header = Header::new(MARKER_EVENT, 0, 1, 1);
        let frame = Frame::new(header, Bytes::new());

        assert_eq!(frame.payload_len(), 0);
        assert!(frame.payload().is_empty());
    }
}
