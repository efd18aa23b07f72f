//! Frame buffer for accumulating a partial inbound frame.
//!
//! A byte-at-a-time state machine:
//! - `Idle`: buffer empty, waiting for a valid lead byte (`0xC0`/`0x80`);
//!   any other byte is silently dropped so the stream resynchronizes on
//!   the next valid marker.
//! - `Collecting`: lead byte seen; on the second byte the expected frame
//!   length is computed from the type and length bytes, and bytes are
//!   appended until the buffer reaches it.
//!
//! When the buffer reaches the expected length the frame is split off and
//! the machine resets to `Idle`. There is no internal time-box: a stalled
//! sender leaves the buffer in `Collecting` until a transport-level
//! timeout intervenes.
//!
//! # Example
//!
//! ```
//! use kgwire::protocol::FrameBuffer;
//!
//! let mut buffer = FrameBuffer::new();
//! let frames = buffer.push(&[0xC0, 0x00, 0x01, 0x01]);
//! assert_eq!(frames.len(), 1);
//! assert_eq!(frames[0].class_id(), 1);
//! ```

use bytes::BytesMut;

use super::wire_format::{expected_frame_len, is_lead_byte, Header, HEADER_SIZE};
use super::Frame;

/// Buffer accumulating inbound bytes until a complete frame is present.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    /// Bytes of the in-progress frame.
    buffer: BytesMut,
    /// Total frame length implied by the first two bytes; 0 until the
    /// second byte has been seen.
    expected_length: usize,
}

impl FrameBuffer {
    /// Create a new, empty frame buffer.
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(HEADER_SIZE + super::wire_format::MAX_PAYLOAD_SIZE as usize),
            expected_length: 0,
        }
    }

    /// Feed one byte. Returns a complete frame if this byte finished one.
    pub fn push_byte(&mut self, b: u8) -> Option<Frame> {
        if self.buffer.is_empty() {
            // Resynchronization: drop noise until a valid marker appears.
            if !is_lead_byte(b) {
                return None;
            }
            self.buffer.extend_from_slice(&[b]);
        } else {
            self.buffer.extend_from_slice(&[b]);
            if self.buffer.len() == 2 {
                self.expected_length = expected_frame_len(self.buffer[0], self.buffer[1]);
            }
        }

        if self.expected_length > 0 && self.buffer.len() == self.expected_length {
            let raw = self.buffer.split_to(self.expected_length);
            self.expected_length = 0;
            // expected_length >= HEADER_SIZE, so all four header bytes are present.
            let header = Header::new(raw[0], raw[1], raw[2], raw[3]);
            let payload = raw.freeze().split_off(HEADER_SIZE);
            return Some(Frame::new(header, payload));
        }

        None
    }

    /// Feed a chunk of bytes, returning every frame completed by it.
    ///
    /// Equivalent to calling [`push_byte`](Self::push_byte) for each byte;
    /// parsing is byte-granularity independent.
    pub fn push(&mut self, data: &[u8]) -> Vec<Frame> {
        let mut frames = Vec::new();
        for &b in data {
            if let Some(frame) = self.push_byte(b) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Number of bytes held for the in-progress frame.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no frame is in progress.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discard any in-progress frame and reset to idle.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.expected_length = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PING_COMMAND: &[u8] = &[0xC0, 0x00, 0x01, 0x01];
    const PING_RESPONSE: &[u8] = &[0xC0, 0x04, 0x01, 0x01, 0x2A, 0x00, 0x00, 0x00];

    #[test]
    fn test_zero_payload_frame() {
        let mut buffer = FrameBuffer::new();
        let frames = buffer.push(PING_COMMAND);

        assert_eq!(frames.len(), 1);
        let frame = &frames[0];
        assert_eq!(frame.header.message_type, 0xC0);
        assert_eq!(frame.header.length, 0);
        assert_eq!(frame.class_id(), 1);
        assert_eq!(frame.command_id(), 1);
        assert!(frame.payload().is_empty());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_frame_with_payload() {
        let mut buffer = FrameBuffer::new();
        let frames = buffer.push(PING_RESPONSE);

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload(), &[0x2A, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_byte_at_a_time_matches_all_at_once() {
        let mut all_at_once = FrameBuffer::new();
        let bulk = all_at_once.push(PING_RESPONSE);

        let mut one_by_one = FrameBuffer::new();
        let mut single = Vec::new();
        for &b in PING_RESPONSE {
            single.extend(one_by_one.push_byte(b));
        }

        assert_eq!(bulk.len(), 1);
        assert_eq!(single.len(), 1);
        assert_eq!(bulk[0].header, single[0].header);
        assert_eq!(bulk[0].payload(), single[0].payload());
    }

    #[test]
    fn test_noise_dropped_until_lead_byte() {
        let mut buffer = FrameBuffer::new();
        let mut stream = vec![0x00, 0xFF, 0x42, 0x7F];
        stream.extend_from_slice(PING_COMMAND);

        let frames = buffer.push(&stream);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].class_id(), 1);
    }

    #[test]
    fn test_pure_noise_stays_idle() {
        let mut buffer = FrameBuffer::new();
        let frames = buffer.push(&[0x01, 0x02, 0x03, 0xFE]);
        assert!(frames.is_empty());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_back_to_back_frames() {
        let mut buffer = FrameBuffer::new();
        let mut stream = PING_RESPONSE.to_vec();
        stream.extend_from_slice(&[0x80, 0x01, 0x02, 0x01, 0x03]); // touch mode event

        let frames = buffer.push(&stream);
        assert_eq!(frames.len(), 2);
        assert!(frames[0].is_command_or_response());
        assert!(frames[1].is_event());
        assert_eq!(frames[1].payload(), &[0x03]);
    }

    #[test]
    fn test_partial_frame_held_across_pushes() {
        let mut buffer = FrameBuffer::new();

        assert!(buffer.push(&PING_RESPONSE[..3]).is_empty());
        assert_eq!(buffer.len(), 3);

        let frames = buffer.push(&PING_RESPONSE[3..]);
        assert_eq!(frames.len(), 1);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_extended_marker_bytes_dropped_in_idle() {
        // Only the exact markers 0xC0 and 0x80 open a frame; bytes with the
        // low length-extension bits set are noise while idle.
        let mut buffer = FrameBuffer::new();
        for b in [0xC1, 0xC2, 0xC7, 0x81, 0x87] {
            assert!(buffer.push_byte(b).is_none());
            assert!(buffer.is_empty());
        }

        // The buffer still locks onto the next exact marker.
        let frames = buffer.push(&[0xC3, 0xC0, 0x00, 0x01, 0x01]);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].class_id(), 1);
    }

    #[test]
    fn test_event_payload_collects_marker_like_bytes() {
        // Once collecting, bytes equal to a marker are plain payload.
        let stream = [0x80, 0x02, 0x04, 0x02, 0xC0, 0x80];
        let mut buffer = FrameBuffer::new();
        let frames = buffer.push(&stream);

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload(), &[0xC0, 0x80]);
    }

    #[test]
    fn test_clear_resets_in_progress_frame() {
        let mut buffer = FrameBuffer::new();
        buffer.push(&PING_RESPONSE[..5]);
        assert!(!buffer.is_empty());

        buffer.clear();
        assert!(buffer.is_empty());

        // A fresh frame parses normally afterwards.
        let frames = buffer.push(PING_COMMAND);
        assert_eq!(frames.len(), 1);
    }
}
