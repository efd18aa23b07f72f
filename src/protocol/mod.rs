//! Protocol module - wire format, framing, and frame types.
//!
//! This module implements the byte-level half of the protocol:
//! - 4-byte header encoding/decoding and the frame length rule
//! - Byte-at-a-time frame buffer with lead-byte resynchronization
//! - Frame struct with typed accessors

mod frame;
mod frame_buffer;
mod wire_format;

pub use frame::Frame;
pub use frame_buffer::FrameBuffer;
pub use wire_format::{
    build_frame, expected_frame_len, is_lead_byte, Header, HEADER_SIZE, LENGTH_EXT_MASK,
    MARKER_COMMAND, MARKER_EVENT, MAX_PAYLOAD_SIZE, TYPE_MASK,
};
