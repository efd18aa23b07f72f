//! Inbound message decoding (and symmetric encoding).
//!
//! Responses and device events are decoded from their payload bytes by a
//! static descriptor table keyed on (class, command), built once at
//! compile time instead of nested conditionals. Fields are fixed-width
//! little-endian values read by position; a variable-length trailing
//! field consumes all bytes after the fixed prefix.
//!
//! Encoding the device → host direction is also provided so a simulated
//! device (tests, loopback transport) can produce bit-exact frames.
//!
//! # Example
//!
//! ```
//! use kgwire::codec::Response;
//!
//! let rsp = Response::decode(1, 1, &[0x2A, 0x00, 0x00, 0x00]).unwrap();
//! assert_eq!(rsp, Response::SystemPing { runtime: 42 });
//! ```

use bytes::Bytes;

use super::command::class;
use crate::error::{KgError, Result};
use crate::protocol::{build_frame, Header, MARKER_COMMAND, MARKER_EVENT, MAX_PAYLOAD_SIZE};

/// The length byte is a single wire byte; refuse anything it cannot
/// represent instead of truncating modulo 256.
fn checked_length(payload: &[u8]) -> Result<u8> {
    if payload.len() > MAX_PAYLOAD_SIZE as usize {
        return Err(KgError::Protocol(format!(
            "Payload length {} exceeds maximum {}",
            payload.len(),
            MAX_PAYLOAD_SIZE
        )));
    }
    Ok(payload.len() as u8)
}

/// Positional reader over a payload slice.
///
/// Decoders are public API, so short payloads surface as
/// [`KgError::Protocol`] rather than a panic; frames delivered by the
/// frame buffer always carry the exact length.
struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.buf.len() - self.pos < n {
            return Err(KgError::Protocol(format!(
                "Truncated payload: need {} bytes at offset {}, have {}",
                n,
                self.pos,
                self.buf.len() - self.pos
            )));
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16_le(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn u32_le(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// All bytes after the fixed-width prefix.
    fn rest(&mut self) -> Bytes {
        let out = Bytes::copy_from_slice(&self.buf[self.pos..]);
        self.pos = self.buf.len();
        out
    }
}

/// A decoded device → host response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    SystemPing { runtime: u32 },
    SystemReset { result: u16 },
    TouchGetMode { mode: u8 },
    TouchSetMode { result: u16 },
    FeedbackGetBlinkMode { mode: u8 },
    FeedbackSetBlinkMode { result: u16 },
    FeedbackGetPiezoMode { mode: u8, duration: u8, frequency: u16 },
    FeedbackSetPiezoMode { result: u16 },
    FeedbackGetVibeMode { mode: u8, duration: u8 },
    FeedbackSetVibeMode { result: u16 },
    FeedbackGetRgbMode { red: u8, green: u8, blue: u8 },
    FeedbackSetRgbMode { result: u16 },
    MotionGetMode { mode: u8 },
    MotionSetMode { result: u16 },
}

/// A decoded asynchronous device event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    ProtocolError { code: u16 },
    SystemBoot,
    SystemReady,
    SystemError { code: u16 },
    TouchMode { mode: u8 },
    /// Note: the wire payload carries a leading declared-length byte, but
    /// `status` is all bytes after it, never truncated to that value.
    TouchStatus { status: Bytes },
    FeedbackBlinkMode { mode: u8 },
    FeedbackPiezoMode { index: u8, mode: u8, duration: u8, frequency: u16 },
    FeedbackVibeMode { index: u8, mode: u8, duration: u8 },
    FeedbackRgbMode { index: u8, red: u8, green: u8, blue: u8 },
    MotionMode { index: u8, mode: u8 },
    /// Note: `data` is all bytes after the three-byte prefix; the declared
    /// `data_len` byte is consumed but not used as a bound.
    MotionData { index: u8, flags: u8, data: Bytes },
}

/// Decode descriptor: one entry per supported (class, command) pair.
struct Descriptor<T> {
    class_id: u8,
    command_id: u8,
    decode: fn(&mut FieldReader<'_>) -> Result<T>,
}

fn lookup<T>(table: &'static [Descriptor<T>], class_id: u8, command_id: u8) -> Option<&'static Descriptor<T>> {
    table
        .iter()
        .find(|d| d.class_id == class_id && d.command_id == command_id)
}

static RESPONSE_TABLE: &[Descriptor<Response>] = &[
    Descriptor {
        class_id: class::SYSTEM,
        command_id: 1,
        decode: |r| Ok(Response::SystemPing { runtime: r.u32_le()? }),
    },
    Descriptor {
        class_id: class::SYSTEM,
        command_id: 2,
        decode: |r| Ok(Response::SystemReset { result: r.u16_le()? }),
    },
    Descriptor {
        class_id: class::TOUCH,
        command_id: 1,
        decode: |r| Ok(Response::TouchGetMode { mode: r.u8()? }),
    },
    Descriptor {
        class_id: class::TOUCH,
        command_id: 2,
        decode: |r| Ok(Response::TouchSetMode { result: r.u16_le()? }),
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 1,
        decode: |r| Ok(Response::FeedbackGetBlinkMode { mode: r.u8()? }),
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 2,
        decode: |r| Ok(Response::FeedbackSetBlinkMode { result: r.u16_le()? }),
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 3,
        decode: |r| {
            Ok(Response::FeedbackGetPiezoMode {
                mode: r.u8()?,
                duration: r.u8()?,
                frequency: r.u16_le()?,
            })
        },
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 4,
        decode: |r| Ok(Response::FeedbackSetPiezoMode { result: r.u16_le()? }),
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 5,
        decode: |r| {
            Ok(Response::FeedbackGetVibeMode {
                mode: r.u8()?,
                duration: r.u8()?,
            })
        },
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 6,
        decode: |r| Ok(Response::FeedbackSetVibeMode { result: r.u16_le()? }),
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 7,
        decode: |r| {
            Ok(Response::FeedbackGetRgbMode {
                red: r.u8()?,
                green: r.u8()?,
                blue: r.u8()?,
            })
        },
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 8,
        decode: |r| Ok(Response::FeedbackSetRgbMode { result: r.u16_le()? }),
    },
    Descriptor {
        class_id: class::MOTION,
        command_id: 1,
        decode: |r| Ok(Response::MotionGetMode { mode: r.u8()? }),
    },
    Descriptor {
        class_id: class::MOTION,
        command_id: 2,
        decode: |r| Ok(Response::MotionSetMode { result: r.u16_le()? }),
    },
];

static EVENT_TABLE: &[Descriptor<DeviceEvent>] = &[
    Descriptor {
        class_id: class::PROTOCOL,
        command_id: 1,
        decode: |r| Ok(DeviceEvent::ProtocolError { code: r.u16_le()? }),
    },
    Descriptor {
        class_id: class::SYSTEM,
        command_id: 1,
        decode: |_| Ok(DeviceEvent::SystemBoot),
    },
    Descriptor {
        class_id: class::SYSTEM,
        command_id: 2,
        decode: |_| Ok(DeviceEvent::SystemReady),
    },
    Descriptor {
        class_id: class::SYSTEM,
        command_id: 3,
        decode: |r| Ok(DeviceEvent::SystemError { code: r.u16_le()? }),
    },
    Descriptor {
        class_id: class::TOUCH,
        command_id: 1,
        decode: |r| Ok(DeviceEvent::TouchMode { mode: r.u8()? }),
    },
    Descriptor {
        class_id: class::TOUCH,
        command_id: 2,
        decode: |r| {
            // The declared length byte is consumed but the trailing field
            // is everything that remains; firmware does not bound it.
            let _declared_len = r.u8()?;
            Ok(DeviceEvent::TouchStatus { status: r.rest() })
        },
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 1,
        decode: |r| Ok(DeviceEvent::FeedbackBlinkMode { mode: r.u8()? }),
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 2,
        decode: |r| {
            Ok(DeviceEvent::FeedbackPiezoMode {
                index: r.u8()?,
                mode: r.u8()?,
                duration: r.u8()?,
                frequency: r.u16_le()?,
            })
        },
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 3,
        decode: |r| {
            Ok(DeviceEvent::FeedbackVibeMode {
                index: r.u8()?,
                mode: r.u8()?,
                duration: r.u8()?,
            })
        },
    },
    Descriptor {
        class_id: class::FEEDBACK,
        command_id: 4,
        decode: |r| {
            Ok(DeviceEvent::FeedbackRgbMode {
                index: r.u8()?,
                red: r.u8()?,
                green: r.u8()?,
                blue: r.u8()?,
            })
        },
    },
    Descriptor {
        class_id: class::MOTION,
        command_id: 1,
        decode: |r| {
            Ok(DeviceEvent::MotionMode {
                index: r.u8()?,
                mode: r.u8()?,
            })
        },
    },
    Descriptor {
        class_id: class::MOTION,
        command_id: 2,
        decode: |r| {
            let index = r.u8()?;
            let flags = r.u8()?;
            // Declared data length, consumed but not used as a bound.
            let _declared_len = r.u8()?;
            Ok(DeviceEvent::MotionData {
                index,
                flags,
                data: r.rest(),
            })
        },
    },
];

impl Response {
    /// Decode a response payload for the given (class, command) pair.
    ///
    /// Returns [`KgError::UnknownMessage`] if no decoder exists for the
    /// pair and [`KgError::Protocol`] on a truncated payload.
    pub fn decode(class_id: u8, command_id: u8, payload: &[u8]) -> Result<Self> {
        let descriptor =
            lookup(RESPONSE_TABLE, class_id, command_id).ok_or(KgError::UnknownMessage {
                message_type: MARKER_COMMAND,
                class_id,
                command_id,
            })?;
        (descriptor.decode)(&mut FieldReader::new(payload))
    }

    /// Packet class of this response.
    pub fn class_id(&self) -> u8 {
        match self {
            Response::SystemPing { .. } | Response::SystemReset { .. } => class::SYSTEM,
            Response::TouchGetMode { .. } | Response::TouchSetMode { .. } => class::TOUCH,
            Response::FeedbackGetBlinkMode { .. }
            | Response::FeedbackSetBlinkMode { .. }
            | Response::FeedbackGetPiezoMode { .. }
            | Response::FeedbackSetPiezoMode { .. }
            | Response::FeedbackGetVibeMode { .. }
            | Response::FeedbackSetVibeMode { .. }
            | Response::FeedbackGetRgbMode { .. }
            | Response::FeedbackSetRgbMode { .. } => class::FEEDBACK,
            Response::MotionGetMode { .. } | Response::MotionSetMode { .. } => class::MOTION,
        }
    }

    /// Command identifier within the class.
    pub fn command_id(&self) -> u8 {
        match self {
            Response::SystemPing { .. } => 1,
            Response::SystemReset { .. } => 2,
            Response::TouchGetMode { .. } => 1,
            Response::TouchSetMode { .. } => 2,
            Response::FeedbackGetBlinkMode { .. } => 1,
            Response::FeedbackSetBlinkMode { .. } => 2,
            Response::FeedbackGetPiezoMode { .. } => 3,
            Response::FeedbackSetPiezoMode { .. } => 4,
            Response::FeedbackGetVibeMode { .. } => 5,
            Response::FeedbackSetVibeMode { .. } => 6,
            Response::FeedbackGetRgbMode { .. } => 7,
            Response::FeedbackSetRgbMode { .. } => 8,
            Response::MotionGetMode { .. } => 1,
            Response::MotionSetMode { .. } => 2,
        }
    }

    /// Payload bytes in wire order.
    pub fn payload(&self) -> Vec<u8> {
        match *self {
            Response::SystemPing { runtime } => runtime.to_le_bytes().to_vec(),
            Response::SystemReset { result }
            | Response::TouchSetMode { result }
            | Response::FeedbackSetBlinkMode { result }
            | Response::FeedbackSetPiezoMode { result }
            | Response::FeedbackSetVibeMode { result }
            | Response::FeedbackSetRgbMode { result }
            | Response::MotionSetMode { result } => result.to_le_bytes().to_vec(),
            Response::TouchGetMode { mode }
            | Response::FeedbackGetBlinkMode { mode }
            | Response::MotionGetMode { mode } => vec![mode],
            Response::FeedbackGetPiezoMode { mode, duration, frequency } => {
                let mut p = vec![mode, duration];
                p.extend_from_slice(&frequency.to_le_bytes());
                p
            }
            Response::FeedbackGetVibeMode { mode, duration } => vec![mode, duration],
            Response::FeedbackGetRgbMode { red, green, blue } => vec![red, green, blue],
        }
    }

    /// Encode the full device → host frame for this response.
    ///
    /// Used by device simulators and round-trip tests. Response payloads
    /// are fixed-width, so this only fails if a future variant were to
    /// exceed the wire's length-byte range.
    pub fn encode(&self) -> Result<Bytes> {
        let payload = self.payload();
        let header = Header::new(
            MARKER_COMMAND,
            checked_length(&payload)?,
            self.class_id(),
            self.command_id(),
        );
        Ok(Bytes::from(build_frame(&header, &payload)))
    }
}

impl DeviceEvent {
    /// Decode an event payload for the given (class, command) pair.
    ///
    /// Returns [`KgError::UnknownMessage`] if no decoder exists for the
    /// pair and [`KgError::Protocol`] on a truncated payload.
    pub fn decode(class_id: u8, command_id: u8, payload: &[u8]) -> Result<Self> {
        let descriptor =
            lookup(EVENT_TABLE, class_id, command_id).ok_or(KgError::UnknownMessage {
                message_type: MARKER_EVENT,
                class_id,
                command_id,
            })?;
        (descriptor.decode)(&mut FieldReader::new(payload))
    }

    /// Packet class of this event.
    pub fn class_id(&self) -> u8 {
        match self {
            DeviceEvent::ProtocolError { .. } => class::PROTOCOL,
            DeviceEvent::SystemBoot | DeviceEvent::SystemReady | DeviceEvent::SystemError { .. } => {
                class::SYSTEM
            }
            DeviceEvent::TouchMode { .. } | DeviceEvent::TouchStatus { .. } => class::TOUCH,
            DeviceEvent::FeedbackBlinkMode { .. }
            | DeviceEvent::FeedbackPiezoMode { .. }
            | DeviceEvent::FeedbackVibeMode { .. }
            | DeviceEvent::FeedbackRgbMode { .. } => class::FEEDBACK,
            DeviceEvent::MotionMode { .. } | DeviceEvent::MotionData { .. } => class::MOTION,
        }
    }

    /// Command identifier within the class.
    pub fn command_id(&self) -> u8 {
        match self {
            DeviceEvent::ProtocolError { .. } => 1,
            DeviceEvent::SystemBoot => 1,
            DeviceEvent::SystemReady => 2,
            DeviceEvent::SystemError { .. } => 3,
            DeviceEvent::TouchMode { .. } => 1,
            DeviceEvent::TouchStatus { .. } => 2,
            DeviceEvent::FeedbackBlinkMode { .. } => 1,
            DeviceEvent::FeedbackPiezoMode { .. } => 2,
            DeviceEvent::FeedbackVibeMode { .. } => 3,
            DeviceEvent::FeedbackRgbMode { .. } => 4,
            DeviceEvent::MotionMode { .. } => 1,
            DeviceEvent::MotionData { .. } => 2,
        }
    }

    /// Payload bytes in wire order.
    ///
    /// The declared-length byte of `TouchStatus` / `MotionData` is emitted
    /// from the actual trailing field length, clamped to a byte.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            DeviceEvent::ProtocolError { code } | DeviceEvent::SystemError { code } => {
                code.to_le_bytes().to_vec()
            }
            DeviceEvent::SystemBoot | DeviceEvent::SystemReady => Vec::new(),
            DeviceEvent::TouchMode { mode } | DeviceEvent::FeedbackBlinkMode { mode } => {
                vec![*mode]
            }
            DeviceEvent::TouchStatus { status } => {
                let mut p = vec![status.len().min(u8::MAX as usize) as u8];
                p.extend_from_slice(status);
                p
            }
            DeviceEvent::FeedbackPiezoMode { index, mode, duration, frequency } => {
                let mut p = vec![*index, *mode, *duration];
                p.extend_from_slice(&frequency.to_le_bytes());
                p
            }
            DeviceEvent::FeedbackVibeMode { index, mode, duration } => {
                vec![*index, *mode, *duration]
            }
            DeviceEvent::FeedbackRgbMode { index, red, green, blue } => {
                vec![*index, *red, *green, *blue]
            }
            DeviceEvent::MotionMode { index, mode } => vec![*index, *mode],
            DeviceEvent::MotionData { index, flags, data } => {
                let mut p = vec![*index, *flags, data.len().min(u8::MAX as usize) as u8];
                p.extend_from_slice(data);
                p
            }
        }
    }

    /// Encode the full device → host frame for this event.
    ///
    /// Returns [`KgError::Protocol`] if a variable-length trailing field
    /// (`TouchStatus` / `MotionData`) pushes the payload past the wire's
    /// 250-byte ceiling.
    pub fn encode(&self) -> Result<Bytes> {
        let payload = self.payload();
        let header = Header::new(
            MARKER_EVENT,
            checked_length(&payload)?,
            self.class_id(),
            self.command_id(),
        );
        Ok(Bytes::from(build_frame(&header, &payload)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ping_response() {
        let rsp = Response::decode(1, 1, &[0x2A, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(rsp, Response::SystemPing { runtime: 42 });
    }

    #[test]
    fn test_decode_little_endian_fields() {
        let rsp = Response::decode(1, 2, &[0x34, 0x12]).unwrap();
        assert_eq!(rsp, Response::SystemReset { result: 0x1234 });

        let rsp = Response::decode(3, 3, &[0x02, 0x0A, 0xB8, 0x01]).unwrap();
        assert_eq!(
            rsp,
            Response::FeedbackGetPiezoMode { mode: 2, duration: 10, frequency: 440 }
        );
    }

    #[test]
    fn test_decode_unknown_pair() {
        let err = Response::decode(9, 9, &[]).unwrap_err();
        assert!(matches!(
            err,
            KgError::UnknownMessage { class_id: 9, command_id: 9, .. }
        ));

        let err = DeviceEvent::decode(0, 2, &[]).unwrap_err();
        assert!(matches!(err, KgError::UnknownMessage { .. }));
    }

    #[test]
    fn test_decode_truncated_payload() {
        let err = Response::decode(1, 1, &[0x2A, 0x00]).unwrap_err();
        assert!(matches!(err, KgError::Protocol(_)));
    }

    #[test]
    fn test_decode_event_zero_payload() {
        assert_eq!(DeviceEvent::decode(1, 1, &[]).unwrap(), DeviceEvent::SystemBoot);
        assert_eq!(DeviceEvent::decode(1, 2, &[]).unwrap(), DeviceEvent::SystemReady);
    }

    #[test]
    fn test_touch_status_ignores_declared_length() {
        // Declared length says 1 but three bytes follow: all three are kept.
        let evt = DeviceEvent::decode(2, 2, &[0x01, 0xAA, 0xBB, 0xCC]).unwrap();
        assert_eq!(
            evt,
            DeviceEvent::TouchStatus { status: Bytes::from_static(&[0xAA, 0xBB, 0xCC]) }
        );
    }

    #[test]
    fn test_motion_data_ignores_declared_length() {
        // data_len byte claims 99; the data field is still all remaining bytes.
        let evt = DeviceEvent::decode(4, 2, &[0x00, 0x01, 99, 0xD0, 0xD1, 0xD2]).unwrap();
        assert_eq!(
            evt,
            DeviceEvent::MotionData {
                index: 0,
                flags: 1,
                data: Bytes::from_static(&[0xD0, 0xD1, 0xD2]),
            }
        );
    }

    #[test]
    fn test_response_roundtrip_all_variants() {
        let responses = [
            Response::SystemPing { runtime: 123_456 },
            Response::SystemReset { result: 0 },
            Response::TouchGetMode { mode: 1 },
            Response::TouchSetMode { result: 0x0101 },
            Response::FeedbackGetBlinkMode { mode: 2 },
            Response::FeedbackSetBlinkMode { result: 0 },
            Response::FeedbackGetPiezoMode { mode: 1, duration: 20, frequency: 880 },
            Response::FeedbackSetPiezoMode { result: 0 },
            Response::FeedbackGetVibeMode { mode: 3, duration: 100 },
            Response::FeedbackSetVibeMode { result: 0 },
            Response::FeedbackGetRgbMode { red: 10, green: 20, blue: 30 },
            Response::FeedbackSetRgbMode { result: 0 },
            Response::MotionGetMode { mode: 1 },
            Response::MotionSetMode { result: 0xFFFF },
        ];
        for rsp in responses {
            let frame = rsp.encode().unwrap();
            assert_eq!(frame[0], 0xC0);
            assert_eq!(frame[1] as usize, frame.len() - 4);
            let decoded = Response::decode(frame[2], frame[3], &frame[4..]).unwrap();
            assert_eq!(decoded, rsp);
        }
    }

    #[test]
    fn test_event_roundtrip_all_variants() {
        let events = [
            DeviceEvent::ProtocolError { code: 0x0201 },
            DeviceEvent::SystemBoot,
            DeviceEvent::SystemReady,
            DeviceEvent::SystemError { code: 7 },
            DeviceEvent::TouchMode { mode: 1 },
            DeviceEvent::TouchStatus { status: Bytes::from_static(&[0x0F, 0xF0]) },
            DeviceEvent::FeedbackBlinkMode { mode: 4 },
            DeviceEvent::FeedbackPiezoMode { index: 0, mode: 1, duration: 5, frequency: 261 },
            DeviceEvent::FeedbackVibeMode { index: 1, mode: 2, duration: 30 },
            DeviceEvent::FeedbackRgbMode { index: 0, red: 255, green: 0, blue: 128 },
            DeviceEvent::MotionMode { index: 0, mode: 1 },
            DeviceEvent::MotionData { index: 0, flags: 3, data: Bytes::from_static(&[1, 2, 3, 4, 5, 6]) },
        ];
        for evt in events {
            let frame = evt.encode().unwrap();
            assert_eq!(frame[0], 0x80);
            assert_eq!(frame[1] as usize, frame.len() - 4);
            let decoded = DeviceEvent::decode(frame[2], frame[3], &frame[4..]).unwrap();
            assert_eq!(decoded, evt);
        }
    }

    #[test]
    fn test_encode_rejects_oversize_trailing_field() {
        // 300 status bytes would wrap the length byte modulo 256 and emit
        // a corrupt frame; the encoder must refuse instead.
        let evt = DeviceEvent::TouchStatus {
            status: Bytes::from(vec![0x11; 300]),
        };
        assert!(matches!(evt.encode().unwrap_err(), KgError::Protocol(_)));

        let evt = DeviceEvent::MotionData {
            index: 0,
            flags: 0,
            data: Bytes::from(vec![0x22; 300]),
        };
        assert!(matches!(evt.encode().unwrap_err(), KgError::Protocol(_)));
    }

    #[test]
    fn test_encode_accepts_maximum_trailing_field() {
        // 249 status bytes + the declared-length byte hit the 250-byte
        // payload ceiling exactly.
        let evt = DeviceEvent::TouchStatus {
            status: Bytes::from(vec![0x11; 249]),
        };
        let frame = evt.encode().unwrap();
        assert_eq!(frame[1], 250);
        assert_eq!(frame.len(), 254);
    }
}
