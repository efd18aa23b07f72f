//! Outbound command encoding.
//!
//! One variant per supported host → device command. Each command carries
//! exactly its documented argument arity; the payload length is a
//! per-command constant, not derived from input size.
//!
//! # Example
//!
//! ```
//! use kgwire::codec::Command;
//!
//! let bytes = Command::SystemPing.encode();
//! assert_eq!(&bytes[..], &[0xC0, 0x00, 0x01, 0x01]);
//!
//! let bytes = Command::TouchSetMode { mode: 1 }.encode();
//! assert_eq!(&bytes[..], &[0xC0, 0x01, 0x02, 0x02, 0x01]);
//! ```

use bytes::Bytes;

use crate::protocol::{build_frame, Header, MARKER_COMMAND};

/// Packet class identifiers.
pub mod class {
    pub const PROTOCOL: u8 = 0;
    pub const SYSTEM: u8 = 1;
    pub const TOUCH: u8 = 2;
    pub const FEEDBACK: u8 = 3;
    pub const MOTION: u8 = 4;
}

/// A host → device command with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SystemPing,
    SystemReset,
    TouchGetMode,
    TouchSetMode { mode: u8 },
    FeedbackGetBlinkMode,
    FeedbackSetBlinkMode { mode: u8 },
    FeedbackGetPiezoMode { index: u8 },
    FeedbackSetPiezoMode { index: u8, mode: u8, duration: u8, frequency: u16 },
    FeedbackGetVibeMode { index: u8 },
    FeedbackSetVibeMode { index: u8, mode: u8, duration: u8 },
    FeedbackGetRgbMode { index: u8 },
    FeedbackSetRgbMode { index: u8, red: u8, green: u8, blue: u8 },
    MotionGetMode { index: u8 },
    MotionSetMode { index: u8, mode: u8 },
}

impl Command {
    /// Packet class this command belongs to.
    pub fn class_id(&self) -> u8 {
        match self {
            Command::SystemPing | Command::SystemReset => class::SYSTEM,
            Command::TouchGetMode | Command::TouchSetMode { .. } => class::TOUCH,
            Command::FeedbackGetBlinkMode
            | Command::FeedbackSetBlinkMode { .. }
            | Command::FeedbackGetPiezoMode { .. }
            | Command::FeedbackSetPiezoMode { .. }
            | Command::FeedbackGetVibeMode { .. }
            | Command::FeedbackSetVibeMode { .. }
            | Command::FeedbackGetRgbMode { .. }
            | Command::FeedbackSetRgbMode { .. } => class::FEEDBACK,
            Command::MotionGetMode { .. } | Command::MotionSetMode { .. } => class::MOTION,
        }
    }

    /// Command identifier within its class.
    pub fn command_id(&self) -> u8 {
        match self {
            Command::SystemPing => 1,
            Command::SystemReset => 2,
            Command::TouchGetMode => 1,
            Command::TouchSetMode { .. } => 2,
            Command::FeedbackGetBlinkMode => 1,
            Command::FeedbackSetBlinkMode { .. } => 2,
            Command::FeedbackGetPiezoMode { .. } => 3,
            Command::FeedbackSetPiezoMode { .. } => 4,
            Command::FeedbackGetVibeMode { .. } => 5,
            Command::FeedbackSetVibeMode { .. } => 6,
            Command::FeedbackGetRgbMode { .. } => 7,
            Command::FeedbackSetRgbMode { .. } => 8,
            Command::MotionGetMode { .. } => 1,
            Command::MotionSetMode { .. } => 2,
        }
    }

    /// Argument bytes in wire order (little-endian multi-byte fields).
    pub fn payload(&self) -> Vec<u8> {
        match *self {
            Command::SystemPing
            | Command::SystemReset
            | Command::TouchGetMode
            | Command::FeedbackGetBlinkMode => Vec::new(),
            Command::TouchSetMode { mode } | Command::FeedbackSetBlinkMode { mode } => vec![mode],
            Command::FeedbackGetPiezoMode { index }
            | Command::FeedbackGetVibeMode { index }
            | Command::FeedbackGetRgbMode { index }
            | Command::MotionGetMode { index } => vec![index],
            Command::FeedbackSetPiezoMode { index, mode, duration, frequency } => {
                let mut p = vec![index, mode, duration];
                p.extend_from_slice(&frequency.to_le_bytes());
                p
            }
            Command::FeedbackSetVibeMode { index, mode, duration } => vec![index, mode, duration],
            Command::FeedbackSetRgbMode { index, red, green, blue } => {
                vec![index, red, green, blue]
            }
            Command::MotionSetMode { index, mode } => vec![index, mode],
        }
    }

    /// Encode the full wire frame for this command.
    pub fn encode(&self) -> Bytes {
        let payload = self.payload();
        let header = Header::new(
            MARKER_COMMAND,
            payload.len() as u8,
            self.class_id(),
            self.command_id(),
        );
        Bytes::from(build_frame(&header, &payload))
    }
}
