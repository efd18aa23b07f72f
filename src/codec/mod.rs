//! Codec module - the command/response/event table.
//!
//! Maps typed commands to wire bytes and (class, command) payloads back to
//! typed responses and events:
//!
//! - [`Command`] - host → device commands with per-command encoders
//! - [`Response`] - command responses, decoded by a static descriptor table
//! - [`DeviceEvent`] - asynchronous device events, likewise table-driven
//!
//! All multi-byte fields are little-endian at their natural width; no
//! field is signed. Variable-length trailing fields consume every byte
//! after the fixed prefix.

mod command;
mod message;

pub use command::{class, Command};
pub use message::{DeviceEvent, Response};
