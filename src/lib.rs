//! # kgwire
//!
//! Host-side binary protocol library for the Keyglove wearable input
//! device. Encodes outgoing command packets, incrementally parses the
//! inbound byte stream into framed packets, and dispatches decoded
//! responses and asynchronous events to registered listeners.
//!
//! ## Architecture
//!
//! - **Protocol** (`protocol`): 4-byte header wire format and the
//!   byte-at-a-time frame buffer with lead-byte resynchronization.
//! - **Codec** (`codec`): the fixed command/response/event table —
//!   typed encoders and a static decode descriptor table.
//! - **Handlers** (`handler`): ordered listener lists keyed by a fixed
//!   enum of event kinds, including the client lifecycle signals.
//! - **Transport** (`transport`): abstract duplex byte stream; the crate
//!   never owns the port's lifecycle.
//! - **Client** (`Client`): half-duplex request/response plus unsolicited
//!   events, one command outstanding at a time.
//!
//! ## Example
//!
//! ```
//! use kgwire::{Client, Command, EventKind, HandlerAction};
//! use kgwire::transport::loopback_pair;
//! use std::time::Duration;
//!
//! let (host, _device) = loopback_pair();
//! let mut client = Client::new(host);
//!
//! client.on(EventKind::RspSystemPing, |args| {
//!     println!("device answered: {:?}", args);
//!     Ok(HandlerAction::Retain)
//! });
//!
//! client.send_command(&Command::SystemPing)?;
//! while client.poll(Duration::from_millis(500))? {}
//! # Ok::<(), kgwire::KgError>(())
//! ```

pub mod codec;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod transport;

mod client;

pub use client::Client;
pub use codec::{Command, DeviceEvent, Response};
pub use error::{KgError, Result};
pub use handler::{EventArgs, EventKind, EventRegistry, HandlerAction, HandlerId, Lifecycle};
