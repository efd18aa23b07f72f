//! Transport module - the abstract duplex byte stream.
//!
//! The crate never owns the transport's lifecycle (open/close/baud); it
//! only writes encoded frames and reads inbound bytes one at a time.
//! Serial ports, sockets, or in-memory queues all fit behind the same
//! trait.

mod loopback;

pub use loopback::{loopback_pair, LoopbackTransport};

use std::time::Duration;

use crate::error::Result;

/// Abstract duplex byte stream connecting the host to the device.
pub trait Transport {
    /// Write all bytes, blocking until done.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Number of bytes that can be read without blocking.
    fn bytes_available(&mut self) -> Result<usize>;

    /// Read one byte, blocking up to `timeout`.
    ///
    /// Returns `Ok(None)` when the timeout expires with nothing read.
    /// A zero timeout reads only an already-available byte.
    fn read_byte(&mut self, timeout: Duration) -> Result<Option<u8>>;
}
