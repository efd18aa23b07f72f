//! In-memory loopback transport.
//!
//! A pair of connected endpoints backed by two shared byte queues. Used
//! by the test suite and for simulating a device without hardware: one
//! endpoint plays the host, the other the Keyglove.
//!
//! Timed reads never actually sleep — with no byte queued, the timeout is
//! considered expired immediately. That keeps tests deterministic while
//! preserving the `Ok(None)`-on-timeout contract.
//!
//! # Example
//!
//! ```
//! use kgwire::transport::{loopback_pair, Transport};
//! use std::time::Duration;
//!
//! let (mut host, mut device) = loopback_pair();
//! device.write(&[0xC0]).unwrap();
//! assert_eq!(host.bytes_available().unwrap(), 1);
//! assert_eq!(host.read_byte(Duration::ZERO).unwrap(), Some(0xC0));
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::Transport;
use crate::error::Result;

type SharedQueue = Arc<Mutex<VecDeque<u8>>>;

/// One endpoint of an in-memory duplex byte stream.
pub struct LoopbackTransport {
    incoming: SharedQueue,
    outgoing: SharedQueue,
}

/// Create a connected pair of loopback endpoints.
///
/// Bytes written to one endpoint become readable on the other.
pub fn loopback_pair() -> (LoopbackTransport, LoopbackTransport) {
    let a_to_b: SharedQueue = Arc::new(Mutex::new(VecDeque::new()));
    let b_to_a: SharedQueue = Arc::new(Mutex::new(VecDeque::new()));

    let a = LoopbackTransport {
        incoming: Arc::clone(&b_to_a),
        outgoing: Arc::clone(&a_to_b),
    };
    let b = LoopbackTransport {
        incoming: a_to_b,
        outgoing: b_to_a,
    };
    (a, b)
}

impl Transport for LoopbackTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut q = self.outgoing.lock().expect("loopback queue poisoned");
        q.extend(bytes.iter().copied());
        Ok(())
    }

    fn bytes_available(&mut self) -> Result<usize> {
        Ok(self.incoming.lock().expect("loopback queue poisoned").len())
    }

    fn read_byte(&mut self, _timeout: Duration) -> Result<Option<u8>> {
        Ok(self
            .incoming
            .lock()
            .expect("loopback queue poisoned")
            .pop_front())
    }
}
