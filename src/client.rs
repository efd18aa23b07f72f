//! Protocol client: command sending, polling, and dispatch.
//!
//! [`Client`] ties the pieces together over a [`Transport`]: it encodes
//! and writes outbound commands, feeds inbound bytes through the frame
//! buffer one at a time, decodes completed frames via the codec tables,
//! and fires the matching handlers. The protocol is half-duplex — one
//! command outstanding at a time, tracked by the busy flag.
//!
//! Each client owns its own receive buffer, busy flag, and registry;
//! nothing is shared between instances.
//!
//! # Example
//!
//! ```
//! use kgwire::{Client, Command, EventKind, HandlerAction};
//! use kgwire::transport::loopback_pair;
//!
//! let (host, _device) = loopback_pair();
//! let mut client = Client::new(host);
//!
//! client.on(EventKind::RspSystemPing, |args| {
//!     println!("ping response: {:?}", args);
//!     Ok(HandlerAction::Retain)
//! });
//!
//! client.send_command(&Command::SystemPing).unwrap();
//! assert!(client.is_busy());
//! ```

use std::time::Duration;

use crate::codec::{Command, DeviceEvent, Response};
use crate::error::{KgError, Result};
use crate::handler::{EventArgs, EventKind, EventRegistry, HandlerAction, HandlerId, Lifecycle};
use crate::protocol::{Frame, FrameBuffer};
use crate::transport::Transport;

/// Half-duplex protocol client over a byte-stream transport.
pub struct Client<T: Transport> {
    transport: T,
    rx_buffer: FrameBuffer,
    registry: EventRegistry,
    busy: bool,
}

impl<T: Transport> Client<T> {
    /// Create a client over the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            rx_buffer: FrameBuffer::new(),
            registry: EventRegistry::new(),
            busy: false,
        }
    }

    /// Register a handler; shorthand for [`EventRegistry::register`].
    pub fn on<F>(&mut self, kind: EventKind, callback: F) -> HandlerId
    where
        F: FnMut(&EventArgs) -> Result<HandlerAction> + Send + 'static,
    {
        self.registry.register(kind, callback)
    }

    /// Remove a handler; shorthand for [`EventRegistry::unregister`].
    pub fn off(&mut self, kind: EventKind, id: HandlerId) -> bool {
        self.registry.unregister(kind, id)
    }

    /// Whether a command is awaiting its response.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Borrow the listener registry.
    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// Mutably borrow the listener registry.
    pub fn registry_mut(&mut self) -> &mut EventRegistry {
        &mut self.registry
    }

    /// Mutably borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Encode and send a command, firing the send lifecycle around it.
    ///
    /// Fires `BeforeSend`, sets the busy flag, fires `Busy`, writes the
    /// frame, and fires `AfterSend`. The response (or a poll timeout)
    /// clears the flag again.
    pub fn send_command(&mut self, command: &Command) -> Result<()> {
        let bytes = command.encode();
        tracing::debug!("=> [ {} ]", hex(&bytes));

        self.registry
            .fire(&EventArgs::Lifecycle(Lifecycle::BeforeSend))?;
        self.busy = true;
        self.registry.fire(&EventArgs::Lifecycle(Lifecycle::Busy))?;
        self.transport.write(&bytes)?;
        self.registry
            .fire(&EventArgs::Lifecycle(Lifecycle::AfterSend))?;
        Ok(())
    }

    /// Pump inbound bytes through the parser. Returns the busy flag.
    ///
    /// With a zero timeout, drains all currently-available bytes without
    /// blocking. With a positive timeout, reads one byte at a time until
    /// the busy flag clears; a read that times out clears the flag and
    /// fires `Idle` then `Timeout`, ending the poll. Callers loop on the
    /// returned flag to wait for a response.
    pub fn poll(&mut self, timeout: Duration) -> Result<bool> {
        if timeout.is_zero() {
            while self.transport.bytes_available()? > 0 {
                match self.transport.read_byte(Duration::ZERO)? {
                    Some(b) => self.feed_byte(b)?,
                    None => break,
                }
            }
        } else {
            loop {
                match self.transport.read_byte(timeout)? {
                    Some(b) => self.feed_byte(b)?,
                    None => {
                        self.busy = false;
                        self.registry.fire(&EventArgs::Lifecycle(Lifecycle::Idle))?;
                        self.registry
                            .fire(&EventArgs::Lifecycle(Lifecycle::Timeout))?;
                    }
                }
                if !self.busy {
                    break;
                }
            }
        }
        Ok(self.busy)
    }

    fn feed_byte(&mut self, b: u8) -> Result<()> {
        if let Some(frame) = self.rx_buffer.push_byte(b) {
            self.dispatch_frame(&frame)?;
        }
        Ok(())
    }

    fn dispatch_frame(&mut self, frame: &Frame) -> Result<()> {
        tracing::debug!("<= [ {} {} ]", hex_header(frame), hex(&frame.payload));

        if frame.is_command_or_response() {
            match Response::decode(frame.class_id(), frame.command_id(), frame.payload()) {
                Ok(rsp) => self.registry.fire(&EventArgs::Response(rsp))?,
                Err(KgError::UnknownMessage { .. }) => {
                    // The outstanding command still completed on the wire,
                    // so the busy flag clears below as usual.
                    tracing::warn!(
                        class = frame.class_id(),
                        command = frame.command_id(),
                        "Unknown response"
                    );
                }
                Err(e) => return Err(e),
            }
            self.busy = false;
            self.registry.fire(&EventArgs::Lifecycle(Lifecycle::Idle))?;
        } else if frame.is_event() {
            match DeviceEvent::decode(frame.class_id(), frame.command_id(), frame.payload()) {
                Ok(evt) => self.registry.fire(&EventArgs::Event(evt))?,
                Err(KgError::UnknownMessage { .. }) => {
                    tracing::warn!(
                        class = frame.class_id(),
                        command = frame.command_id(),
                        "Unknown event"
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn hex_header(frame: &Frame) -> String {
    hex(&frame.header.encode())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{loopback_pair, LoopbackTransport};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn client_pair() -> (Client<LoopbackTransport>, LoopbackTransport) {
        let (host, device) = loopback_pair();
        (Client::new(host), device)
    }

    #[test]
    fn test_send_sets_busy_and_writes_frame() {
        let (mut client, mut device) = client_pair();

        client.send_command(&Command::SystemPing).unwrap();
        assert!(client.is_busy());

        let mut wire = Vec::new();
        while let Some(b) = device.read_byte(Duration::ZERO).unwrap() {
            wire.push(b);
        }
        assert_eq!(wire, vec![0xC0, 0x00, 0x01, 0x01]);
    }

    #[test]
    fn test_response_dispatch_clears_busy() {
        let (mut client, mut device) = client_pair();
        let received = Arc::new(Mutex::new(Vec::new()));
        let rx = Arc::clone(&received);

        client.on(EventKind::RspSystemPing, move |args| {
            rx.lock().unwrap().push(args.clone());
            Ok(HandlerAction::Retain)
        });

        client.send_command(&Command::SystemPing).unwrap();
        device
            .write(&[0xC0, 0x04, 0x01, 0x01, 0x2A, 0x00, 0x00, 0x00])
            .unwrap();

        let busy = client.poll(Duration::ZERO).unwrap();
        assert!(!busy);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            EventArgs::Response(Response::SystemPing { runtime: 42 })
        );
    }

    #[test]
    fn test_send_lifecycle_order() {
        let (mut client, _device) = client_pair();
        let order = Arc::new(Mutex::new(Vec::new()));

        for kind in [EventKind::BeforeSend, EventKind::Busy, EventKind::AfterSend] {
            let order = Arc::clone(&order);
            client.on(kind, move |args| {
                order.lock().unwrap().push(args.kind());
                Ok(HandlerAction::Retain)
            });
        }

        client.send_command(&Command::SystemReset).unwrap();
        assert_eq!(
            *order.lock().unwrap(),
            vec![EventKind::BeforeSend, EventKind::Busy, EventKind::AfterSend]
        );
    }

    #[test]
    fn test_timeout_clears_busy_and_fires_once() {
        let (mut client, _device) = client_pair();
        let timeouts = Arc::new(AtomicUsize::new(0));
        let idles = Arc::new(AtomicUsize::new(0));

        let t = Arc::clone(&timeouts);
        client.on(EventKind::Timeout, move |_| {
            t.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerAction::Retain)
        });
        let i = Arc::clone(&idles);
        client.on(EventKind::Idle, move |_| {
            i.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerAction::Retain)
        });

        client.send_command(&Command::SystemPing).unwrap();
        let busy = client.poll(Duration::from_millis(100)).unwrap();

        assert!(!busy);
        assert_eq!(timeouts.load(Ordering::SeqCst), 1);
        assert_eq!(idles.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_event_does_not_clear_busy() {
        let (mut client, mut device) = client_pair();
        let events = Arc::new(AtomicUsize::new(0));
        let e = Arc::clone(&events);

        client.on(EventKind::EvtSystemBoot, move |_| {
            e.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerAction::Retain)
        });

        client.send_command(&Command::SystemPing).unwrap();
        device.write(&DeviceEvent::SystemBoot.encode().unwrap()).unwrap();

        let busy = client.poll(Duration::ZERO).unwrap();
        assert!(busy);
        assert_eq!(events.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_positive_timeout_poll_runs_until_response() {
        let (mut client, mut device) = client_pair();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);

        client.on(EventKind::RspSystemReset, move |_| {
            h.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerAction::Retain)
        });

        client.send_command(&Command::SystemReset).unwrap();
        // An event arrives before the response; polling must keep going.
        device.write(&DeviceEvent::SystemReady.encode().unwrap()).unwrap();
        device
            .write(&Response::SystemReset { result: 0 }.encode().unwrap())
            .unwrap();

        let busy = client.poll(Duration::from_millis(100)).unwrap();
        assert!(!busy);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_response_still_clears_busy() {
        let (mut client, mut device) = client_pair();

        client.send_command(&Command::SystemPing).unwrap();
        // Class 9 command 9 has no decoder.
        device.write(&[0xC0, 0x00, 0x09, 0x09]).unwrap();

        let busy = client.poll(Duration::ZERO).unwrap();
        assert!(!busy);
    }

    #[test]
    fn test_resynchronization_across_noise() {
        let (mut client, mut device) = client_pair();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);

        client.on(EventKind::EvtTouchMode, move |_| {
            h.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerAction::Retain)
        });

        device.write(&[0x13, 0x37]).unwrap();
        device
            .write(&DeviceEvent::TouchMode { mode: 1 }.encode().unwrap())
            .unwrap();

        client.poll(Duration::ZERO).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
