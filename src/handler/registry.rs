//! Listener registry: ordered handler lists per event kind.
//!
//! Handlers fire in registration order with no deduplication; registering
//! the same closure logic twice means it runs twice. `register` hands
//! back a [`HandlerId`] token for later removal. A handler can remove
//! itself during a fire by returning [`HandlerAction::Unregister`];
//! removals are swept after the invocation loop so handlers later in the
//! order still run.
//!
//! # Example
//!
//! ```
//! use kgwire::handler::{EventArgs, EventKind, EventRegistry, HandlerAction, Lifecycle};
//!
//! let mut registry = EventRegistry::new();
//! registry.register(EventKind::Idle, |_args| {
//!     println!("link went idle");
//!     Ok(HandlerAction::Retain)
//! });
//! registry.fire(&EventArgs::Lifecycle(Lifecycle::Idle)).unwrap();
//! ```

use std::collections::HashMap;

use super::{EventArgs, EventKind, Handler, HandlerAction};
use crate::error::Result;

/// Opaque token identifying a registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct HandlerEntry {
    id: HandlerId,
    callback: Handler,
}

/// Registry mapping event kinds to ordered handler lists.
#[derive(Default)]
pub struct EventRegistry {
    handlers: HashMap<EventKind, Vec<HandlerEntry>>,
    next_id: u64,
}

impl EventRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: 1,
        }
    }

    /// Register a handler for an event kind.
    ///
    /// Handlers for the same kind fire in registration order.
    pub fn register<F>(&mut self, kind: EventKind, callback: F) -> HandlerId
    where
        F: FnMut(&EventArgs) -> Result<HandlerAction> + Send + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.entry(kind).or_default().push(HandlerEntry {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a handler by its token. Returns whether it was registered.
    pub fn unregister(&mut self, kind: EventKind, id: HandlerId) -> bool {
        match self.handlers.get_mut(&kind) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|e| e.id != id);
                entries.len() != before
            }
            None => false,
        }
    }

    /// Number of handlers registered for a kind.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Invoke all handlers registered for `args.kind()` in order.
    ///
    /// A kind with no registrations is a no-op. A handler error aborts
    /// the remaining handlers and propagates unmodified (fail-fast);
    /// removals already requested are still applied before returning.
    pub fn fire(&mut self, args: &EventArgs) -> Result<()> {
        let kind = args.kind();
        let Some(entries) = self.handlers.get_mut(&kind) else {
            return Ok(());
        };

        let mut removed = Vec::new();
        let mut result = Ok(());
        for entry in entries.iter_mut() {
            match (entry.callback)(args) {
                Ok(HandlerAction::Retain) => {}
                Ok(HandlerAction::Unregister) => removed.push(entry.id),
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }
        if !removed.is_empty() {
            entries.retain(|e| !removed.contains(&e.id));
        }
        result
    }
}
