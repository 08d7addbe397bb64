use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::notifier::listener::ListenerHandle;
use crate::notifier::topic::BROADCAST;
use crate::room::RoomView;
use crate::utils::error::ListenerError;

/// Single-sequence subscriber list for the broadcast variant.
///
/// The degenerate registry: one implicit topic, every event reaches every
/// listener. Ordering, duplicate, and removal semantics match
/// [`Registry`](crate::notifier::Registry); only the topic dimension is gone.
#[derive(Default)]
pub struct BroadcastList {
    listeners: Vec<ListenerHandle>,
}

impl BroadcastList {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Appends `listener` to the list. Always succeeds; duplicates add
    /// further occurrences.
    pub fn register(&mut self, listener: ListenerHandle) {
        self.listeners.push(listener);
        trace!(count = self.listeners.len(), "listener registered");
    }

    /// Removes the first occurrence of `listener`, matched by handle
    /// identity. Silently does nothing for an unknown handle.
    pub fn unregister(&mut self, listener: &ListenerHandle) {
        if let Some(pos) = self
            .listeners
            .iter()
            .position(|l| Arc::ptr_eq(l, listener))
        {
            self.listeners.remove(pos);
            trace!(count = self.listeners.len(), "listener unregistered");
        }
    }

    /// Notifies every listener in registration order, on the caller's
    /// thread, passing [`BROADCAST`] as the topic.
    ///
    /// The first listener error aborts the remaining fan-out.
    pub fn dispatch(&self, room: &RoomView<'_>) -> Result<(), ListenerError> {
        if self.listeners.is_empty() {
            trace!("broadcast with no listeners");
            return Ok(());
        }
        debug!(listeners = self.listeners.len(), "broadcasting");
        for listener in &self.listeners {
            listener.notify(BROADCAST, room)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for BroadcastList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BroadcastList")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
