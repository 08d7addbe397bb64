use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::notifier::listener::ListenerHandle;
use crate::notifier::topic::Topic;
use crate::room::RoomView;
use crate::utils::error::ListenerError;

/// Topic-keyed subscription registry.
///
/// Maps each topic to the ordered sequence of listeners registered for it.
/// Registration order defines notification order, and the same handle may
/// appear several times in one sequence; each occurrence is one dispatch
/// call per event.
#[derive(Default)]
pub struct Registry {
    topics: HashMap<Topic, Vec<ListenerHandle>>,
}

impl Registry {
    /// Creates a registry with no subscriptions.
    pub fn new() -> Self {
        Self {
            topics: HashMap::new(),
        }
    }

    /// Appends `listener` to the sequence for `topic`, creating the
    /// sequence if this is the topic's first subscription.
    ///
    /// Always succeeds. Registering the same handle again, for this or
    /// any other topic, adds a further occurrence rather than replacing
    /// the existing one.
    pub fn register(&mut self, topic: &str, listener: ListenerHandle) {
        let entries = self.topics.entry(topic.to_string()).or_default();
        entries.push(listener);
        trace!(topic, count = entries.len(), "listener registered");
    }

    /// Removes the first occurrence of `listener` from `topic`'s sequence.
    ///
    /// Matching is by handle identity (`Arc::ptr_eq`), never by value, so
    /// a structurally similar but separately built listener stays put.
    /// Silently does nothing when the topic has no sequence or the handle
    /// is not in it.
    pub fn unregister(&mut self, topic: &str, listener: &ListenerHandle) {
        let Some(entries) = self.topics.get_mut(topic) else {
            return;
        };
        if let Some(pos) = entries.iter().position(|l| Arc::ptr_eq(l, listener)) {
            entries.remove(pos);
            trace!(topic, count = entries.len(), "listener unregistered");
        }
    }

    /// Notifies every listener registered for `topic`, in registration
    /// order, on the caller's thread.
    ///
    /// A topic nobody subscribed to dispatches to nobody and returns `Ok`.
    /// The first listener error aborts the remaining fan-out and is
    /// returned to the caller.
    pub fn dispatch(&self, topic: &str, room: &RoomView<'_>) -> Result<(), ListenerError> {
        let Some(entries) = self.topics.get(topic) else {
            trace!(topic, "dispatch on topic with no listeners");
            return Ok(());
        };
        debug!(topic, listeners = entries.len(), "dispatching");
        for listener in entries {
            listener.notify(topic, room)?;
        }
        Ok(())
    }

    /// Number of occurrences currently registered for `topic`.
    pub fn listener_count(&self, topic: &str) -> usize {
        self.topics.get(topic).map_or(0, Vec::len)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(&str, usize)> = self
            .topics
            .iter()
            .map(|(topic, entries)| (topic.as_str(), entries.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("Registry").field("topics", &counts).finish()
    }
}
