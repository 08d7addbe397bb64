use crate::config::RoomSettings;
use crate::notifier::{BroadcastList, ListenerHandle};
use crate::room::view::RoomView;
use crate::utils::error::ListenerError;

/// Broadcast chat room: an append-only message log whose every change is
/// announced to every registered listener.
///
/// The room owns its log and its subscriber list exclusively. Mutations
/// take `&mut self`; callers that share a room across threads wrap it in
/// `Arc<Mutex<_>>`, which also holds the lock for the full dispatch and
/// keeps notification order aligned with mutation order.
#[derive(Debug, Default)]
pub struct Chatroom {
    messages: Vec<String>,
    listeners: BroadcastList,
}

impl Chatroom {
    /// Creates an empty room with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty room sized according to `settings`.
    pub fn with_settings(settings: &RoomSettings) -> Self {
        Self {
            messages: Vec::with_capacity(settings.message_capacity),
            listeners: BroadcastList::new(),
        }
    }

    /// Appends `text` to the log, then notifies every listener.
    ///
    /// Any text is accepted, the empty string included. The append is
    /// committed before dispatch begins: a failing listener aborts the
    /// rest of the fan-out and surfaces here, but never the append.
    pub fn add_message(&mut self, text: impl Into<String>) -> Result<(), ListenerError> {
        self.messages.push(text.into());
        self.listeners.dispatch(&RoomView::new(&self.messages, &[]))
    }

    /// Messages in arrival order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Adds `listener` to the room's subscriber list.
    pub fn register(&mut self, listener: ListenerHandle) {
        self.listeners.register(listener);
    }

    /// Removes one occurrence of `listener`, matched by handle identity.
    /// Silently does nothing for a handle that was never registered.
    pub fn unregister(&mut self, listener: &ListenerHandle) {
        self.listeners.unregister(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
