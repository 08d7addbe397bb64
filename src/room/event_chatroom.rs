use crate::config::RoomSettings;
use crate::notifier::{ListenerHandle, NEW_MESSAGE, NEW_USER, Registry};
use crate::room::view::RoomView;
use crate::utils::error::ListenerError;

/// Topic-routing chat room: a message log plus a user roster, with
/// listeners subscribed per topic.
///
/// Appending a message dispatches on [`NEW_MESSAGE`], adding a user on
/// [`NEW_USER`]; a listener only hears the topics it registered for.
/// Ownership and locking discipline match [`Chatroom`](super::Chatroom).
#[derive(Debug, Default)]
pub struct EventChatroom {
    messages: Vec<String>,
    users: Vec<String>,
    registry: Registry,
}

impl EventChatroom {
    /// Creates an empty room with no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty room sized according to `settings`.
    pub fn with_settings(settings: &RoomSettings) -> Self {
        Self {
            messages: Vec::with_capacity(settings.message_capacity),
            users: Vec::with_capacity(settings.user_capacity),
            registry: Registry::new(),
        }
    }

    /// Appends `text` to the log, then dispatches on [`NEW_MESSAGE`].
    ///
    /// The append is committed before dispatch begins and survives a
    /// failing listener.
    pub fn add_message(&mut self, text: impl Into<String>) -> Result<(), ListenerError> {
        self.messages.push(text.into());
        self.registry
            .dispatch(NEW_MESSAGE, &RoomView::new(&self.messages, &self.users))
    }

    /// Appends `name` to the roster, then dispatches on [`NEW_USER`].
    pub fn add_user(&mut self, name: impl Into<String>) -> Result<(), ListenerError> {
        self.users.push(name.into());
        self.registry
            .dispatch(NEW_USER, &RoomView::new(&self.messages, &self.users))
    }

    /// Messages in arrival order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Users in join order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(String::as_str)
    }

    /// Subscribes `listener` to `topic`.
    pub fn register(&mut self, topic: &str, listener: ListenerHandle) {
        self.registry.register(topic, listener);
    }

    /// Removes one occurrence of `listener` from `topic`, matched by
    /// handle identity. Silently does nothing for an unknown topic or
    /// handle.
    pub fn unregister(&mut self, topic: &str, listener: &ListenerHandle) {
        self.registry.unregister(topic, listener);
    }

    pub fn listener_count(&self, topic: &str) -> usize {
        self.registry.listener_count(topic)
    }
}
