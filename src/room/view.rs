/// Read-only borrow of a room's state, handed to every `notify` call.
///
/// Events carry no payload; listeners read current state through this view
/// instead. The borrow lives only for the duration of the dispatch, which
/// keeps the room immutable while any listener is running.
pub struct RoomView<'a> {
    messages: &'a [String],
    users: &'a [String],
}

impl<'a> RoomView<'a> {
    pub(crate) fn new(messages: &'a [String], users: &'a [String]) -> Self {
        Self { messages, users }
    }

    /// Messages in arrival order.
    pub fn messages(&self) -> impl Iterator<Item = &'a str> {
        self.messages.iter().map(String::as_str)
    }

    /// Users in join order. Always empty for broadcast rooms.
    pub fn users(&self) -> impl Iterator<Item = &'a str> {
        self.users.iter().map(String::as_str)
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
