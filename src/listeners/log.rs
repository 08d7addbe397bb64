use tracing::{debug, info};

use crate::notifier::Listener;
use crate::room::RoomView;
use crate::utils::error::ListenerError;

/// Listener that writes every room event to the log.
///
/// Useful for demos and for auditing a room without rendering anything.
#[derive(Debug, Default)]
pub struct LogListener;

impl LogListener {
    pub fn new() -> Self {
        Self
    }
}

impl Listener for LogListener {
    fn notify(&self, topic: &str, room: &RoomView<'_>) -> Result<(), ListenerError> {
        info!(
            topic,
            messages = room.message_count(),
            users = room.user_count(),
            "room event"
        );
        Ok(())
    }

    fn close(&self) {
        debug!("log listener closed");
    }
}
