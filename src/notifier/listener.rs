use std::sync::Arc;

use crate::room::RoomView;
use crate::utils::error::ListenerError;

/// A subscriber that reacts to room events.
///
/// Events carry no payload. `notify` receives the topic that fired and a
/// read-only view of the room's state at dispatch time; implementations
/// re-read whatever they need through the view.
pub trait Listener: Send + Sync {
    /// Reacts to an event on `topic`.
    ///
    /// Called synchronously on the thread that mutated the room, in
    /// registration order. Returning an error aborts the rest of the
    /// fan-out for this event and surfaces the error to the mutating
    /// caller; the state change itself is already committed.
    fn notify(&self, topic: &str, room: &RoomView<'_>) -> Result<(), ListenerError>;

    /// Teardown hook invoked by the listener's owner when it is retired.
    ///
    /// The registry never calls this on its own, and a closed listener
    /// keeps receiving events until the owner unregisters it. Owners
    /// should unregister from every topic and room before or during close.
    fn close(&self) {}
}

/// Shared handle a registry stores for dispatch.
///
/// Subscription identity is the handle's allocation: two clones of one
/// `Arc` denote the same subscription, two separately built listeners
/// never do, however equal their fields are.
pub type ListenerHandle = Arc<dyn Listener>;
