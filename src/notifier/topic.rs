/// Identifier a subscription is keyed on.
pub type Topic = String;

/// Topic fired after a message lands in the log.
pub const NEW_MESSAGE: &str = "NEWMESSAGE";

/// Topic fired after a user joins the roster.
pub const NEW_USER: &str = "NEWUSER";

/// Implicit topic a broadcast list notifies with.
///
/// Carries no routing information; broadcast delivery ignores topics
/// entirely and this value only fills the `topic` slot of
/// [`Listener::notify`](crate::notifier::Listener::notify).
pub const BROADCAST: &str = "";
