//! The `error` module defines the error types used within `roomcast`.
//!
//! Listener callbacks are the only failure source in the crate: registry
//! and room operations have no error conditions of their own and surface
//! only what a listener returns.

use thiserror::Error;

/// Failure reported by a listener's `notify` callback.
///
/// A dispatch stops at the first failing listener; listeners later in the
/// registration order are not notified for that event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("listener '{listener}' failed on '{topic}': {reason}")]
pub struct ListenerError {
    listener: String,
    topic: String,
    reason: String,
}

impl ListenerError {
    pub fn new(
        listener: impl Into<String>,
        topic: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            listener: listener.into(),
            topic: topic.into(),
            reason: reason.into(),
        }
    }

    /// Name of the listener that failed.
    pub fn listener(&self) -> &str {
        &self.listener
    }

    /// Topic the failed dispatch was routed on.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
