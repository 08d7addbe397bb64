//! Subscription registry and synchronous event dispatch.
//!
//! Two registry shapes share one set of semantics: [`Registry`] routes
//! events by topic string, while [`BroadcastList`] keeps a single list that
//! every event reaches. Under both, listeners run in registration order on
//! the mutating caller's thread, and the same handle may be registered more
//! than once.

pub mod broadcast;
pub mod listener;
pub mod registry;
pub mod topic;

pub use broadcast::BroadcastList;
pub use listener::{Listener, ListenerHandle};
pub use registry::Registry;
pub use topic::{BROADCAST, NEW_MESSAGE, NEW_USER, Topic};
