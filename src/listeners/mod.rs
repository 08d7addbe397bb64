//! Bundled [`Listener`](crate::notifier::Listener) implementations.

pub mod log;

pub use log::LogListener;
