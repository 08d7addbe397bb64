//! # Roomcast
//!
//! `roomcast` is a minimalist, in-process publish/subscribe notifier built with Rust.
//! Chat-room subjects hold state (a running message log and, for the topic
//! variant, a user roster) and synchronously fan change notifications out to
//! registered listeners.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `notifier`: The central component that manages subscriptions and event dispatch.
//! - `room`: The stateful subjects that own a registry and trigger dispatch on mutation.
//! - `listeners`: Bundled listener implementations, such as a tracing-backed log listener.
//! - `config`: Handles loading and managing configuration.
//! - `utils`: Contains shared utilities, such as error types and logging setup.

pub mod config;
pub mod listeners;
pub mod notifier;
pub mod room;
pub mod utils;
