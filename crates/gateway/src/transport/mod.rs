//! Event transport layer
//!
//! Gateways publish normalized events on `ChannelPublisher`s; the engine
//! consumes them through the `Subscriber` trait. Tokio broadcast channels
//! back both sides in-process.

pub mod channel;
pub mod config;

pub use config::Subjects;

use crate::error::TransportError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Subscriber - receives messages from a subject pattern
#[async_trait]
pub trait Subscriber<M>: Send
where
    M: DeserializeOwned + Send,
{
    /// Wait for the next message
    async fn next(&mut self) -> Result<M, TransportError>;

    /// Try to receive without blocking (returns None if no message available)
    fn try_next(&mut self) -> Result<Option<M>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ensure the trait is object-safe
    fn _assert_subscriber_object_safe(_: &mut dyn Subscriber<String>) {}
}
