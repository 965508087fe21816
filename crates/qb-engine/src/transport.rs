//! The chat transport collaborator.
//!
//! The engine treats all outbound text as opaque payload and never manages
//! connections itself; a transport implementation owns those concerns and
//! exposes the two capabilities the core needs: sending into a channel and
//! suspending until a particular user's next message in a channel.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Opaque user key assigned by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap a transport-assigned user key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque channel key assigned by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    /// Wrap a transport-assigned channel key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// The author.
    pub user: UserId,
    /// The channel it arrived in.
    pub channel: ChannelId,
    /// Raw message text.
    pub text: String,
}

impl IncomingMessage {
    /// Convenience constructor.
    pub fn new(user: UserId, channel: ChannelId, text: impl Into<String>) -> Self {
        Self {
            user,
            channel,
            text: text.into(),
        }
    }
}

/// The transport failed to deliver.
#[derive(Debug, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// The message transport collaborator.
pub trait Transport {
    /// Send text into a channel.
    fn send(
        &mut self,
        channel: &ChannelId,
        text: &str,
    ) -> impl Future<Output = Result<(), TransportError>>;

    /// Suspend until the given user's next message in the given channel, or
    /// until the timeout elapses (`None`).
    fn await_reply(
        &mut self,
        user: &UserId,
        channel: &ChannelId,
        timeout: Duration,
    ) -> impl Future<Output = Option<IncomingMessage>>;
}
