//! Console transport: stdout for sends, stdin lines for replies.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use qb_engine::{ChannelId, IncomingMessage, Transport, TransportError, UserId};

/// A [`Transport`] over the local terminal. One user, one channel.
pub struct ConsoleTransport {
    user: UserId,
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleTransport {
    /// Bind the console to a user key.
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Read the next non-empty line as an inbound message. `None` on EOF.
    pub async fn next_message(&mut self, channel: &ChannelId) -> Option<IncomingMessage> {
        loop {
            let line = self.lines.next_line().await.ok().flatten()?;
            let line = line.trim();
            if !line.is_empty() {
                return Some(IncomingMessage::new(
                    self.user.clone(),
                    channel.clone(),
                    line,
                ));
            }
        }
    }
}

impl Transport for ConsoleTransport {
    async fn send(&mut self, _channel: &ChannelId, text: &str) -> Result<(), TransportError> {
        println!("{text}\n");
        Ok(())
    }

    async fn await_reply(
        &mut self,
        user: &UserId,
        channel: &ChannelId,
        timeout: Duration,
    ) -> Option<IncomingMessage> {
        // EOF (closed stdin) reads as an immediate timeout.
        match tokio::time::timeout(timeout, self.lines.next_line()).await {
            Ok(Ok(Some(line))) => Some(IncomingMessage::new(
                user.clone(),
                channel.clone(),
                line.trim(),
            )),
            _ => None,
        }
    }
}
