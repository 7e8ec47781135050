use anyhow::Result;
use async_trait::async_trait;

/// The piece that actually talks to the messaging service.
///
/// A client is bound to one bot token and borrows its connection from a
/// transport owned by the caller; rebinding to a new token means calling
/// [`BotClient::bind`] again with the same transport.
#[async_trait]
pub trait BotClient: Send + Sync {
    type Transport: Send + Sync;

    fn bind(token: &str, transport: &Self::Transport) -> Self
    where
        Self: Sized;

    /// How long a send may block waiting for the server, in milliseconds.
    fn set_wait_for_response(&mut self, millis: u64);

    fn wait_for_response(&self) -> u64;

    /// Returns `Ok(false)` when the service answered but refused the message.
    async fn send_message(&self, chat_id: &str, text: &str, parse_mode: &str) -> Result<bool>;
}
