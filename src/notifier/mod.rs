mod bot;
mod telegram;

pub use bot::BotClient;
pub use telegram::{TelegramBot, DEFAULT_BOT_WAIT_MS};

use crate::domain::StateChange;
use crate::message::{default_message, MessageFormatter};
use crate::transport::SecureTransport;
use crate::utils::mask_token;
use anyhow::Result;
use tracing::{debug, info};

pub const DEFAULT_WAIT_FOR_RESPONSE_MS: u64 = 8000;

/// Sends state-change notifications to a single chat.
///
/// Delivery is best-effort: [`Notifier::send_message`] never reports failure
/// to the caller. Call [`Notifier::configure`] before sending; until then the
/// client is bound to an empty token and chat id.
pub struct Notifier<B: BotClient = TelegramBot> {
    bot_token: String,
    chat_id: String,
    wait_for_response: u64,
    transport: B::Transport,
    client: B,
    formatter: Option<MessageFormatter>,
}

impl Notifier<TelegramBot> {
    /// Builds a notifier whose transport trusts only the Telegram root certificate.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(SecureTransport::telegram()?))
    }
}

impl<B: BotClient> Notifier<B> {
    pub fn with_transport(transport: B::Transport) -> Self {
        let mut client = B::bind("", &transport);
        client.set_wait_for_response(DEFAULT_WAIT_FOR_RESPONSE_MS);

        Self {
            bot_token: String::new(),
            chat_id: String::new(),
            wait_for_response: DEFAULT_WAIT_FOR_RESPONSE_MS,
            transport,
            client,
            formatter: None,
        }
    }

    /// Sets the credentials and destination, rebinding the client to `token`.
    /// Replaces the formatter, clearing it when `formatter` is `None`.
    pub fn configure(
        &mut self,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        formatter: Option<MessageFormatter>,
    ) {
        self.bot_token = token.into();
        self.chat_id = chat_id.into();
        self.client = B::bind(&self.bot_token, &self.transport);
        self.client.set_wait_for_response(self.wait_for_response);
        self.formatter = formatter;

        debug!(
            "Notifier configured for chat {} with token {}",
            self.chat_id,
            mask_token(&self.bot_token)
        );
    }

    pub fn set_response_timeout(&mut self, millis: u64) {
        self.wait_for_response = millis;
        self.client.set_wait_for_response(millis);
    }

    pub fn set_formatter(&mut self, formatter: Option<MessageFormatter>) {
        self.formatter = formatter;
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    pub fn response_timeout(&self) -> u64 {
        self.wait_for_response
    }

    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// The text [`Notifier::send_message`] would send for these arguments.
    pub fn compose(&self, label: &str, state: &str, duration: &str) -> String {
        match &self.formatter {
            Some(f) => f(label, state, duration),
            None => default_message(label, state, duration),
        }
    }

    /// Formats and dispatches one message. Pass `""` as `duration` to omit it.
    pub async fn send_message(&self, label: &str, state: &str, duration: &str) {
        let message = self.compose(label, state, duration);

        match self.client.send_message(&self.chat_id, &message, "").await {
            Ok(true) => info!("Sent Telegram message: {}", message),
            Ok(false) => debug!("Telegram message not accepted for chat {}", self.chat_id),
            Err(e) => debug!("Telegram message not sent to chat {}: {:#}", self.chat_id, e),
        }
    }

    pub async fn send_state_change(&self, change: &StateChange) {
        self.send_message(&change.label, &change.state, change.duration_str())
            .await
    }
}
