pub mod config;
pub mod domain;
pub mod message;
pub mod notifier;
pub mod transport;
pub mod utils;

pub use domain::StateChange;
pub use message::{default_message, formatter, MessageFormatter};
pub use notifier::{BotClient, Notifier, TelegramBot, DEFAULT_WAIT_FOR_RESPONSE_MS};
pub use transport::{SecureTransport, TELEGRAM_CERTIFICATE_ROOT};

use config::AppConfig;

use anyhow::Result;
use tracing::info;
use utils::mask_token;

/// Builds a Telegram notifier from `config` and sends one state change.
///
/// Only setup failures are returned; delivery itself is best-effort.
pub async fn notify(config: &AppConfig, change: &StateChange) -> Result<()> {
    let mut notifier = Notifier::new()?;
    notifier.set_response_timeout(config.wait_for_response_ms);
    notifier.configure(
        config.telegram_bot_token.as_str(),
        config.telegram_chat_id.as_str(),
        None,
    );
    info!(
        "📱 Telegram notifier ready (bot {}, chat {})",
        mask_token(&config.telegram_bot_token),
        config.telegram_chat_id
    );

    notifier.send_state_change(change).await;
    Ok(())
}
