use std::env;

use crate::notifier::DEFAULT_WAIT_FOR_RESPONSE_MS;
use anyhow::{anyhow, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub wait_for_response_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(None, None)
    }

    /// Reads the environment, letting explicit values win over it. The chat id
    /// is only required from the environment when no override is given.
    pub fn from_env_with(
        chat_id: Option<String>,
        wait_for_response_ms: Option<u64>,
    ) -> Result<Self> {
        let telegram_bot_token = required("TELEGRAM_BOT_TOKEN")?;
        let telegram_chat_id = match chat_id.map(|id| id.trim().to_string()) {
            Some(id) if !id.is_empty() => id,
            _ => required("TELEGRAM_CHAT_ID")?,
        };
        let wait_for_response_ms = wait_for_response_ms.unwrap_or_else(|| {
            parse_wait_for_response(env::var("TELEGRAM_WAIT_FOR_RESPONSE_MS").ok().as_deref())
        });

        Ok(Self {
            telegram_bot_token,
            telegram_chat_id,
            wait_for_response_ms,
        })
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(anyhow!("{name} must be set in .env")),
    }
}

pub fn parse_wait_for_response(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_WAIT_FOR_RESPONSE_MS)
}
