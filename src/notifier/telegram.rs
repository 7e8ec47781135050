use std::time::Duration;

use crate::notifier::BotClient;
use crate::transport::SecureTransport;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tracing::debug;

pub const DEFAULT_BOT_WAIT_MS: u64 = 1500;

/// Telegram Bot API client for the `sendMessage` endpoint.
#[derive(Debug, Clone)]
pub struct TelegramBot {
    bot_token: String,
    transport: SecureTransport,
    wait_for_response: u64,
}

impl TelegramBot {
    fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.transport.api_base(),
            self.bot_token,
            method
        )
    }
}

#[async_trait]
impl BotClient for TelegramBot {
    type Transport = SecureTransport;

    fn bind(token: &str, transport: &SecureTransport) -> Self {
        Self {
            bot_token: token.to_string(),
            transport: transport.clone(),
            wait_for_response: DEFAULT_BOT_WAIT_MS,
        }
    }

    fn set_wait_for_response(&mut self, millis: u64) {
        self.wait_for_response = millis;
    }

    fn wait_for_response(&self) -> u64 {
        self.wait_for_response
    }

    async fn send_message(&self, chat_id: &str, text: &str, parse_mode: &str) -> Result<bool> {
        let mut payload = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });
        if !parse_mode.is_empty() {
            payload["parse_mode"] = serde_json::Value::String(parse_mode.to_string());
        }

        debug!(chat_id, wait_ms = self.wait_for_response, "Sending Telegram message");

        let request = self
            .transport
            .http()
            .post(self.endpoint("sendMessage"))
            .json(&payload);

        // The wait only bounds how long we block for the reply. The request
        // keeps going in the background once it has been handed off.
        let in_flight = tokio::spawn(async move {
            let response = request.send().await.context("Telegram request failed")?;
            let status = response.status();
            let body: serde_json::Value = response
                .json()
                .await
                .context("Telegram response was not valid JSON")?;
            Ok::<_, anyhow::Error>((status, body))
        });

        let (status, body) =
            tokio::time::timeout(Duration::from_millis(self.wait_for_response), in_flight)
                .await
                .map_err(|_| {
                    anyhow!(
                        "No response from Telegram within {} ms",
                        self.wait_for_response
                    )
                })?
                .context("Telegram request task failed")??;

        if body.get("ok").and_then(|ok| ok.as_bool()) == Some(true) {
            return Ok(true);
        }

        let description = body
            .get("description")
            .and_then(|d| d.as_str())
            .unwrap_or("Unknown error");
        debug!("Telegram rejected message ({}): {}", status, description);
        Ok(false)
    }
}
