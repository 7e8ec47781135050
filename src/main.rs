use anyhow::Result;
use clap::Parser;
use telegram_notifier::config::AppConfig;
use telegram_notifier::{notify, StateChange};
use tracing::{info, warn};

/// Send a device state change to a Telegram chat.
#[derive(Debug, Parser)]
#[command(name = "telegram-notifier", version)]
struct Cli {
    /// Device or area name, e.g. "first_floor"
    label: String,

    /// New state, e.g. "on" or "open"
    state: String,

    /// Seconds spent in the previous state
    duration: Option<String>,

    /// Overrides TELEGRAM_CHAT_ID
    #[arg(long)]
    chat_id: Option<String>,

    /// Overrides TELEGRAM_WAIT_FOR_RESPONSE_MS
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match dotenv::dotenv() {
        Ok(path) => info!("📄 Loaded .env from {:?}", path),
        Err(e) => warn!("⚠️  Could not load .env file: {}", e),
    }

    let cli = Cli::parse();

    let config = AppConfig::from_env_with(cli.chat_id, cli.timeout_ms)?;

    let mut change = StateChange::new(cli.label, cli.state);
    if let Some(duration) = cli.duration {
        change = change.with_duration(duration);
    }

    notify(&config, &change).await
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_label_and_state() {
        let cli = Cli::try_parse_from(["telegram-notifier", "pump", "on"]).unwrap();
        assert_eq!(cli.label, "pump");
        assert_eq!(cli.state, "on");
        assert_eq!(cli.duration, None);
        assert_eq!(cli.chat_id, None);
    }

    #[test]
    fn parses_duration_and_overrides() {
        let cli = Cli::try_parse_from([
            "telegram-notifier",
            "door",
            "open",
            "45",
            "--chat-id",
            "-100123",
            "--timeout-ms",
            "3000",
        ])
        .unwrap();
        assert_eq!(cli.duration.as_deref(), Some("45"));
        assert_eq!(cli.chat_id.as_deref(), Some("-100123"));
        assert_eq!(cli.timeout_ms, Some(3000));
    }

    #[test]
    fn rejects_missing_state() {
        assert!(Cli::try_parse_from(["telegram-notifier", "pump"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let result =
            Cli::try_parse_from(["telegram-notifier", "pump", "on", "--timeout-ms", "soon"]);
        assert!(result.is_err());
    }
}
