use std::time::Duration;

use anyhow::{ensure, Context, Result};
use reqwest::{Certificate, Client};

/// Root CA for `api.telegram.org` (Go Daddy Root Certificate Authority - G2).
pub const TELEGRAM_CERTIFICATE_ROOT: &[u8] = include_bytes!("../certs/telegram_root.pem");

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Upper bound on TCP connect plus TLS handshake, separate from the bot's reply wait.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Hard cap on a single request, including any time spent after the caller stopped waiting.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTPS client that only trusts the root certificate it was built with.
#[derive(Debug, Clone)]
pub struct SecureTransport {
    http: Client,
    api_base: String,
}

impl SecureTransport {
    pub fn telegram() -> Result<Self> {
        Self::with_root_certificate(TELEGRAM_CERTIFICATE_ROOT, TELEGRAM_API_BASE)
    }

    pub fn with_root_certificate(pem: &[u8], api_base: impl Into<String>) -> Result<Self> {
        // rustls silently skips input without PEM blocks, which would leave no trust anchor.
        let text = std::str::from_utf8(pem).context("Root certificate is not valid UTF-8")?;
        ensure!(
            text.contains("-----BEGIN CERTIFICATE-----"),
            "Root certificate does not contain a PEM certificate block"
        );

        let certificate =
            Certificate::from_pem(pem).context("Failed to parse root certificate PEM")?;
        let http = Client::builder()
            .tls_built_in_root_certs(false)
            .add_root_certificate(certificate)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTPS client")?;

        Ok(Self::from_client(http, api_base))
    }

    pub fn from_client(http: Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { http, api_base }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}
