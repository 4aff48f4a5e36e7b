//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PUBLIC_BASE_URL` - Fixed landing-page base; when unset, the base is
//!   derived from each request's `Host` header
//! - `SHRINKME_API_URL` - Shortening API endpoint (default: `https://shrinkme.io/api`)
//! - `SHRINKME_API_KEY` - Bearer key for the shortening API; without it every
//!   call falls back to a fabricated demo URL
//! - `SHORTENER_TIMEOUT_SECONDS` - Outbound HTTP ceiling (default: 5)
//! - `SHORTENER_FAIL_OPEN` - Mask shortener failures with fallback URLs
//!   (default: `true`)
//! - `RESOLVER_DELAY_MS` - Artificial delay of the stub resolver (default: 1000)
//! - `PING_MESSAGE` - Payload of `GET /api/ping` (default: `ping`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When set, overrides the landing-page base derived from request headers.
    pub public_base_url: Option<String>,
    pub shrinkme_api_url: String,
    pub shrinkme_api_key: Option<String>,
    /// Ceiling for outbound shortener calls, in seconds.
    pub shortener_timeout_seconds: u64,
    /// When true, shortener failures are masked with fabricated demo URLs.
    pub shortener_fail_open: bool,
    /// Artificial latency of the stub resolver, in milliseconds.
    pub resolver_delay_ms: u64,
    pub ping_message: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| v.trim_end_matches('/').to_string());

        let shrinkme_api_url =
            env::var("SHRINKME_API_URL").unwrap_or_else(|_| "https://shrinkme.io/api".to_string());
        let shrinkme_api_key = env::var("SHRINKME_API_KEY").ok().filter(|v| !v.is_empty());

        let shortener_timeout_seconds = env::var("SHORTENER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let shortener_fail_open = env::var("SHORTENER_FAIL_OPEN")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let resolver_delay_ms = env::var("RESOLVER_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let ping_message = env::var("PING_MESSAGE").unwrap_or_else(|_| "ping".to_string());

        Self {
            listen_addr,
            log_level,
            log_format,
            public_base_url,
            shrinkme_api_url,
            shrinkme_api_key,
            shortener_timeout_seconds,
            shortener_fail_open,
            resolver_delay_ms,
            ping_message,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - URLs are not http(s)
    /// - the shortener timeout is zero or above 60 seconds
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.shrinkme_api_url.starts_with("http://")
            && !self.shrinkme_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "SHRINKME_API_URL must start with 'http://' or 'https://', got '{}'",
                self.shrinkme_api_url
            );
        }

        if let Some(ref base) = self.public_base_url
            && !base.starts_with("http://")
            && !base.starts_with("https://")
        {
            anyhow::bail!(
                "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                base
            );
        }

        if self.shortener_timeout_seconds == 0 || self.shortener_timeout_seconds > 60 {
            anyhow::bail!(
                "SHORTENER_TIMEOUT_SECONDS must be between 1 and 60, got {}",
                self.shortener_timeout_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        match &self.public_base_url {
            Some(base) => tracing::info!("  Public base URL: {}", base),
            None => tracing::info!("  Public base URL: derived from Host header"),
        }

        tracing::info!("  ShrinkMe API: {}", self.shrinkme_api_url);
        match &self.shrinkme_api_key {
            Some(key) => tracing::info!("  ShrinkMe key: {}", mask_api_key(key)),
            None => tracing::info!("  ShrinkMe key: not set (fallback URLs only)"),
        }
        tracing::info!("  Shortener fail-open: {}", self.shortener_fail_open);
        tracing::info!(
            "  Shortener timeout: {}s",
            self.shortener_timeout_seconds
        );
        tracing::info!("  Resolver delay: {}ms", self.resolver_delay_ms);
    }
}

/// Masks an API key for logging, keeping only a short prefix.
fn mask_api_key(key: &str) -> String {
    if key.len() <= 4 {
        "***".to_string()
    } else {
        format!("{}***", &key[..4])
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
