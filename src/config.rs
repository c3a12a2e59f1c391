use crate::constants::{
    DEFAULT_GATEWAY_HOST, DEFAULT_GATEWAY_PORT, DEFAULT_HISTORY_DAYS, DEFAULT_HISTORY_TICKER,
    DEFAULT_ISS_BASE_URL, DEFAULT_ISS_TIMEOUT, DEFAULT_TICKERS,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the gateway
pub struct Config {
    /// Outbound ISS API configuration
    pub iss: IssApiConfig,
    /// Inbound HTTP server configuration
    pub server: ServerConfig,
    /// Comma-separated ticker set used when a quotes request names none
    pub default_tickers: String,
    /// Ticker used when a history request names none
    pub default_history_ticker: String,
    /// History window in days used when a history request names none
    pub default_history_days: i64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the outbound ISS API
pub struct IssApiConfig {
    /// Base URL of the MOEX ISS API
    pub base_url: String,
    /// Timeout in seconds for ISS requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the inbound HTTP server
pub struct ServerConfig {
    /// Host the gateway binds to
    pub host: String,
    /// Port the gateway binds to
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables, falling back to
    /// the crate defaults for anything unset
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            iss: IssApiConfig {
                base_url: get_env_or_default(
                    "MOEX_ISS_BASE_URL",
                    String::from(DEFAULT_ISS_BASE_URL),
                ),
                timeout: get_env_or_default("MOEX_ISS_TIMEOUT", DEFAULT_ISS_TIMEOUT),
            },
            server: ServerConfig {
                host: get_env_or_default("GATEWAY_HOST", String::from(DEFAULT_GATEWAY_HOST)),
                port: get_env_or_default("GATEWAY_PORT", DEFAULT_GATEWAY_PORT),
            },
            default_tickers: get_env_or_default(
                "GATEWAY_DEFAULT_TICKERS",
                String::from(DEFAULT_TICKERS),
            ),
            default_history_ticker: get_env_or_default(
                "GATEWAY_HISTORY_TICKER",
                String::from(DEFAULT_HISTORY_TICKER),
            ),
            default_history_days: get_env_or_default("GATEWAY_HISTORY_DAYS", DEFAULT_HISTORY_DAYS),
        }
    }

    /// Splits the configured default ticker set into individual symbols
    pub fn default_ticker_list(&self) -> Vec<String> {
        self.default_tickers
            .split(',')
            .map(str::to_string)
            .collect()
    }

    /// Address the inbound server binds to, as `host:port`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
