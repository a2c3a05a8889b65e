//! Settings loaded from `config/default.toml` and `APIBOT_*` environment
//! variables. The bot token and API base URL are required; everything else
//! has a default.

use crate::error::{Error, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Default request timeout for outbound API calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default chat-platform gateway URL.
pub const DEFAULT_GATEWAY_URL: &str = "wss://gateway.chat.invalid/ws";

/// Default chat-platform REST API URL.
pub const DEFAULT_PLATFORM_API_URL: &str = "https://api.chat.invalid";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Bot authentication token for the chat platform
    #[serde(default)]
    pub bot_token: String,

    /// Base URL of the target API (the service whose routes we relay)
    #[serde(default)]
    pub api_base_url: String,

    /// Chat-platform gateway WebSocket URL
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// Chat-platform REST API URL (command registration)
    #[serde(default = "default_platform_api_url")]
    pub platform_api_url: String,

    /// Identity permitted to run privileged commands (`sync`)
    #[serde(default)]
    pub owner: Option<String>,

    /// Timeout applied to each outbound API request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_gateway_url() -> String {
    DEFAULT_GATEWAY_URL.to_string()
}

fn default_platform_api_url() -> String {
    DEFAULT_PLATFORM_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Settings {
    /// Load settings from `config/default` (if present) and the environment.
    ///
    /// Missing `bot_token` or `api_base_url` is fatal: the bot cannot log in
    /// or reach its target API without them.
    pub fn load() -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("APIBOT"))
            .build()
            .map_err(|e| Error::config(e.to_string()))?;

        let settings: Settings = cfg
            .try_deserialize()
            .map_err(|e| Error::config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.bot_token.is_empty() {
            return Err(Error::config(
                "bot_token is not set (APIBOT_BOT_TOKEN or config file)",
            ));
        }
        if self.api_base_url.is_empty() {
            return Err(Error::config(
                "api_base_url is not set (APIBOT_API_BASE_URL or config file)",
            ));
        }
        Ok(())
    }

    /// Whether the given sender identity is the configured owner.
    pub fn is_owner(&self, sender: &str) -> bool {
        self.owner.as_deref() == Some(sender)
    }
}
