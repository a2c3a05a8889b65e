//! Command registration against the platform REST API
//!
//! `PUT {platform_api}/bot/commands` replaces the bot's registered command
//! set. Used at startup and by the owner-only `sync` command through the
//! `CommandSync` seam.

use apibot_chat::CommandSync;
use apibot_core::{CommandDefinition, Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SyncResponse {
    count: usize,
}

/// REST client for the platform's command registration endpoint.
pub struct CommandRegistrar {
    client: Client,
    api_url: String,
    token: String,
}

impl CommandRegistrar {
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl CommandSync for CommandRegistrar {
    async fn sync_commands(&self, definitions: &[CommandDefinition]) -> Result<usize> {
        let url = format!("{}/bot/commands", self.api_url);
        debug!(url = %url, count = definitions.len(), "Registering commands");

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(definitions)
            .send()
            .await
            .map_err(|e| Error::gateway(format!("registration request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::status(status.as_u16(), body));
        }

        let result: SyncResponse = response
            .json()
            .await
            .map_err(|e| Error::gateway(format!("bad registration response: {e}")))?;

        Ok(result.count)
    }
}
