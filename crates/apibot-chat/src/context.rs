//! Explicit per-bot context passed to every command handler

use apibot_core::{CommandDefinition, LatencyTracker, Result, Settings};
use apibot_http::ApiClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Seam to the chat platform's command registration endpoint.
///
/// Implemented by the gateway registrar; tests substitute their own.
#[async_trait]
pub trait CommandSync: Send + Sync {
    /// Replace the platform's registered command set, returning how many
    /// commands are now registered.
    async fn sync_commands(&self, definitions: &[CommandDefinition]) -> Result<usize>;
}

/// Application context handed to each command handler.
///
/// Holds the configuration, the shared API client, the gateway latency cell,
/// and the registration seam. Built once at startup; cloned per session.
#[derive(Clone)]
pub struct BotContext {
    pub settings: Settings,
    pub api: ApiClient,
    pub latency: LatencyTracker,
    pub command_sync: Arc<dyn CommandSync>,
}

impl BotContext {
    pub fn new(
        settings: Settings,
        api: ApiClient,
        latency: LatencyTracker,
        command_sync: Arc<dyn CommandSync>,
    ) -> Self {
        Self {
            settings,
            api,
            latency,
            command_sync,
        }
    }

    /// Whether the sender is the configured owner.
    pub fn is_owner(&self, sender: &str) -> bool {
        self.settings.is_owner(sender)
    }
}
