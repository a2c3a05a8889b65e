//! Common types used across apibot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// A command invocation received from the chat surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandInvocation {
    pub id: String,
    /// Command name as registered with the platform
    pub command: String,
    /// Named arguments supplied by the caller
    #[serde(default)]
    pub arguments: serde_json::Value,
    /// Identity of the invoking user
    pub sender: String,
    /// Channel the reply should be sent to
    pub channel: String,
    /// When the invocation reached the bot
    #[serde(default = "Utc::now")]
    pub received_at: DateTime<Utc>,
}

impl CommandInvocation {
    pub fn new(
        command: impl Into<String>,
        arguments: serde_json::Value,
        sender: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            command: command.into(),
            arguments,
            sender: sender.into(),
            channel: channel.into(),
            received_at: Utc::now(),
        }
    }

    /// Fetch a required string argument by name.
    pub fn string_arg(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).and_then(|v| v.as_str())
    }
}

/// Command definition registered with the chat platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema describing the command arguments
    pub input_schema: serde_json::Value,
}

/// Shared cell holding the most recent gateway round-trip latency.
///
/// Written by the gateway heartbeat, read by the `ping` command. A value of
/// `u64::MAX` means no heartbeat has completed yet.
#[derive(Debug, Clone)]
pub struct LatencyTracker {
    millis: Arc<AtomicU64>,
}

impl LatencyTracker {
    pub fn new() -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(u64::MAX)),
        }
    }

    /// Record a measured round-trip time.
    pub fn record(&self, millis: u64) {
        self.millis.store(millis, Ordering::Relaxed);
    }

    /// Latest measured latency, if any heartbeat has completed.
    pub fn latest_ms(&self) -> Option<u64> {
        match self.millis.load(Ordering::Relaxed) {
            u64::MAX => None,
            ms => Some(ms),
        }
    }
}

impl Default for LatencyTracker {
    fn default() -> Self {
        Self::new()
    }
}
