//! Gateway wire format
//!
//! Text frames carrying tagged JSON, one event per frame. `GatewayEvent` is
//! what the platform sends us; `ClientFrame` is what we send back.

use apibot_chat::Reply;
use apibot_core::CommandInvocation;
use serde::{Deserialize, Serialize};

/// Inbound event from the platform gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayEvent {
    /// Sent once after a successful identify
    Welcome {
        session_id: String,
        heartbeat_interval_ms: u64,
    },
    /// Acknowledges a heartbeat we sent
    HeartbeatAck { nonce: u64 },
    /// A user invoked one of the registered commands
    Command { invocation: CommandInvocation },
}

/// Outbound frame to the platform gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// First frame after connecting; authenticates the session
    Identify { token: String },
    /// Periodic liveness probe; the ack round-trip is the ping latency
    Heartbeat { nonce: u64 },
    /// The reply to a command invocation
    Reply { channel: String, reply: Reply },
}
