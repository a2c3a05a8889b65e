//! Core Command trait
//!
//! Defines the interface every chat command implements. Handlers receive the
//! explicit [`BotContext`] and the invocation; there is no ambient state.

use crate::context::BotContext;
use crate::reply::Reply;
use apibot_core::{CommandDefinition, CommandInvocation, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// Core trait for all chat commands
#[async_trait]
pub trait Command: Send + Sync {
    /// Get the command name (unique identifier, the public contract)
    fn name(&self) -> &str;

    /// Get human-readable description
    fn description(&self) -> &str;

    /// Get JSON schema for the command arguments
    fn input_schema(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    /// Execute the command with the given invocation
    async fn execute(&self, ctx: &BotContext, invocation: &CommandInvocation) -> Result<Reply>;

    /// Definition registered with the chat platform
    fn definition(&self) -> CommandDefinition {
        CommandDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Type alias for boxed commands
pub type BoxedCommand = Arc<dyn Command>;
