//! `sync` - re-register the command set with the chat platform
//!
//! Owner-only. The definitions snapshot is taken at registry construction;
//! the command set is fixed for the life of the process.

use crate::command::Command;
use crate::context::BotContext;
use crate::reply::Reply;
use apibot_core::{CommandDefinition, CommandInvocation, Error, Result};
use async_trait::async_trait;
use tracing::info;

pub struct SyncCommand {
    definitions: Vec<CommandDefinition>,
}

impl SyncCommand {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        Self { definitions }
    }
}

#[async_trait]
impl Command for SyncCommand {
    fn name(&self) -> &str {
        "sync"
    }

    fn description(&self) -> &str {
        "Re-register the bot's commands with the chat platform (owner only)"
    }

    async fn execute(&self, ctx: &BotContext, invocation: &CommandInvocation) -> Result<Reply> {
        if !ctx.is_owner(&invocation.sender) {
            return Err(Error::unauthorized(
                "sync is restricted to the bot owner",
            ));
        }

        let count = ctx.command_sync.sync_commands(&self.definitions).await?;
        info!(count, "Synced commands with the platform");

        Ok(Reply::success("Sync").with_body(format!("Synced {count} commands globally")))
    }
}
