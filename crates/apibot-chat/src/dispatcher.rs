//! Command dispatcher
//!
//! Resolves an invocation to its handler and converts every failure into an
//! error reply at this boundary. Exactly one reply leaves `dispatch` per
//! invocation; nothing propagates past it.

use crate::context::BotContext;
use crate::registry::CommandRegistry;
use crate::reply::Reply;
use apibot_core::{CommandDefinition, CommandInvocation, Error};
use tracing::{debug, warn};

/// Stateless dispatcher over a fixed command registry.
pub struct Dispatcher {
    registry: CommandRegistry,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Definitions of every registered command, for platform registration.
    pub fn definitions(&self) -> Vec<CommandDefinition> {
        self.registry.definitions()
    }

    /// Dispatch one invocation and produce its reply.
    pub async fn dispatch(&self, ctx: &BotContext, invocation: &CommandInvocation) -> Reply {
        debug!(
            command = %invocation.command,
            sender = %invocation.sender,
            "Dispatching command"
        );

        let Some(command) = self.registry.get(&invocation.command) else {
            warn!(command = %invocation.command, "Unknown command");
            return Reply::from_error(
                &invocation.command,
                &Error::UnknownCommand(invocation.command.clone()),
            );
        };

        match command.execute(ctx, invocation).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(command = %invocation.command, error = %err, "Command failed");
                Reply::from_error(command.name(), &err)
            }
        }
    }
}
