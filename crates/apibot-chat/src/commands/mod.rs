//! Built-in command set

pub mod call_api;
pub mod list_operations;
pub mod ping;
pub mod sync;

pub use call_api::CallApiCommand;
pub use list_operations::{ListOperationsCommand, OPENAPI_PATH};
pub use ping::{LatencyTier, PingCommand};
pub use sync::SyncCommand;

use crate::command::{BoxedCommand, Command};
use crate::registry::CommandRegistry;
use std::sync::Arc;

/// Build the standard registry: `ping`, `list_operations`, `call_api`, `sync`.
///
/// The `sync` command carries a definitions snapshot of the full set,
/// including itself, so registration always reflects what the bot serves.
pub fn build_registry() -> CommandRegistry {
    let commands: Vec<BoxedCommand> = vec![
        Arc::new(PingCommand),
        Arc::new(ListOperationsCommand),
        Arc::new(CallApiCommand),
    ];

    let mut definitions: Vec<_> = commands.iter().map(|c| c.definition()).collect();

    let sync = SyncCommand::new(Vec::new());
    definitions.push(sync.definition());

    let mut registry = CommandRegistry::new();
    for command in commands {
        registry.register(command);
    }
    registry.register(Arc::new(SyncCommand::new(definitions)));
    registry
}
