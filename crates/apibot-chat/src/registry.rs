//! Command registry
//!
//! Maps command names to handlers. The command set is fixed at startup, so
//! this is a plain map with registration-order definition listing.

use crate::command::BoxedCommand;
use apibot_core::CommandDefinition;
use std::collections::HashMap;
use tracing::debug;

/// Registry of chat commands
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, BoxedCommand>,
    order: Vec<String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. A duplicate name replaces the previous handler.
    pub fn register(&mut self, command: BoxedCommand) {
        let name = command.name().to_string();
        if self.commands.insert(name.clone(), command).is_none() {
            self.order.push(name.clone());
        }
        debug!("Registered command: {}", name);
    }

    /// Get a command by name.
    pub fn get(&self, name: &str) -> Option<&BoxedCommand> {
        self.commands.get(name)
    }

    /// List definitions in registration order.
    pub fn definitions(&self) -> Vec<CommandDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .map(|command| command.definition())
            .collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
