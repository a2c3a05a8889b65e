//! Command dispatch and reply formatting for apibot
//!
//! # Modules
//!
//! - `command`: the `Command` trait
//! - `commands`: the built-in command set
//! - `context`: explicit per-bot context and the `CommandSync` seam
//! - `dispatcher`: invocation -> reply, error mapping at one boundary
//! - `registry`: name -> command map
//! - `reply`: the reply structure every command produces

pub mod command;
pub mod commands;
pub mod context;
pub mod dispatcher;
pub mod registry;
pub mod reply;

// Re-exports
pub use command::{BoxedCommand, Command};
pub use commands::build_registry;
pub use context::{BotContext, CommandSync};
pub use dispatcher::Dispatcher;
pub use registry::CommandRegistry;
pub use reply::{Reply, ReplyColor, ReplyField};
