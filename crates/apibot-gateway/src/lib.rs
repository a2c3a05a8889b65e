//! Chat-platform gateway session and command registration for apibot
//!
//! # Modules
//!
//! - `events`: the gateway wire format
//! - `registrar`: REST command registration (`CommandSync` implementation)
//! - `session`: the WebSocket event loop

pub mod events;
pub mod registrar;
pub mod session;

pub use events::{ClientFrame, GatewayEvent};
pub use registrar::CommandRegistrar;
pub use session::GatewaySession;
