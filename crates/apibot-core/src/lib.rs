//! Core types and utilities for apibot
//!
//! # Modules
//!
//! - `config`: Settings loaded from file + environment
//! - `error`: Error types and Result alias
//! - `types`: Common types used across apibot

pub mod config;
pub mod error;
pub mod types;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use types::{CommandDefinition, CommandInvocation, LatencyTracker};
