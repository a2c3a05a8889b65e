//! Outbound HTTP client for the relayed API

pub mod client;

pub use client::ApiClient;
