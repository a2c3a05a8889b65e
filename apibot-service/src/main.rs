//! apibot service
//!
//! Connects the command dispatcher to the chat-platform gateway:
//! - loads settings (bot token + target API base URL are required)
//! - builds the command registry and explicit bot context
//! - runs the gateway session, reconnecting on failure

use anyhow::{Context, Result};
use apibot_chat::{build_registry, BotContext, CommandSync, Dispatcher};
use apibot_core::{LatencyTracker, Settings};
use apibot_gateway::{CommandRegistrar, GatewaySession};
use apibot_http::ApiClient;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Delay before reconnecting after a gateway failure.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

#[derive(Parser, Debug)]
#[command(name = "apibot-service")]
#[command(about = "Chat bot relaying a remote API's OpenAPI operations")]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the target API base URL
    #[arg(long)]
    api_base_url: Option<String>,

    /// Override the chat-platform gateway URL
    #[arg(long)]
    gateway_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Register the command set with the platform and exit
    Sync,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("apibot_service=info".parse()?)
                .add_directive("apibot_chat=info".parse()?)
                .add_directive("apibot_gateway=info".parse()?),
        )
        .init();

    let args = Args::parse();

    // Missing bot_token or api_base_url aborts here, before any command runs.
    let mut settings = Settings::load().context("failed to load configuration")?;
    if let Some(url) = args.api_base_url {
        settings.api_base_url = url;
    }
    if let Some(url) = args.gateway_url {
        settings.gateway_url = url;
    }
    info!(api_base_url = %settings.api_base_url, "Configuration loaded");

    let timeout = Duration::from_secs(settings.request_timeout_secs);
    let api = ApiClient::new(&settings.api_base_url, timeout)?;
    let registrar = Arc::new(CommandRegistrar::new(
        &settings.platform_api_url,
        &settings.bot_token,
        timeout,
    )?);

    let dispatcher = Arc::new(Dispatcher::new(build_registry()));
    let latency = LatencyTracker::new();
    let context = BotContext::new(settings.clone(), api, latency.clone(), registrar.clone());

    if let Some(Commands::Sync) = args.command {
        let count = registrar.sync_commands(&dispatcher.definitions()).await?;
        info!(count, "Synced commands");
        return Ok(());
    }

    loop {
        let session = GatewaySession::new(
            &settings.gateway_url,
            &settings.bot_token,
            dispatcher.clone(),
            context.clone(),
            latency.clone(),
        );

        match session.run().await {
            Ok(()) => info!("Gateway session ended, reconnecting"),
            Err(e) => error!(error = %e, "Gateway session failed, reconnecting"),
        }

        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}
