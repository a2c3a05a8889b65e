//! `ping` - report gateway latency with a severity tier

use crate::command::Command;
use crate::context::BotContext;
use crate::reply::{Reply, ReplyColor};
use apibot_core::{CommandInvocation, Result};
use async_trait::async_trait;

/// Latency severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyTier {
    Green,
    Orange,
    Red,
}

impl LatencyTier {
    /// Classify a latency measurement in milliseconds.
    ///
    /// Over 100 ms is red, over 50 ms is orange, 50 ms and below is green.
    pub fn classify(millis: u64) -> Self {
        if millis > 100 {
            LatencyTier::Red
        } else if millis > 50 {
            LatencyTier::Orange
        } else {
            LatencyTier::Green
        }
    }

    pub fn color(&self) -> ReplyColor {
        match self {
            LatencyTier::Green => ReplyColor::Green,
            LatencyTier::Orange => ReplyColor::Orange,
            LatencyTier::Red => ReplyColor::Red,
        }
    }
}

/// Pong!
pub struct PingCommand;

#[async_trait]
impl Command for PingCommand {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "Report the bot's gateway latency"
    }

    async fn execute(&self, ctx: &BotContext, _invocation: &CommandInvocation) -> Result<Reply> {
        let reply = match ctx.latency.latest_ms() {
            Some(millis) => {
                let tier = LatencyTier::classify(millis);
                Reply::success("Pong!")
                    .with_color(tier.color())
                    .with_body(format!("Latency: {millis} ms"))
            }
            None => Reply::success("Pong!")
                .with_color(ReplyColor::Blue)
                .with_body("Latency: not measured yet"),
        };
        Ok(reply)
    }
}
