//! `list_operations` - list the target API's routes from its OpenAPI schema

use crate::command::Command;
use crate::context::BotContext;
use crate::reply::{Reply, ReplyColor};
use apibot_core::{CommandInvocation, Result};
use apibot_schema::{summarize, Document};
use async_trait::async_trait;
use tracing::debug;

/// Path of the schema document relative to the API base URL.
pub const OPENAPI_PATH: &str = "/openapi.json";

pub struct ListOperationsCommand;

#[async_trait]
impl Command for ListOperationsCommand {
    fn name(&self) -> &str {
        "list_operations"
    }

    fn description(&self) -> &str {
        "List the operations the target API exposes"
    }

    async fn execute(&self, ctx: &BotContext, _invocation: &CommandInvocation) -> Result<Reply> {
        let value = ctx.api.fetch_json(OPENAPI_PATH).await?;
        let document = Document::from_value(value)?;
        let summaries = summarize(&document);
        debug!(operations = summaries.len(), "Summarized OpenAPI document");

        let mut reply =
            Reply::success("Available API Operations").with_color(ReplyColor::Blue);

        if summaries.is_empty() {
            return Ok(reply.with_body("The API declares no operations."));
        }

        for summary in summaries {
            reply = reply.field(
                format!("Path: {}", summary.path),
                format!(
                    "Methods: {}\nParameters: {}\nDescription: {}",
                    summary.methods, summary.parameters, summary.description
                ),
            );
        }

        Ok(reply)
    }
}
