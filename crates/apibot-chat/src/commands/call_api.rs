//! `call_api` - invoke an arbitrary route and relay the body verbatim
//!
//! The route is caller-supplied and appended to the base URL unchanged; no
//! sanitization or allow-list is applied. Anyone who can invoke this command
//! can reach any GET route of the target API.

use crate::command::Command;
use crate::context::BotContext;
use crate::reply::Reply;
use apibot_core::{CommandInvocation, Error, Result};
use async_trait::async_trait;
use serde_json::json;

pub struct CallApiCommand;

#[async_trait]
impl Command for CallApiCommand {
    fn name(&self) -> &str {
        "call_api"
    }

    fn description(&self) -> &str {
        "Call an API route and relay the raw response"
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "route": {
                    "type": "string",
                    "description": "The API route to call"
                }
            },
            "required": ["route"]
        })
    }

    async fn execute(&self, ctx: &BotContext, invocation: &CommandInvocation) -> Result<Reply> {
        let route = invocation
            .string_arg("route")
            .ok_or_else(|| Error::invalid_argument("call_api requires a `route` argument"))?;

        let body = ctx.api.fetch_text(route).await?;

        Ok(Reply::success("API Response")
            .field("Route", format!("`{route}`"))
            .with_body(body))
    }
}
