//! Reply formatting
//!
//! Every command invocation produces exactly one [`Reply`]: a title, a
//! severity color, an optional body, and zero or more fields. The gateway
//! serializes replies verbatim; presentation beyond this structure belongs
//! to the chat platform.

use apibot_core::Error;
use serde::{Deserialize, Serialize};

/// Severity/indicator color attached to a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReplyColor {
    #[default]
    Blue,
    Green,
    Orange,
    Red,
}

/// A named field within a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
}

/// The single message produced per command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub title: String,
    pub color: ReplyColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub fields: Vec<ReplyField>,
}

impl Reply {
    /// Start a success reply with the given title.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: ReplyColor::Green,
            body: None,
            fields: Vec::new(),
        }
    }

    /// Start an error reply with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            color: ReplyColor::Red,
            body: Some(message.into()),
            fields: Vec::new(),
        }
    }

    /// Set the color.
    pub fn with_color(mut self, color: ReplyColor) -> Self {
        self.color = color;
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(ReplyField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Whether this reply reports a failure.
    pub fn is_error(&self) -> bool {
        self.title == "Error"
    }

    /// Convert a command failure into its error reply.
    ///
    /// This is the single place per-command failures become user-visible;
    /// each error kind keeps a distinct message shape.
    pub fn from_error(command: &str, err: &Error) -> Self {
        let message = match err {
            Error::Transport(msg) => format!("Failed to reach the API: {msg}"),
            Error::Status { status, message } => {
                format!("API returned HTTP {status}: {message}")
            }
            Error::MalformedSchema(msg) => {
                format!("Failed to parse OpenAPI document. Check if it is valid JSON. ({msg})")
            }
            Error::UnknownCommand(name) => format!("Unknown command: {name}"),
            Error::InvalidArgument(msg) => format!("Invalid argument: {msg}"),
            Error::Unauthorized(msg) => format!("Not authorized: {msg}"),
            other => format!("An error occurred while running `{command}`: {other}"),
        };
        Self::error(message)
    }
}
