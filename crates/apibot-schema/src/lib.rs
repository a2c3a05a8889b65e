//! OpenAPI document summarization for apibot

pub mod document;
pub mod summary;

pub use document::Document;
pub use summary::{summarize, OperationSummary, NO_DESCRIPTION};
