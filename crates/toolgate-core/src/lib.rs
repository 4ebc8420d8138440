//! # Toolgate Core
//!
//! Core types shared by every Toolgate crate.
//!
//! - [`ArgumentBag`] - Untyped key/value arguments of a tool invocation
//! - [`CallToolRequest`] / [`CallToolResult`] - Invocation envelopes
//! - [`ParamError`] / [`ToolError`] - Validation and handler errors
//! - [`is_accepted_outcome`] / [`classify_downstream`] - Downstream outcome classification
//! - [`Tool`] - Tool declarations with translated descriptions
//! - [`ToolHandler`] - Core handler trait

#![doc(html_root_url = "https://docs.rs/toolgate-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod args;
mod error;
mod handler;
pub mod outcome;
mod request;
pub mod tool;
mod translation;

pub use args::{json_type_name, ArgumentBag};
pub use error::{
    ErrorCategory, ErrorDetail, ErrorEnvelope, ParamError, ParamErrorKind, ToolError, ToolResult,
    INTERNAL_ERROR, INVALID_PARAMS,
};
pub use handler::{FnHandler, ServerTool, ToolHandler};
pub use outcome::{
    classify_downstream, is_accepted_outcome, AcceptedError, DownstreamOutcome, ResponseError,
};
pub use request::{
    CallToolParams, CallToolRequest, CallToolResult, Content, RequestMeta, CALL_TOOL_METHOD,
};
pub use tool::{InputSchema, Property, PropertyType, Tool, ToolBuilder};
pub use translation::{null_translation_helper, TranslationHelper};
