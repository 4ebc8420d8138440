//! Tool call envelopes.
//!
//! [`CallToolRequest`] is the canonical envelope every handler receives and
//! [`CallToolResult`] is what it hands back to the transport layer. Both
//! follow the `tools/call` wire shape so they round-trip through serde
//! without a translation step.

use crate::{ArgumentBag, ToolError};
use serde::{Deserialize, Serialize};

/// Method name of a tool invocation.
pub const CALL_TOOL_METHOD: &str = "tools/call";

/// A tool invocation as delivered by the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolRequest {
    /// JSON-RPC method, always `tools/call` for tool invocations.
    pub method: String,
    /// Invocation parameters.
    pub params: CallToolParams,
}

impl CallToolRequest {
    /// Creates a request for `name` with the given arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, arguments: ArgumentBag) -> Self {
        Self {
            method: CALL_TOOL_METHOD.to_string(),
            params: CallToolParams {
                name: name.into(),
                arguments,
                meta: None,
            },
        }
    }

    /// Returns the name of the invoked tool.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.params.name
    }

    /// Borrows the argument bag.
    #[must_use]
    pub fn arguments(&self) -> &ArgumentBag {
        &self.params.arguments
    }
}

/// Parameters of a tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallToolParams {
    /// Name of the tool being invoked.
    pub name: String,
    /// Untyped arguments supplied by the caller.
    #[serde(default, skip_serializing_if = "ArgumentBag::is_empty")]
    pub arguments: ArgumentBag,
    /// Optional request metadata.
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RequestMeta>,
}

/// Request metadata attached by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    /// Token used to correlate progress notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_token: Option<serde_json::Value>,
}

/// A single content item of a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Plain text content.
    Text {
        /// The text payload.
        text: String,
    },
}

impl Content {
    /// Returns the text payload.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text.as_str()),
        }
    }
}

/// Result of a tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    /// Result content items.
    pub content: Vec<Content>,
    /// Whether the result reports a tool-level failure.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl CallToolResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates a text result flagged as a tool-level error.
    #[must_use]
    pub fn error_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// Serializes `value` to JSON and wraps it in a text result.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ToolError> {
        let text = serde_json::to_string(value)
            .map_err(|e| ToolError::internal_with_source("failed to marshal result", e))?;
        Ok(Self::text(text))
    }

    /// Returns the first text content item, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(Content::as_text)
    }
}
