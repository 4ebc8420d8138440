//! Error types for Toolgate.
//!
//! Two layers of errors flow out of a tool invocation:
//!
//! - [`ParamError`] describes why a single parameter was rejected by an
//!   accessor (missing, empty, or of the wrong type).
//! - [`ToolError`] is what a handler returns. It wraps parameter errors and
//!   downstream failures and can be turned into an [`ErrorEnvelope`] for the
//!   transport layer.
//!
//! Accepted-but-pending downstream outcomes are not errors at this level;
//! see [`crate::outcome`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias using [`ToolError`].
pub type ToolResult<T> = Result<T, ToolError>;

/// JSON-RPC error code for invalid method parameters.
pub const INVALID_PARAMS: i64 = -32602;

/// JSON-RPC error code for internal errors.
pub const INTERNAL_ERROR: i64 = -32603;

/// Why a parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamErrorKind {
    /// A required key is absent from the bag.
    Missing,
    /// A required string parameter is present but zero-length.
    Empty,
    /// A present value has the wrong dynamic type.
    TypeMismatch,
}

impl ParamErrorKind {
    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Empty => "empty",
            Self::TypeMismatch => "type_mismatch",
        }
    }
}

impl fmt::Display for ParamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced when a parameter fails validation.
///
/// Always names the offending parameter so the message can be surfaced to
/// the caller verbatim.
///
/// # Example
///
/// ```
/// use toolgate_core::{ParamError, ParamErrorKind};
///
/// let err = ParamError::missing("owner");
/// assert_eq!(err.kind(), ParamErrorKind::Missing);
/// assert_eq!(err.parameter(), "owner");
/// assert_eq!(err.to_string(), "missing required parameter: owner");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamError {
    kind: ParamErrorKind,
    parameter: String,
    expected: Option<&'static str>,
    actual: Option<&'static str>,
    message: String,
}

impl ParamError {
    /// Creates an error for a required parameter that is absent.
    #[must_use]
    pub fn missing(parameter: impl Into<String>) -> Self {
        let parameter = parameter.into();
        Self {
            kind: ParamErrorKind::Missing,
            message: format!("missing required parameter: {parameter}"),
            parameter,
            expected: None,
            actual: None,
        }
    }

    /// Creates an error for a required string parameter that is empty.
    #[must_use]
    pub fn empty(parameter: impl Into<String>) -> Self {
        let parameter = parameter.into();
        Self {
            kind: ParamErrorKind::Empty,
            message: format!("required parameter {parameter} must not be empty"),
            parameter,
            expected: Some("string"),
            actual: Some("string"),
        }
    }

    /// Creates an error for a value of the wrong type.
    #[must_use]
    pub fn type_mismatch(
        parameter: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        let parameter = parameter.into();
        Self {
            kind: ParamErrorKind::TypeMismatch,
            message: format!("parameter {parameter} is not of type {expected}, is {actual}"),
            parameter,
            expected: Some(expected),
            actual: Some(actual),
        }
    }

    /// Returns why the parameter was rejected.
    #[must_use]
    pub fn kind(&self) -> ParamErrorKind {
        self.kind
    }

    /// Returns the name of the rejected parameter.
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Returns the expected type name, if the check was type-based.
    #[must_use]
    pub fn expected(&self) -> Option<&'static str> {
        self.expected
    }

    /// Returns the JSON type that was actually found.
    #[must_use]
    pub fn actual(&self) -> Option<&'static str> {
        self.actual
    }

    /// Returns the error code suitable for error envelopes.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self.kind {
            ParamErrorKind::Missing => "MISSING_PARAMETER",
            ParamErrorKind::Empty => "EMPTY_PARAMETER",
            ParamErrorKind::TypeMismatch => "INVALID_PARAMETER",
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParamError {}

/// Categories of handler errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Argument validation failed before the tool body ran.
    Validation,
    /// The downstream API call failed.
    Downstream,
    /// The handler itself failed (e.g. result serialization).
    Internal,
}

impl ErrorCategory {
    /// Returns the JSON-RPC error code for this category.
    #[must_use]
    pub const fn rpc_code(&self) -> i64 {
        match self {
            Self::Validation => INVALID_PARAMS,
            Self::Downstream | Self::Internal => INTERNAL_ERROR,
        }
    }

    /// Returns the snake_case label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Downstream => "downstream",
            Self::Internal => "internal",
        }
    }
}

/// Error returned by a tool handler.
///
/// # Example
///
/// ```
/// use toolgate_core::{ErrorCategory, ParamError, ToolError};
///
/// let err: ToolError = ParamError::missing("repo").into();
/// assert_eq!(err.category(), ErrorCategory::Validation);
/// assert_eq!(err.to_string(), "missing required parameter: repo");
/// ```
#[derive(Error, Debug)]
pub enum ToolError {
    /// An argument failed validation.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// The downstream API call failed and was not accepted for async processing.
    #[error("{message}: {source}")]
    Downstream {
        /// Fixed diagnostic naming the failed operation.
        message: String,
        /// The error returned by the downstream client.
        #[source]
        source: anyhow::Error,
    },

    /// The handler failed for a reason unrelated to input or downstream.
    #[error("{message}")]
    Internal {
        /// Human-readable error message.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl ToolError {
    /// Wraps a downstream client error with a diagnostic message.
    pub fn downstream(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Downstream {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an internal error with a source error.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Param(_) => ErrorCategory::Validation,
            Self::Downstream { .. } => ErrorCategory::Downstream,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Returns the parameter error, if this is a validation failure.
    #[must_use]
    pub fn as_param_error(&self) -> Option<&ParamError> {
        match self {
            Self::Param(err) => Some(err),
            _ => None,
        }
    }

    /// Converts this error to a serializable error envelope.
    #[must_use]
    pub fn to_envelope(&self, request_id: Option<&str>) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                rpc_code: self.category().rpc_code(),
                message: self.to_string(),
                category: self.category(),
                details: self.error_details(),
            },
            request_id: request_id.map(ToString::to_string),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Param(err) => err.error_code(),
            Self::Downstream { .. } => "DOWNSTREAM_FAILURE",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    fn error_details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Param(err) => Some(serde_json::json!({
                "parameter": err.parameter(),
                "kind": err.kind(),
                "expected": err.expected(),
                "actual": err.actual(),
            })),
            _ => None,
        }
    }
}

/// Serializable error envelope handed to the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// The error details.
    pub error: ErrorDetail,
    /// The request ID for correlation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Error detail within an envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code.
    pub code: String,
    /// JSON-RPC error code.
    pub rpc_code: i64,
    /// Human-readable error message.
    pub message: String,
    /// Error category.
    pub category: ErrorCategory,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_error() {
        let err = ParamError::missing("owner");

        assert_eq!(err.kind(), ParamErrorKind::Missing);
        assert_eq!(err.parameter(), "owner");
        assert_eq!(err.error_code(), "MISSING_PARAMETER");
        assert!(err.to_string().contains("owner"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_empty_error() {
        let err = ParamError::empty("repo");

        assert_eq!(err.kind(), ParamErrorKind::Empty);
        assert_eq!(err.error_code(), "EMPTY_PARAMETER");
        assert!(err.to_string().contains("repo"));
    }

    #[test]
    fn test_type_mismatch_error() {
        let err = ParamError::type_mismatch("page", "number", "string");

        assert_eq!(err.kind(), ParamErrorKind::TypeMismatch);
        assert_eq!(err.expected(), Some("number"));
        assert_eq!(err.actual(), Some("string"));
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert_eq!(
            err.to_string(),
            "parameter page is not of type number, is string"
        );
    }

    #[test]
    fn test_param_error_converts_to_validation() {
        let err: ToolError = ParamError::type_mismatch("flag", "boolean", "string").into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.category().rpc_code(), INVALID_PARAMS);
        assert_eq!(err.as_param_error().unwrap().parameter(), "flag");
    }

    #[test]
    fn test_downstream_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = ToolError::downstream("failed to get user", io);

        assert_eq!(err.category(), ErrorCategory::Downstream);
        assert!(err.to_string().starts_with("failed to get user"));
        assert!(err.to_string().contains("connection reset"));
        assert!(err.source().is_some());
        assert!(err.as_param_error().is_none());
    }

    #[test]
    fn test_internal_error() {
        let err = ToolError::internal("failed to marshal user");
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.category().rpc_code(), INTERNAL_ERROR);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_envelope_serialization() {
        let err: ToolError = ParamError::missing("owner").into();
        let envelope = err.to_envelope(Some("req-7"));

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["error"]["code"], "MISSING_PARAMETER");
        assert_eq!(json["error"]["rpc_code"], INVALID_PARAMS);
        assert_eq!(json["error"]["category"], "validation");
        assert_eq!(json["error"]["details"]["parameter"], "owner");
        assert_eq!(json["error"]["details"]["kind"], "missing");
        assert_eq!(json["request_id"], "req-7");
    }

    #[test]
    fn test_envelope_without_details() {
        let err = ToolError::internal("boom");
        let json = serde_json::to_string(&err.to_envelope(None)).unwrap();

        assert!(json.contains("\"code\":\"INTERNAL_ERROR\""));
        assert!(!json.contains("details"));
        assert!(!json.contains("request_id"));
    }
}
