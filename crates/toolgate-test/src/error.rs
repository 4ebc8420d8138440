//! Test error types.

use thiserror::Error;

/// Errors that can occur while inspecting tool results.
#[derive(Debug, Error)]
pub enum TestError {
    /// The result contains no text content item.
    #[error("result has no text content")]
    NoTextContent,

    /// The tool flagged its result as an error.
    #[error("tool reported an error: {0}")]
    ToolReportedError(String),

    /// Arguments were not a JSON object.
    #[error("arguments must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TestError::NoTextContent.to_string(),
            "result has no text content"
        );
        assert_eq!(
            TestError::NotAnObject("array").to_string(),
            "arguments must be a JSON object, got array"
        );
    }
}
