//! Result inspection helpers.

use crate::error::TestError;
use serde::de::DeserializeOwned;
use toolgate_core::CallToolResult;

/// Returns the first text item of a successful result.
///
/// # Errors
///
/// - [`TestError::ToolReportedError`] if the result is flagged as an error
/// - [`TestError::NoTextContent`] if it carries no text item
///
/// # Example
///
/// ```
/// use toolgate_core::CallToolResult;
/// use toolgate_test::text_result;
///
/// let result = CallToolResult::text("hello");
/// assert_eq!(text_result(&result).unwrap(), "hello");
/// ```
pub fn text_result(result: &CallToolResult) -> Result<&str, TestError> {
    if result.is_error {
        let text = result.first_text().unwrap_or_default();
        return Err(TestError::ToolReportedError(text.to_string()));
    }
    result.first_text().ok_or(TestError::NoTextContent)
}

/// Parses the first text item of a successful result as JSON.
///
/// # Errors
///
/// Everything [`text_result`] rejects, plus [`TestError::Json`] if the text
/// does not deserialize into `T`.
pub fn json_result<T: DeserializeOwned>(result: &CallToolResult) -> Result<T, TestError> {
    let text = text_result(result)?;
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_text_result_success() {
        assert_eq!(text_result(&CallToolResult::text("ok")).unwrap(), "ok");
    }

    #[test]
    fn test_text_result_flagged_error() {
        let err = text_result(&CallToolResult::error_text("boom")).unwrap_err();
        assert!(matches!(err, TestError::ToolReportedError(ref text) if text == "boom"));
    }

    #[test]
    fn test_text_result_empty_content() {
        let result = CallToolResult {
            content: Vec::new(),
            is_error: false,
        };
        assert!(matches!(
            text_result(&result).unwrap_err(),
            TestError::NoTextContent
        ));
    }

    #[test]
    fn test_json_result() {
        let result = CallToolResult::json(&json!({"login": "testuser"})).unwrap();
        let value: Value = json_result(&result).unwrap();
        assert_eq!(value["login"], "testuser");
    }

    #[test]
    fn test_json_result_invalid() {
        let result = CallToolResult::text("not json");
        assert!(matches!(
            json_result::<Value>(&result).unwrap_err(),
            TestError::Json(_)
        ));
    }
}
