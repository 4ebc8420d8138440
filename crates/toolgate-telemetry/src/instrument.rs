//! Handler instrumentation.

use crate::metrics::{record_param_error, record_tool_call, InFlightGuard};
use std::time::Instant;
use toolgate_core::{CallToolRequest, CallToolResult, ToolError, ToolHandler};

/// Wraps a [`ToolHandler`] with call logging and metrics.
///
/// Every call is timed and counted under the requested tool name. Parameter
/// rejections additionally bump `toolgate_param_errors_total` with the
/// rejection kind, so a dashboard can tell a missing argument from a
/// mistyped one.
///
/// # Example
///
/// ```rust,ignore
/// use toolgate_telemetry::Instrumented;
///
/// let handler = Instrumented::new(GetMe::new(client));
/// let result = handler.call(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Instrumented<H> {
    inner: H,
}

impl<H: ToolHandler> Instrumented<H> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Returns the wrapped handler.
    pub const fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwraps the handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

/// Returns the metrics status label for a call result.
pub fn call_status(result: &Result<CallToolResult, ToolError>) -> &'static str {
    match result {
        Ok(response) if response.is_error => "tool_error",
        Ok(_) => "ok",
        Err(err) => err.category().as_str(),
    }
}

impl<H: ToolHandler> ToolHandler for Instrumented<H> {
    async fn call(&self, request: &CallToolRequest) -> Result<CallToolResult, ToolError> {
        let tool = request.name();
        let _in_flight = InFlightGuard::new();
        let start = Instant::now();

        let result = self.inner.call(request).await;

        let elapsed = start.elapsed();
        let status = call_status(&result);
        record_tool_call(tool, status, elapsed);

        match &result {
            Ok(_) => tracing::info!(
                tool = tool,
                status = status,
                duration_ms = elapsed.as_millis() as u64,
                "tool call completed"
            ),
            Err(err) => {
                if let Some(param) = err.as_param_error() {
                    record_param_error(tool, param.kind().as_str());
                }
                tracing::warn!(
                    tool = tool,
                    status = status,
                    duration_ms = elapsed.as_millis() as u64,
                    error = %err,
                    "tool call failed"
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolgate_core::{ArgumentBag, FnHandler, ParamError};

    fn request() -> CallToolRequest {
        CallToolRequest::new("probe", ArgumentBag::new())
    }

    #[tokio::test]
    async fn test_passes_success_through() {
        let handler = Instrumented::new(FnHandler::new(|_req: CallToolRequest| async {
            Ok::<_, ToolError>(CallToolResult::text("done"))
        }));

        let result = handler.call(&request()).await.unwrap();
        assert_eq!(result.first_text(), Some("done"));
    }

    #[tokio::test]
    async fn test_passes_error_through() {
        let handler = Instrumented::new(FnHandler::new(|_req: CallToolRequest| async {
            Err::<CallToolResult, ToolError>(ParamError::missing("owner").into())
        }));

        let err = handler.call(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "missing required parameter: owner");
    }

    #[test]
    fn test_call_status_labels() {
        assert_eq!(call_status(&Ok(CallToolResult::text("x"))), "ok");
        assert_eq!(
            call_status(&Ok(CallToolResult::error_text("x"))),
            "tool_error"
        );
        assert_eq!(
            call_status(&Err(ParamError::empty("repo").into())),
            "validation"
        );
        assert_eq!(
            call_status(&Err(ToolError::internal("boom"))),
            "internal"
        );
    }
}
