//! Handler trait for tool invocations.
//!
//! The [`ToolHandler`] trait defines the interface every exposed tool
//! implements. Handlers read their arguments through the accessors in
//! `toolgate-extract`, perform their downstream call and classify its
//! result with [`crate::classify_downstream`].

use crate::{CallToolRequest, CallToolResult, Tool, ToolError};
use std::future::Future;
use std::marker::PhantomData;

/// A trait for handling tool invocations.
///
/// # Example
///
/// ```rust,ignore
/// use toolgate_core::{CallToolRequest, CallToolResult, ToolError, ToolHandler};
/// use toolgate_extract::required_param;
///
/// struct Echo;
///
/// impl ToolHandler for Echo {
///     async fn call(&self, request: &CallToolRequest) -> Result<CallToolResult, ToolError> {
///         let text: String = required_param(request.arguments(), "text")?;
///         Ok(CallToolResult::text(text))
///     }
/// }
/// ```
pub trait ToolHandler: Send + Sync + 'static {
    /// Handles one invocation.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] if:
    /// - An argument fails validation
    /// - The downstream call fails and was not accepted
    /// - The result cannot be serialized
    fn call(
        &self,
        request: &CallToolRequest,
    ) -> impl Future<Output = Result<CallToolResult, ToolError>> + Send;
}

/// A function-based handler wrapper.
///
/// Lets a closure returning a future act as a [`ToolHandler`]. The closure
/// receives an owned copy of the request so the returned future does not
/// borrow from the caller.
pub struct FnHandler<F, Fut>
where
    F: Fn(CallToolRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<CallToolResult, ToolError>> + Send,
{
    func: F,
    _phantom: PhantomData<fn() -> Fut>,
}

impl<F, Fut> FnHandler<F, Fut>
where
    F: Fn(CallToolRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<CallToolResult, ToolError>> + Send,
{
    /// Creates a new function-based handler.
    #[must_use]
    pub const fn new(func: F) -> Self {
        Self {
            func,
            _phantom: PhantomData,
        }
    }
}

impl<F, Fut> ToolHandler for FnHandler<F, Fut>
where
    F: Fn(CallToolRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<CallToolResult, ToolError>> + Send + 'static,
{
    fn call(
        &self,
        request: &CallToolRequest,
    ) -> impl Future<Output = Result<CallToolResult, ToolError>> + Send {
        (self.func)(request.clone())
    }
}

/// A tool declaration paired with the handler that serves it.
pub struct ServerTool<H> {
    /// The declared contract.
    pub tool: Tool,
    /// The handler.
    pub handler: H,
}

impl<H: ToolHandler> ServerTool<H> {
    /// Pairs a declaration with its handler.
    #[must_use]
    pub const fn new(tool: Tool, handler: H) -> Self {
        Self { tool, handler }
    }

    /// Invokes the handler, logging the outcome under the tool's name.
    pub async fn call(&self, request: &CallToolRequest) -> Result<CallToolResult, ToolError> {
        let result = self.handler.call(request).await;
        match &result {
            Ok(_) => tracing::debug!(tool = self.tool.name(), "tool call succeeded"),
            Err(err) => tracing::debug!(
                tool = self.tool.name(),
                category = ?err.category(),
                error = %err,
                "tool call failed"
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArgumentBag, ErrorCategory, ParamError};

    struct Greeter;

    impl ToolHandler for Greeter {
        async fn call(&self, request: &CallToolRequest) -> Result<CallToolResult, ToolError> {
            let name = request
                .arguments()
                .get("name")
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| ParamError::missing("name"))?;
            Ok(CallToolResult::text(format!("Hello, {name}!")))
        }
    }

    fn request_with_name(name: Option<&str>) -> CallToolRequest {
        let mut args = ArgumentBag::new();
        if let Some(name) = name {
            args.insert("name", name);
        }
        CallToolRequest::new("greet", args)
    }

    #[tokio::test]
    async fn test_handler_impl() {
        let response = Greeter.call(&request_with_name(Some("World"))).await.unwrap();
        assert_eq!(response.first_text(), Some("Hello, World!"));
    }

    #[tokio::test]
    async fn test_handler_error() {
        let err = Greeter.call(&request_with_name(None)).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[tokio::test]
    async fn test_fn_handler() {
        let handler = FnHandler::new(|request: CallToolRequest| async move {
            Ok(CallToolResult::text(request.name().to_string()))
        });

        let response = handler.call(&request_with_name(None)).await.unwrap();
        assert_eq!(response.first_text(), Some("greet"));
    }

    #[tokio::test]
    async fn test_fn_handler_in_server_tool() {
        let handler = FnHandler::new(|request: CallToolRequest| async move {
            let count = request.arguments().len();
            Ok(CallToolResult::text(format!("{count} arguments")))
        });
        let tool = ServerTool::new(Tool::builder("count").build(), handler);

        let response = tool.call(&request_with_name(Some("Ada"))).await.unwrap();
        assert_eq!(response.first_text(), Some("1 arguments"));
    }

    #[tokio::test]
    async fn test_server_tool_call() {
        let tool = ServerTool::new(Tool::builder("greet").build(), Greeter);
        assert_eq!(tool.tool.name(), "greet");

        let response = tool.call(&request_with_name(Some("Ada"))).await.unwrap();
        assert_eq!(response.first_text(), Some("Hello, Ada!"));
    }
}
