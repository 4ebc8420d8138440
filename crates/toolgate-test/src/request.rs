//! Test request building.

use crate::error::TestError;
use serde_json::Value;
use toolgate_core::{json_type_name, ArgumentBag, CallToolRequest, RequestMeta};

/// Builds a call request with an empty tool name from a JSON object.
///
/// `null` yields an empty argument bag.
///
/// # Panics
///
/// Panics if `args` is neither an object nor `null`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use toolgate_test::create_request;
///
/// let request = create_request(json!({"owner": "octo"}));
/// assert_eq!(request.name(), "");
/// assert!(request.arguments().contains("owner"));
/// ```
pub fn create_request(args: Value) -> CallToolRequest {
    match TestRequest::new().try_args(args) {
        Ok(builder) => builder.build(),
        Err(err) => panic!("create_request: {err}"),
    }
}

/// Builder for constructing test call requests.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use toolgate_test::TestRequest;
///
/// let request = TestRequest::new()
///     .name("list_issues")
///     .arg("owner", "octo")
///     .arg("perPage", 50)
///     .progress_token(json!("tok-1"))
///     .build();
///
/// assert_eq!(request.name(), "list_issues");
/// assert_eq!(request.arguments().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct TestRequest {
    name: String,
    arguments: ArgumentBag,
    progress_token: Option<Value>,
}

impl TestRequest {
    /// Creates a builder with no name and no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the invoked tool name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a single argument.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key, value);
        self
    }

    /// Adds every entry of a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::NotAnObject`] if `args` is neither an object
    /// nor `null`.
    pub fn try_args(mut self, args: Value) -> Result<Self, TestError> {
        let actual = json_type_name(&args);
        let bag = ArgumentBag::from_value(args).ok_or(TestError::NotAnObject(actual))?;
        for (key, value) in bag.iter() {
            self.arguments.insert(key.clone(), value.clone());
        }
        Ok(self)
    }

    /// Adds every entry of an argument bag.
    pub fn args(mut self, args: ArgumentBag) -> Self {
        for (key, value) in args.iter() {
            self.arguments.insert(key.clone(), value.clone());
        }
        self
    }

    /// Attaches a progress token in the request metadata.
    pub fn progress_token(mut self, token: impl Into<Value>) -> Self {
        self.progress_token = Some(token.into());
        self
    }

    /// Builds the request.
    pub fn build(self) -> CallToolRequest {
        let mut request = CallToolRequest::new(self.name, self.arguments);
        request.params.meta = self.progress_token.map(|token| RequestMeta {
            progress_token: Some(token),
        });
        request
    }
}
