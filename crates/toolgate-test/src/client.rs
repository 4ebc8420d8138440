//! Scripted downstream client.

use http::StatusCode;
use serde_json::Value;
use tokio::sync::Mutex;
use toolgate_core::{AcceptedError, ResponseError};

/// Base URL reported in scripted response errors.
pub const MOCK_BASE_URL: &str = "https://api.mock.test";

/// What a [`MockClient`] answers to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// A successful JSON body.
    Ok(Value),
    /// A non-success status with a message.
    Status {
        /// Response status.
        status: StatusCode,
        /// Message from the response body.
        message: String,
    },
    /// `202 Accepted`, processing continues on the downstream side.
    Accepted(Option<String>),
}

/// A downstream client stand-in that replays one scripted response.
///
/// Errors are returned as [`anyhow::Error`] wrapping [`ResponseError`] or
/// [`AcceptedError`], the same shapes a real client surfaces.
///
/// # Example
///
/// ```
/// use http::StatusCode;
/// use toolgate_test::MockClient;
///
/// # tokio_test::block_on(async {
/// let client = MockClient::status(StatusCode::UNAUTHORIZED, "Unauthorized");
/// let err = client.get("user").await.unwrap_err();
/// assert!(err.to_string().contains("401"));
/// assert_eq!(client.calls().await, ["GET /user"]);
/// # });
/// ```
#[derive(Debug)]
pub struct MockClient {
    response: MockResponse,
    calls: Mutex<Vec<String>>,
}

impl MockClient {
    /// Creates a client answering with `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a client answering every request with `body`.
    pub fn ok(body: Value) -> Self {
        Self::new(MockResponse::Ok(body))
    }

    /// Creates a client answering every request with a failure status.
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(MockResponse::Status {
            status,
            message: message.into(),
        })
    }

    /// Creates a client answering every request with `202 Accepted`.
    pub fn accepted() -> Self {
        Self::new(MockResponse::Accepted(None))
    }

    /// Issues a GET.
    ///
    /// # Errors
    ///
    /// Returns the scripted failure, if any.
    pub async fn get(&self, path: &str) -> anyhow::Result<Value> {
        self.send("GET", path, None).await
    }

    /// Issues a POST. The body is recorded only as part of the call log.
    ///
    /// # Errors
    ///
    /// Returns the scripted failure, if any.
    pub async fn post(&self, path: &str, body: &Value) -> anyhow::Result<Value> {
        self.send("POST", path, Some(body)).await
    }

    /// Returns every request issued so far as `METHOD /path`.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
    ) -> anyhow::Result<Value> {
        let path = path.trim_start_matches('/');
        let call = match body {
            Some(body) => format!("{method} /{path} {body}"),
            None => format!("{method} /{path}"),
        };
        self.calls.lock().await.push(call);

        match &self.response {
            MockResponse::Ok(body) => Ok(body.clone()),
            MockResponse::Status { status, message } => Err(ResponseError::new(
                method,
                format!("{MOCK_BASE_URL}/{path}"),
                *status,
                message.clone(),
            )
            .into()),
            MockResponse::Accepted(raw) => Err(AcceptedError { raw: raw.clone() }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolgate_core::is_accepted_outcome;

    #[tokio::test]
    async fn test_ok_response() {
        let client = MockClient::ok(json!({"login": "testuser"}));
        let body = client.get("/user").await.unwrap();
        assert_eq!(body["login"], "testuser");
        assert_eq!(client.calls().await, ["GET /user"]);
    }

    #[tokio::test]
    async fn test_status_response() {
        let client = MockClient::status(StatusCode::NOT_FOUND, "Not Found");
        let err = client.get("repos/o/r/releases/latest").await.unwrap_err();

        let response = err.downcast_ref::<ResponseError>().unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "GET https://api.mock.test/repos/o/r/releases/latest: 404 Not Found"
        );
    }

    #[tokio::test]
    async fn test_accepted_response() {
        let client = MockClient::accepted();
        let err = client.post("/dispatches", &json!({})).await.unwrap_err();
        assert!(is_accepted_outcome(Some(err.as_ref())));
    }

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let client = MockClient::ok(Value::Null);
        client.get("a").await.unwrap();
        client.post("b", &json!({"x": 1})).await.unwrap();
        assert_eq!(client.calls().await, ["GET /a", r#"POST /b {"x":1}"#]);
    }
}
