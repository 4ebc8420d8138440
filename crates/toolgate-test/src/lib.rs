//! # Toolgate Test
//!
//! Test utilities for tool handlers: request envelopes built from plain
//! JSON, result inspection, and a scripted downstream client.
//!
//! ## Example
//!
//! ```ignore
//! use serde_json::json;
//! use toolgate_test::{create_request, text_result, MockClient};
//!
//! #[tokio::test]
//! async fn test_get_me() {
//!     let client = Arc::new(MockClient::ok(json!({"login": "testuser"})));
//!     let tool = get_me(client, null_translation_helper);
//!
//!     let result = tool.call(&create_request(json!({}))).await.unwrap();
//!     assert!(text_result(&result).unwrap().contains("testuser"));
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/toolgate-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod request;
mod response;

pub use client::{MockClient, MockResponse, MOCK_BASE_URL};
pub use error::TestError;
pub use request::{create_request, TestRequest};
pub use response::{json_result, text_result};
