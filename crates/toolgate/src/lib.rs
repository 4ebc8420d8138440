//! # Toolgate
//!
//! **Parameter validation and outcome classification for tool servers**
//!
//! Every exposed tool receives an untyped argument bag and calls some
//! downstream API. Toolgate gives all of them the same rules:
//!
//! - **Typed accessors** read required and optional parameters with
//!   uniform missing, empty and type-mismatch errors
//! - **Pagination** is normalized to `page`/`perPage` with shared defaults
//! - **Outcome classification** turns "accepted, still processing"
//!   downstream answers into a qualified success
//! - **Telemetry** logs and counts every call and every rejected parameter
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use toolgate::prelude::*;
//!
//! struct ListIssues { client: Client }
//!
//! impl ToolHandler for ListIssues {
//!     async fn call(&self, request: &CallToolRequest) -> Result<CallToolResult, ToolError> {
//!         let owner: String = required_param(request.arguments(), "owner")?;
//!         let page = optional_pagination_params(request.arguments())?;
//!
//!         match classify_downstream(self.client.list(&owner, page).await, "failed to list issues")? {
//!             DownstreamOutcome::Completed(issues) => CallToolResult::json(&issues),
//!             DownstreamOutcome::Accepted => Ok(CallToolResult::text("accepted")),
//!         }
//!     }
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/toolgate/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use toolgate_core as core;

// Re-export parameter accessors
pub use toolgate_extract as extract;

// Re-export configuration
pub use toolgate_config as config;

// Re-export telemetry
pub use toolgate_telemetry as telemetry;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust,ignore
/// use toolgate::prelude::*;
/// ```
pub mod prelude {
    pub use toolgate_core::{
        classify_downstream, is_accepted_outcome, null_translation_helper, AcceptedError,
        ArgumentBag, CallToolRequest, CallToolResult, DownstreamOutcome, ErrorCategory,
        FnHandler, ParamError, ParamErrorKind, ResponseError, ServerTool, Tool, ToolError,
        ToolHandler, TranslationHelper,
    };

    pub use toolgate_extract::{
        optional_int_param, optional_int_param_with_default, optional_pagination_params,
        optional_pagination_params_with, optional_param, optional_string_array_param,
        required_int, required_param, PaginationDefaults, PaginationParams,
    };

    pub use toolgate_config::{ConfigLoader, ToolgateConfig};

    pub use toolgate_telemetry::Instrumented;
}
