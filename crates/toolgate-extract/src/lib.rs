//! # Toolgate Extract
//!
//! Typed parameter accessors for tool handlers.
//!
//! Every tool receives an untyped [`ArgumentBag`]. The functions in this crate
//! read single parameters out of it with a fixed set of presence and type
//! rules, so every tool validates its input the same way.
//!
//! ## Accessors
//!
//! | Accessor | Absent key | Wrong type | Notes |
//! |----------|------------|------------|-------|
//! | [`required_param<T>`] | `Missing` | `TypeMismatch` | `""` is `Empty` for strings |
//! | [`optional_param<T>`] | `T::default()` | `TypeMismatch` | `""` is returned as-is |
//! | [`required_int`] | `Missing` | `TypeMismatch` | read as `f64`, truncated |
//! | [`optional_int_param`] | `0` | `TypeMismatch` | stored `0` stays `0` |
//! | [`optional_int_param_with_default`] | default | `TypeMismatch` | stored `0` becomes default |
//! | [`optional_string_array_param`] | `[]` | `TypeMismatch` | any non-string element rejects the array |
//! | [`optional_pagination_params`] | `{1, 30}` | `TypeMismatch` | reads `page` and `perPage` |
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use toolgate_core::ArgumentBag;
//! use toolgate_extract::{
//!     optional_pagination_params, optional_string_array_param, required_param,
//! };
//!
//! let bag = ArgumentBag::from_value(json!({
//!     "owner": "octo",
//!     "repo": "hello-world",
//!     "labels": ["bug"],
//!     "perPage": 50
//! }))
//! .unwrap();
//!
//! let owner: String = required_param(&bag, "owner").unwrap();
//! let labels = optional_string_array_param(&bag, "labels").unwrap();
//! let pagination = optional_pagination_params(&bag).unwrap();
//!
//! assert_eq!(owner, "octo");
//! assert_eq!(labels, ["bug"]);
//! assert_eq!((pagination.page, pagination.per_page), (1, 50));
//! ```
//!
//! ## Error Handling
//!
//! All accessors return [`ParamError`], which names the parameter and
//! converts into [`toolgate_core::ToolError`] with `?`.

#![doc(html_root_url = "https://docs.rs/toolgate-extract/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod array;
mod numeric;
mod pagination;
mod param;

pub use array::optional_string_array_param;
pub use numeric::{optional_int_param, optional_int_param_with_default, required_int};
pub use pagination::{
    optional_pagination_params, optional_pagination_params_with, PaginationDefaults,
    PaginationParams, DEFAULT_PAGE, DEFAULT_PER_PAGE, PAGE_PARAM, PER_PAGE_PARAM,
};
pub use param::{optional_param, required_param, FromArgument};

// Re-export useful types from core
pub use toolgate_core::{ArgumentBag, ParamError, ParamErrorKind};
