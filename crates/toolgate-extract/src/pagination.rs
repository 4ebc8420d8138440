//! Pagination normalization.
//!
//! Paginated tools accept `page` and `perPage`. Both are optional; a missing
//! or zero value falls back to the configured default. No upper bound is
//! applied here; the downstream API enforces its own page-size limits.
//! Negative values are not rejected or clamped either: only absence and
//! `0` count as unset, so a present negative number reaches the downstream
//! call as given.

use crate::numeric::optional_int_param_with_default;
use serde::{Deserialize, Serialize};
use toolgate_core::{ArgumentBag, ParamError};

/// Name of the page-number parameter.
pub const PAGE_PARAM: &str = "page";

/// Name of the page-size parameter.
pub const PER_PAGE_PARAM: &str = "perPage";

/// Default page number.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size.
pub const DEFAULT_PER_PAGE: i64 = 30;

/// Normalized pagination for a downstream list call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// 1-based page number.
    pub page: i64,
    /// Number of results per page.
    pub per_page: i64,
}

/// Defaults applied when a pagination parameter is absent or zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDefaults {
    /// Page number used when `page` is unset.
    pub page: i64,
    /// Page size used when `perPage` is unset.
    pub per_page: i64,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Reads `page` and `perPage` using the standard defaults (1 and 30).
///
/// # Errors
///
/// `TypeMismatch` if either parameter is present but not numeric. No
/// partially populated record is ever returned. Negative values are
/// returned as-is.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use toolgate_core::ArgumentBag;
/// use toolgate_extract::{optional_pagination_params, PaginationParams};
///
/// let bag = ArgumentBag::from_value(json!({"page": 2})).unwrap();
/// assert_eq!(
///     optional_pagination_params(&bag).unwrap(),
///     PaginationParams { page: 2, per_page: 30 }
/// );
/// ```
pub fn optional_pagination_params(bag: &ArgumentBag) -> Result<PaginationParams, ParamError> {
    optional_pagination_params_with(bag, &PaginationDefaults::default())
}

/// Reads `page` and `perPage` using caller-supplied defaults.
///
/// # Errors
///
/// `TypeMismatch` if either parameter is present but not numeric.
pub fn optional_pagination_params_with(
    bag: &ArgumentBag,
    defaults: &PaginationDefaults,
) -> Result<PaginationParams, ParamError> {
    let page = optional_int_param_with_default(bag, PAGE_PARAM, defaults.page)?;
    let per_page = optional_int_param_with_default(bag, PER_PAGE_PARAM, defaults.per_page)?;
    Ok(PaginationParams { page, per_page })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Value};
    use toolgate_core::ParamErrorKind;

    fn bag(value: Value) -> ArgumentBag {
        ArgumentBag::from_value(value).unwrap()
    }

    fn params(page: i64, per_page: i64) -> PaginationParams {
        PaginationParams { page, per_page }
    }

    #[test]
    fn test_no_pagination_parameters_default_values() {
        assert_eq!(optional_pagination_params(&bag(json!({}))).unwrap(), params(1, 30));
    }

    #[test]
    fn test_page_parameter_default_per_page() {
        assert_eq!(
            optional_pagination_params(&bag(json!({"page": 2.0}))).unwrap(),
            params(2, 30)
        );
    }

    #[test]
    fn test_per_page_parameter_default_page() {
        assert_eq!(
            optional_pagination_params(&bag(json!({"perPage": 50.0}))).unwrap(),
            params(1, 50)
        );
    }

    #[test]
    fn test_page_and_per_page_parameters() {
        assert_eq!(
            optional_pagination_params(&bag(json!({"page": 2.0, "perPage": 50.0}))).unwrap(),
            params(2, 50)
        );
    }

    #[test]
    fn test_zero_values_fall_back_to_defaults() {
        assert_eq!(
            optional_pagination_params(&bag(json!({"page": 0, "perPage": 0}))).unwrap(),
            params(1, 30)
        );
    }

    #[test]
    fn test_negative_values_pass_through() {
        assert_eq!(
            optional_pagination_params(&bag(json!({"page": -3, "perPage": -1}))).unwrap(),
            params(-3, -1)
        );
    }

    #[test]
    fn test_invalid_page_parameter() {
        let err = optional_pagination_params(&bag(json!({"page": "not-a-number"}))).unwrap_err();
        assert_eq!(err.kind(), ParamErrorKind::TypeMismatch);
        assert_eq!(err.parameter(), PAGE_PARAM);
    }

    #[test]
    fn test_invalid_per_page_parameter() {
        let err =
            optional_pagination_params(&bag(json!({"perPage": "not-a-number"}))).unwrap_err();
        assert_eq!(err.parameter(), PER_PAGE_PARAM);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = PaginationDefaults {
            page: 1,
            per_page: 100,
        };
        assert_eq!(
            optional_pagination_params_with(&bag(json!({"page": 3})), &defaults).unwrap(),
            params(3, 100)
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(params(2, 50)).unwrap();
        assert_eq!(value, json!({"page": 2, "perPage": 50}));
    }

    proptest! {
        #[test]
        fn prop_present_values_are_used(page in 1i64..10_000, per_page in 1i64..=100) {
            let args = bag(json!({"page": page, "perPage": per_page}));
            prop_assert_eq!(optional_pagination_params(&args).unwrap(), params(page, per_page));
        }
    }
}
