//! Integer accessors.
//!
//! JSON numbers always arrive as a single floating-point representation, so
//! every integer read goes through `f64` first and is then truncated toward
//! zero.

use crate::param::{optional_param, required_param};
use toolgate_core::{ArgumentBag, ParamError};

fn truncate(value: f64) -> i64 {
    value as i64
}

/// Reads a required integer parameter.
///
/// # Errors
///
/// `Missing` when absent, `TypeMismatch` when the value is not numeric.
pub fn required_int(bag: &ArgumentBag, name: &str) -> Result<i64, ParamError> {
    required_param::<f64>(bag, name).map(truncate)
}

/// Reads an optional integer parameter.
///
/// An absent key yields `0`. A stored `0` is a real value and is returned
/// as `0`; use [`optional_int_param_with_default`] when zero means "unset".
///
/// # Errors
///
/// `TypeMismatch` when the value is present but not numeric.
pub fn optional_int_param(bag: &ArgumentBag, name: &str) -> Result<i64, ParamError> {
    optional_param::<f64>(bag, name).map(truncate)
}

/// Reads an optional integer parameter, substituting `default` when the key
/// is absent or holds `0`.
///
/// # Errors
///
/// `TypeMismatch` when the value is present but not numeric.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use toolgate_core::ArgumentBag;
/// use toolgate_extract::{optional_int_param, optional_int_param_with_default};
///
/// let bag = ArgumentBag::from_value(json!({"count": 0})).unwrap();
///
/// assert_eq!(optional_int_param(&bag, "count").unwrap(), 0);
/// assert_eq!(optional_int_param_with_default(&bag, "count", 10).unwrap(), 10);
/// ```
pub fn optional_int_param_with_default(
    bag: &ArgumentBag,
    name: &str,
    default: i64,
) -> Result<i64, ParamError> {
    let value = optional_int_param(bag, name)?;
    if value == 0 {
        return Ok(default);
    }
    Ok(value)
}
