//! Typed parameter accessors.
//!
//! [`FromArgument`] is implemented once per supported target type and holds
//! the only type-check-and-coerce logic in the crate. [`required_param`] and
//! [`optional_param`] layer the presence rules on top of it.

use serde_json::{Map, Value};
use toolgate_core::{json_type_name, ArgumentBag, ParamError};

/// Trait for types that can be read out of a single argument value.
///
/// The [`Default`] value doubles as the zero value returned by
/// [`optional_param`] for absent keys.
///
/// # Implementing `FromArgument`
///
/// ```rust
/// use serde_json::Value;
/// use toolgate_extract::{optional_param, FromArgument};
/// use toolgate_core::ArgumentBag;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Sha(String);
///
/// impl FromArgument for Sha {
///     const TYPE_NAME: &'static str = "sha";
///
///     fn from_argument(value: &Value) -> Option<Self> {
///         value
///             .as_str()
///             .filter(|s| s.len() == 40 && s.chars().all(|c| c.is_ascii_hexdigit()))
///             .map(|s| Sha(s.to_string()))
///     }
/// }
///
/// let bag: ArgumentBag = [("sha", "not-a-sha")].into_iter().collect();
/// assert!(optional_param::<Sha>(&bag, "sha").is_err());
/// ```
pub trait FromArgument: Sized + Default {
    /// Name of the expected type, used in mismatch errors.
    const TYPE_NAME: &'static str;

    /// Converts `value` into `Self`, or `None` if the dynamic type does not fit.
    fn from_argument(value: &Value) -> Option<Self>;

    /// Returns `true` if this value counts as absent for required parameters.
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl FromArgument for String {
    const TYPE_NAME: &'static str = "string";

    fn from_argument(value: &Value) -> Option<Self> {
        value.as_str().map(ToString::to_string)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl FromArgument for f64 {
    const TYPE_NAME: &'static str = "number";

    fn from_argument(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromArgument for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_argument(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromArgument for Vec<Value> {
    const TYPE_NAME: &'static str = "array";

    fn from_argument(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl FromArgument for Map<String, Value> {
    const TYPE_NAME: &'static str = "object";

    fn from_argument(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

/// Logs a rejected parameter and hands the error back.
pub(crate) fn rejected(err: ParamError) -> ParamError {
    tracing::debug!(
        parameter = err.parameter(),
        kind = %err.kind(),
        "rejected tool parameter"
    );
    err
}

pub(crate) fn coerce<T: FromArgument>(name: &str, value: &Value) -> Result<T, ParamError> {
    T::from_argument(value).ok_or_else(|| {
        rejected(ParamError::type_mismatch(
            name,
            T::TYPE_NAME,
            json_type_name(value),
        ))
    })
}

/// Reads a required parameter.
///
/// # Errors
///
/// - `Missing` if `name` is absent from the bag
/// - `TypeMismatch` if the value cannot be read as `T`
/// - `Empty` if `T` is a string and the value is `""`
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use toolgate_core::{ArgumentBag, ParamErrorKind};
/// use toolgate_extract::required_param;
///
/// let bag = ArgumentBag::from_value(json!({"owner": "octo", "repo": ""})).unwrap();
///
/// let owner: String = required_param(&bag, "owner").unwrap();
/// assert_eq!(owner, "octo");
///
/// let err = required_param::<String>(&bag, "repo").unwrap_err();
/// assert_eq!(err.kind(), ParamErrorKind::Empty);
///
/// let err = required_param::<String>(&bag, "branch").unwrap_err();
/// assert_eq!(err.kind(), ParamErrorKind::Missing);
/// ```
pub fn required_param<T: FromArgument>(bag: &ArgumentBag, name: &str) -> Result<T, ParamError> {
    let value = bag
        .get(name)
        .ok_or_else(|| rejected(ParamError::missing(name)))?;

    let value: T = coerce(name, value)?;
    if value.is_empty_value() {
        return Err(rejected(ParamError::empty(name)));
    }
    Ok(value)
}

/// Reads an optional parameter.
///
/// Returns `T::default()` when `name` is absent. A present value of the wrong
/// type is still an error; an empty string is returned as-is.
///
/// # Errors
///
/// `TypeMismatch` if the value is present but cannot be read as `T`.
pub fn optional_param<T: FromArgument>(bag: &ArgumentBag, name: &str) -> Result<T, ParamError> {
    match bag.get(name) {
        None => Ok(T::default()),
        Some(value) => coerce(name, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use toolgate_core::ParamErrorKind;

    fn bag(value: Value) -> ArgumentBag {
        ArgumentBag::from_value(value).unwrap()
    }

    #[test]
    fn test_required_string_valid() {
        let result: String = required_param(&bag(json!({"name": "test-value"})), "name").unwrap();
        assert_eq!(result, "test-value");
    }

    #[test]
    fn test_required_string_missing() {
        let err = required_param::<String>(&bag(json!({})), "name").unwrap_err();
        assert_eq!(err.kind(), ParamErrorKind::Missing);
        assert_eq!(err.parameter(), "name");
    }

    #[test]
    fn test_required_string_empty() {
        let err = required_param::<String>(&bag(json!({"name": ""})), "name").unwrap_err();
        assert_eq!(err.kind(), ParamErrorKind::Empty);
    }

    #[test]
    fn test_required_string_wrong_type() {
        let err = required_param::<String>(&bag(json!({"name": 123})), "name").unwrap_err();
        assert_eq!(err.kind(), ParamErrorKind::TypeMismatch);
        assert_eq!(err.actual(), Some("number"));
    }

    #[test]
    fn test_required_null_is_type_mismatch() {
        let err = required_param::<String>(&bag(json!({"name": null})), "name").unwrap_err();
        assert_eq!(err.kind(), ParamErrorKind::TypeMismatch);
        assert_eq!(err.actual(), Some("null"));
    }

    #[test]
    fn test_required_bool_false_is_a_value() {
        let result: bool = required_param(&bag(json!({"draft": false})), "draft").unwrap();
        assert!(!result);
    }

    #[test]
    fn test_optional_string_valid() {
        let result: String = optional_param(&bag(json!({"name": "test-value"})), "name").unwrap();
        assert_eq!(result, "test-value");
    }

    #[test]
    fn test_optional_string_missing() {
        let result: String = optional_param(&bag(json!({})), "name").unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_optional_string_empty() {
        let result: String = optional_param(&bag(json!({"name": ""})), "name").unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_optional_string_wrong_type() {
        let err = optional_param::<String>(&bag(json!({"name": 123})), "name").unwrap_err();
        assert_eq!(err.kind(), ParamErrorKind::TypeMismatch);
    }

    #[test]
    fn test_optional_bool() {
        assert!(optional_param::<bool>(&bag(json!({"flag": true})), "flag").unwrap());
        assert!(!optional_param::<bool>(&bag(json!({"flag": false})), "flag").unwrap());
        assert!(!optional_param::<bool>(&bag(json!({})), "flag").unwrap());

        let err = optional_param::<bool>(&bag(json!({"flag": "not-a-boolean"})), "flag")
            .unwrap_err();
        assert_eq!(err.kind(), ParamErrorKind::TypeMismatch);
        assert_eq!(err.expected(), Some("boolean"));
    }

    #[test]
    fn test_optional_object_and_array() {
        let args = bag(json!({"inputs": {"ref": "main"}, "items": [1, "two"]}));

        let inputs: Map<String, Value> = optional_param(&args, "inputs").unwrap();
        assert_eq!(inputs["ref"], "main");

        let items: Vec<Value> = optional_param(&args, "items").unwrap();
        assert_eq!(items.len(), 2);

        assert!(optional_param::<Vec<Value>>(&args, "inputs").is_err());
    }

    #[test]
    fn test_number_from_integer_literal() {
        let result: f64 = required_param(&bag(json!({"count": 42})), "count").unwrap();
        assert_eq!(result, 42.0);
    }

    proptest! {
        #[test]
        fn prop_missing_key(key in "[a-z]{1,12}") {
            let empty = ArgumentBag::new();
            prop_assert_eq!(
                required_param::<String>(&empty, &key).unwrap_err().kind(),
                ParamErrorKind::Missing
            );
            prop_assert_eq!(optional_param::<String>(&empty, &key).unwrap(), String::new());
            prop_assert_eq!(optional_param::<f64>(&empty, &key).unwrap(), 0.0);
            prop_assert!(!optional_param::<bool>(&empty, &key).unwrap());
        }

        #[test]
        fn prop_non_empty_string_is_returned_unchanged(v in ".+") {
            let args: ArgumentBag = [("v", v.clone())].into_iter().collect();
            prop_assert_eq!(required_param::<String>(&args, "v").unwrap(), v);
        }
    }
}
