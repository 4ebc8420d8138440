//! Array accessors.

use crate::param::rejected;
use serde_json::Value;
use toolgate_core::{json_type_name, ArgumentBag, ParamError};

const STRING_ARRAY: &str = "array of strings";

/// Reads an optional list of strings.
///
/// An absent key yields an empty vector. The whole array is rejected if any
/// element is not a string; bad elements are never dropped silently.
///
/// # Errors
///
/// `TypeMismatch` naming the array parameter when the value is not an array
/// or holds a non-string element.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use toolgate_core::ArgumentBag;
/// use toolgate_extract::optional_string_array_param;
///
/// let bag = ArgumentBag::from_value(json!({"labels": ["bug", "docs"], "mixed": ["a", 2]}))
///     .unwrap();
///
/// assert_eq!(optional_string_array_param(&bag, "labels").unwrap(), ["bug", "docs"]);
/// assert!(optional_string_array_param(&bag, "mixed").is_err());
/// assert!(optional_string_array_param(&bag, "assignees").unwrap().is_empty());
/// ```
pub fn optional_string_array_param(
    bag: &ArgumentBag,
    name: &str,
) -> Result<Vec<String>, ParamError> {
    let Some(value) = bag.get(name) else {
        return Ok(Vec::new());
    };

    let Value::Array(items) = value else {
        return Err(rejected(ParamError::type_mismatch(
            name,
            STRING_ARRAY,
            json_type_name(value),
        )));
    };

    items
        .iter()
        .map(|item| {
            item.as_str().map(ToString::to_string).ok_or_else(|| {
                rejected(ParamError::type_mismatch(
                    name,
                    STRING_ARRAY,
                    "array with non-string elements",
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolgate_core::ParamErrorKind;

    fn bag(value: Value) -> ArgumentBag {
        ArgumentBag::from_value(value).unwrap()
    }

    #[test]
    fn test_parameter_not_in_request() {
        let result = optional_string_array_param(&bag(json!({})), "flag").unwrap();
        assert_eq!(result, Vec::<String>::new());
    }

    #[test]
    fn test_valid_any_array_parameter() {
        let result = optional_string_array_param(&bag(json!({"flag": ["v1", "v2"]})), "flag");
        assert_eq!(result.unwrap(), vec!["v1", "v2"]);
    }

    #[test]
    fn test_valid_string_array_parameter() {
        let mut args = ArgumentBag::new();
        args.insert("flag", vec!["v1".to_string(), "v2".to_string()]);

        let result = optional_string_array_param(&args, "flag").unwrap();
        assert_eq!(result, vec!["v1", "v2"]);
    }

    #[test]
    fn test_empty_array() {
        let result = optional_string_array_param(&bag(json!({"flag": []})), "flag").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_wrong_type_parameter() {
        let err = optional_string_array_param(&bag(json!({"flag": 1})), "flag").unwrap_err();
        assert_eq!(err.kind(), ParamErrorKind::TypeMismatch);
        assert_eq!(err.actual(), Some("number"));
    }

    #[test]
    fn test_wrong_slice_type_parameter() {
        let err = optional_string_array_param(&bag(json!({"flag": ["foo", 2]})), "flag")
            .unwrap_err();
        assert_eq!(err.kind(), ParamErrorKind::TypeMismatch);
        assert_eq!(err.parameter(), "flag");
    }

    #[test]
    fn test_null_element_rejects_whole_array() {
        let result = optional_string_array_param(&bag(json!({"flag": ["a", null, "b"]})), "flag");
        assert!(result.is_err());
    }

    #[test]
    fn test_string_is_not_an_array() {
        let err = optional_string_array_param(&bag(json!({"flag": "a,b"})), "flag").unwrap_err();
        assert_eq!(err.actual(), Some("string"));
    }
}
