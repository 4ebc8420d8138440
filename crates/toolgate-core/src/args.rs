//! Argument bag carried by every tool invocation.
//!
//! The [`ArgumentBag`] is the decoded `arguments` object of a tool call. It
//! maps parameter names to dynamically typed JSON values and is only ever
//! read by the accessors in `toolgate-extract`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped key/value input to a single tool invocation.
///
/// Values keep the shape they arrived in: numbers are whatever the JSON
/// decoder produced, arrays may hold mixed element types, and `null` is a
/// present value distinct from an absent key.
///
/// # Example
///
/// ```
/// use toolgate_core::ArgumentBag;
/// use serde_json::json;
///
/// let bag = ArgumentBag::from_value(json!({"owner": "octo", "page": 2}))
///     .expect("object arguments");
///
/// assert!(bag.contains("owner"));
/// assert_eq!(bag.get("page"), Some(&json!(2)));
/// assert!(bag.get("repo").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentBag(Map<String, Value>);

impl ArgumentBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bag from a JSON value.
    ///
    /// Returns `None` when the value is not a JSON object. A `null` value is
    /// treated as an empty bag, matching a request that omits `arguments`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            Value::Null => Some(Self::new()),
            _ => None,
        }
    }

    /// Inserts a value, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is present, even when its value is `null`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bag holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over parameter names and values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrows the underlying JSON map.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the bag into a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ArgumentBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ArgumentBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Returns the JSON type name of a value, as used in error messages.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_object() {
        let bag = ArgumentBag::from_value(json!({"a": 1, "b": "x"})).unwrap();
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.get("b"), Some(&json!("x")));
    }

    #[test]
    fn test_from_value_null_is_empty() {
        let bag = ArgumentBag::from_value(Value::Null).unwrap();
        assert!(bag.is_empty());
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(ArgumentBag::from_value(json!([1, 2])).is_none());
        assert!(ArgumentBag::from_value(json!("args")).is_none());
    }

    #[test]
    fn test_null_value_is_present() {
        let bag = ArgumentBag::from_value(json!({"reason": null})).unwrap();
        assert!(bag.contains("reason"));
        assert_eq!(bag.get("reason"), Some(&Value::Null));
    }

    #[test]
    fn test_from_iter_and_insert() {
        let mut bag: ArgumentBag = [("owner", "octo")].into_iter().collect();
        bag.insert("labels", vec!["bug", "help wanted"]);

        assert_eq!(bag.get("owner"), Some(&json!("octo")));
        assert_eq!(bag.get("labels"), Some(&json!(["bug", "help wanted"])));
    }

    #[test]
    fn test_serde_is_transparent() {
        let bag: ArgumentBag = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert_eq!(bag.get("page"), Some(&json!(3)));
        assert_eq!(serde_json::to_string(&bag).unwrap(), r#"{"page":3}"#);
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("s")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
