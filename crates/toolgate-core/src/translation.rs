//! Localization hook for tool descriptions.
//!
//! Tool declarations ask an externally supplied lookup for every
//! human-readable string, passing a stable key and the English default. The
//! lookup table itself lives outside this crate.

/// String lookup of the form `(key, default) -> text`.
///
/// Any `Fn(&str, &str) -> String` closure or function qualifies.
pub trait TranslationHelper: Fn(&str, &str) -> String + Send + Sync {}

impl<F> TranslationHelper for F where F: Fn(&str, &str) -> String + Send + Sync {}

/// Lookup that always returns the default text.
///
/// # Example
///
/// ```
/// use toolgate_core::null_translation_helper;
///
/// assert_eq!(
///     null_translation_helper("TOOL_GET_ME_DESCRIPTION", "Get my user profile"),
///     "Get my user profile"
/// );
/// ```
#[must_use]
pub fn null_translation_helper(_key: &str, default: &str) -> String {
    default.to_string()
}
