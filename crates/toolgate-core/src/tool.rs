//! Tool declarations.
//!
//! A [`Tool`] is the declared contract of one exposed operation: its name,
//! a translated description and the parameters it accepts. Declarations are
//! built by hand with [`ToolBuilder`]; nothing here derives them from Rust
//! types.
//!
//! # Example
//!
//! ```
//! use toolgate_core::{null_translation_helper, Tool};
//!
//! let t = null_translation_helper;
//! let tool = Tool::builder("list_issues")
//!     .description(t("TOOL_LIST_ISSUES_DESCRIPTION", "List issues in a repository"))
//!     .string_property("owner", "Repository owner")
//!     .string_property("repo", "Repository name")
//!     .array_property("labels", "Filter by labels")
//!     .required("owner")
//!     .required("repo")
//!     .with_pagination()
//!     .build();
//!
//! assert_eq!(tool.name(), "list_issues");
//! assert!(tool.input_schema().properties.contains_key("perPage"));
//! assert_eq!(tool.input_schema().required, vec!["owner", "repo"]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic type of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// A string.
    String,
    /// A JSON number.
    Number,
    /// A boolean.
    Boolean,
    /// An array of strings.
    Array,
    /// A nested object.
    Object,
}

/// Descriptor of a single declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Semantic type.
    #[serde(rename = "type")]
    pub kind: PropertyType,
    /// Human-readable description.
    pub description: String,
    /// Element type for arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,
    /// Inclusive lower bound for numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

impl Property {
    fn new(kind: PropertyType, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            items: None,
            minimum: None,
            maximum: None,
        }
    }
}

/// Declared input of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Parameters by name.
    pub properties: BTreeMap<String, Property>,
    /// Names of required parameters, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Default for InputSchema {
    fn default() -> Self {
        Self {
            kind: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }
}

/// Declaration of an exposed tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    name: String,
    description: String,
    input_schema: InputSchema,
}

impl Tool {
    /// Starts building a tool declaration.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ToolBuilder {
        ToolBuilder::new(name)
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the declared input.
    #[must_use]
    pub fn input_schema(&self) -> &InputSchema {
        &self.input_schema
    }
}

/// Builder for [`Tool`].
#[derive(Debug, Clone)]
#[must_use]
pub struct ToolBuilder {
    name: String,
    description: String,
    input_schema: InputSchema,
}

impl ToolBuilder {
    /// Creates a builder for a tool called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            input_schema: InputSchema::default(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declares a string parameter.
    pub fn string_property(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.property(name, Property::new(PropertyType::String, description))
    }

    /// Declares a number parameter.
    pub fn number_property(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.property(name, Property::new(PropertyType::Number, description))
    }

    /// Declares a boolean parameter.
    pub fn boolean_property(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.property(name, Property::new(PropertyType::Boolean, description))
    }

    /// Declares an array-of-strings parameter.
    pub fn array_property(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut property = Property::new(PropertyType::Array, description);
        property.items = Some(Box::new(Property::new(PropertyType::String, "")));
        self.property(name, property)
    }

    /// Declares a parameter with a custom descriptor.
    pub fn property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.input_schema.properties.insert(name.into(), property);
        self
    }

    /// Marks a declared parameter as required.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.input_schema.required.contains(&name) {
            self.input_schema.required.push(name);
        }
        self
    }

    /// Declares the `page` and `perPage` parameters read by the pagination
    /// normalizer.
    pub fn with_pagination(self) -> Self {
        let mut page = Property::new(PropertyType::Number, "Page number for pagination (min 1)");
        page.minimum = Some(1.0);
        let mut per_page = Property::new(
            PropertyType::Number,
            "Results per page for pagination (min 1, max 100)",
        );
        per_page.minimum = Some(1.0);
        per_page.maximum = Some(100.0);
        self.property("page", page).property("perPage", per_page)
    }

    /// Builds the declaration.
    pub fn build(self) -> Tool {
        Tool {
            name: self.name,
            description: self.description,
            input_schema: self.input_schema,
        }
    }
}
