//! Normalized schema tree.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Ordered collection of named child schemas.
pub type SchemaMap = IndexMap<String, SchemaNode>;

/// Value of the `additionalProperties` keyword.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AdditionalProperties {
    /// Keyword absent (or holding something that is neither a bool nor a schema).
    #[default]
    Unset,
    /// `additionalProperties: true` / `false`.
    Allowed(bool),
    /// `additionalProperties: { ... }`.
    Schema(Box<SchemaNode>),
}

impl AdditionalProperties {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn as_schema(&self) -> Option<&SchemaNode> {
        match self {
            Self::Schema(node) => Some(node),
            _ => None,
        }
    }
}

/// One schema (or sub-schema) in the normalized tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaNode {
    /// Display name, taken from `title`.
    pub name: Option<String>,
    /// Synthesized type label, e.g. `string<uuid>` or `array<Pet>`.
    pub type_info: String,
    /// Child schemas from `properties`, or the synthesized `items` entry for arrays.
    pub properties: SchemaMap,
    pub additional_properties: AdditionalProperties,
    pub pattern_properties: Option<SchemaMap>,
    pub definitions: Option<SchemaMap>,
    /// The raw mapping this node was built from.
    pub details: Map<String, Value>,
}

impl SchemaNode {
    /// A leaf for a `$ref` that is deliberately left unresolved.
    pub fn unresolved(details: Map<String, Value>) -> Self {
        Self {
            details,
            ..Self::default()
        }
    }

    /// The raw `$ref` string, if this node carries one.
    pub fn reference(&self) -> Option<&str> {
        self.details.get("$ref").and_then(Value::as_str)
    }

    /// True for `#...` / `http...` references kept as leaves.
    pub fn is_unresolved_ref(&self) -> bool {
        self.type_info.is_empty() && self.details.contains_key("$ref")
    }

    /// Whether `key` is listed in this node's `required` array.
    pub fn is_required(&self, key: &str) -> bool {
        self.details
            .get("required")
            .and_then(Value::as_array)
            .is_some_and(|required| required.iter().any(|k| k.as_str() == Some(key)))
    }

    pub fn has_children(&self) -> bool {
        !self.properties.is_empty()
            || !self.additional_properties.is_unset()
            || self.pattern_properties.is_some()
            || self.definitions.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_unresolved_leaf() {
        let node = SchemaNode::unresolved(details(json!({"$ref": "#/definitions/Pet"})));
        assert!(node.is_unresolved_ref());
        assert_eq!(node.reference(), Some("#/definitions/Pet"));
        assert!(!node.has_children());
    }

    #[test]
    fn test_is_required() {
        let node = SchemaNode {
            details: details(json!({"required": ["id", 3]})),
            ..SchemaNode::default()
        };
        assert!(node.is_required("id"));
        assert!(!node.is_required("name"));
    }

    #[test]
    fn test_required_not_an_array() {
        let node = SchemaNode {
            details: details(json!({"required": true})),
            ..SchemaNode::default()
        };
        assert!(!node.is_required("id"));
    }
}
