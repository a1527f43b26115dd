//! Draft-specific parsing strategies.

use serde_json::{Map, Value};

use super::error::SchemaError;
use super::loader::ParseContext;
use super::node::{AdditionalProperties, SchemaMap, SchemaNode};
use crate::config::DRAFT_04;

/// Turns one schema object into a [`SchemaNode`] following the rules of a
/// particular JSON Schema draft.
///
/// `$ref` handling and draft selection happen in [`ParseContext::parse`]
/// before a strategy is picked; implementations only see plain schema
/// objects and recurse through the context for sub-schemas.
pub trait DraftParser: Send + Sync {
    /// The `$schema` URI this strategy handles.
    fn identifier(&self) -> &'static str;

    /// Parse a schema object.
    fn parse_object(
        &self,
        ctx: &ParseContext<'_>,
        object: &Map<String, Value>,
    ) -> Result<SchemaNode, SchemaError>;
}

/// JSON Schema draft-04.
#[derive(Debug, Default)]
pub struct Draft4Parser;

impl Draft4Parser {
    pub fn new() -> Self {
        Self
    }

    fn parse_map(
        &self,
        ctx: &ParseContext<'_>,
        keyword: &str,
        entries: &Map<String, Value>,
    ) -> Result<SchemaMap, SchemaError> {
        entries
            .iter()
            .map(|(key, value)| {
                let child = ctx.descend(self.identifier(), &format!("{keyword}/{key}"));
                Ok::<_, SchemaError>((key.clone(), child.parse(value)?))
            })
            .collect()
    }

    fn parse_optional_map(
        &self,
        ctx: &ParseContext<'_>,
        object: &Map<String, Value>,
        keyword: &str,
    ) -> Result<Option<SchemaMap>, SchemaError> {
        match object.get(keyword).and_then(Value::as_object) {
            Some(entries) => self.parse_map(ctx, keyword, entries).map(Some),
            None => Ok(None),
        }
    }

    /// Parse `items`, returning the synthesized children and the item label.
    fn parse_items(
        &self,
        ctx: &ParseContext<'_>,
        items: Option<&Value>,
    ) -> Result<(SchemaMap, String), SchemaError> {
        let mut properties = SchemaMap::new();

        match items {
            // Tuple form: one schema per position.
            Some(Value::Array(positions)) => {
                let mut labels = Vec::with_capacity(positions.len());
                for (index, value) in positions.iter().enumerate() {
                    let child = ctx.descend(self.identifier(), &format!("items/{index}"));
                    let node = child.parse(value)?;
                    labels.push(node.type_info.clone());
                    properties.insert(format!("items[{index}]"), node);
                }
                Ok((properties, labels.join(", ")))
            }
            Some(value) => {
                let node = ctx.descend(self.identifier(), "items").parse(value)?;
                let label = node.type_info.clone();
                properties.insert("items".to_string(), node);
                Ok((properties, label))
            }
            None => {
                let empty = Value::Object(Map::new());
                let node = ctx.descend(self.identifier(), "items").parse(&empty)?;
                let label = node.type_info.clone();
                properties.insert("items".to_string(), node);
                Ok((properties, label))
            }
        }
    }
}

/// Read `type` as a label: strings verbatim, arrays of strings joined with `|`.
fn type_label(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("|"),
        _ => String::new(),
    }
}

impl DraftParser for Draft4Parser {
    fn identifier(&self) -> &'static str {
        DRAFT_04
    }

    fn parse_object(
        &self,
        ctx: &ParseContext<'_>,
        object: &Map<String, Value>,
    ) -> Result<SchemaNode, SchemaError> {
        let name = object.get("title").and_then(Value::as_str).map(str::to_owned);

        let mut type_info = type_label(object.get("type"));
        if type_info == "object" {
            if let Some(title) = name.as_deref().filter(|t| !t.is_empty()) {
                let suffix = ctx.title_suffix();
                type_info = if suffix.is_empty() {
                    title.to_string()
                } else {
                    title.replacen(suffix, "", 1)
                };
            }
        }

        let properties = if type_info == "array" {
            let (items, item_label) = self.parse_items(ctx, object.get("items"))?;
            type_info = format!("array<{item_label}>");
            items
        } else {
            match object.get("properties").and_then(Value::as_object) {
                Some(entries) => self.parse_map(ctx, "properties", entries)?,
                None => SchemaMap::new(),
            }
        };

        if type_info == "string" {
            let format = object
                .get("format")
                .and_then(Value::as_str)
                .filter(|f| !f.is_empty());
            if let Some(format) = format {
                type_info = format!("string<{format}>");
            }
        }

        let additional_properties = match object.get("additionalProperties") {
            Some(Value::Bool(allowed)) => AdditionalProperties::Allowed(*allowed),
            Some(value @ Value::Object(_)) => {
                let child = ctx.descend(self.identifier(), "additionalProperties");
                AdditionalProperties::Schema(Box::new(child.parse(value)?))
            }
            _ => AdditionalProperties::Unset,
        };

        let pattern_properties = self.parse_optional_map(ctx, object, "patternProperties")?;
        let definitions = self.parse_optional_map(ctx, object, "definitions")?;

        Ok(SchemaNode {
            name,
            type_info,
            properties,
            additional_properties,
            pattern_properties,
            definitions,
            details: object.clone(),
        })
    }
}
