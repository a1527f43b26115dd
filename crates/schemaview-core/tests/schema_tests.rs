use std::sync::Arc;

use schemaview_core::config::DRAFT_04;
use schemaview_core::schema::ParseContext;
use schemaview_core::{
    AdditionalProperties, DraftParser, DraftRegistry, ModelConfig, SchemaError, SchemaLoader,
    SchemaMap, SchemaNode,
};
use serde_json::{json, Map, Value};
use tempfile::TempDir;

fn parse(document: Value) -> SchemaNode {
    SchemaLoader::new().parse(&document, ".").unwrap()
}

#[test]
fn test_object_title_becomes_type() {
    let node = parse(json!({"title": "PetRepresentation", "type": "object"}));
    assert_eq!(node.name.as_deref(), Some("PetRepresentation"));
    assert_eq!(node.type_info, "Pet");
}

#[test]
fn test_title_suffix_removed_once() {
    let node = parse(json!({"title": "RepresentationRepresentation", "type": "object"}));
    assert_eq!(node.type_info, "Representation");
}

#[test]
fn test_title_ignored_for_non_objects() {
    let node = parse(json!({"title": "PetRepresentation", "type": "string"}));
    assert_eq!(node.type_info, "string");
}

#[test]
fn test_empty_title_is_absent() {
    let node = parse(json!({"type": "object", "title": ""}));
    assert_eq!(node.type_info, "object");
}

#[test]
fn test_object_without_title() {
    let node = parse(json!({"type": "object"}));
    assert_eq!(node.name, None);
    assert_eq!(node.type_info, "object");
}

#[test]
fn test_custom_title_suffix() {
    let config = ModelConfig {
        title_suffix: "Dto".to_string(),
        ..ModelConfig::default()
    };
    let loader = SchemaLoader::with_config(&config);
    let node = loader
        .parse(&json!({"title": "PetDto", "type": "object"}), ".")
        .unwrap();
    assert_eq!(node.type_info, "Pet");

    let config = ModelConfig {
        title_suffix: String::new(),
        ..ModelConfig::default()
    };
    let node = SchemaLoader::with_config(&config)
        .parse(&json!({"title": "PetRepresentation", "type": "object"}), ".")
        .unwrap();
    assert_eq!(node.type_info, "PetRepresentation");
}

#[test]
fn test_array_type_label() {
    let node = parse(json!({
        "type": "array",
        "items": {"title": "Tag", "type": "object"}
    }));
    assert_eq!(node.type_info, "array<Tag>");
    assert_eq!(node.properties.len(), 1);
    assert_eq!(node.properties["items"].type_info, "Tag");
}

#[test]
fn test_array_without_items() {
    let node = parse(json!({"type": "array"}));
    assert_eq!(node.type_info, "array<>");
    assert_eq!(node.properties["items"].type_info, "");
    assert!(node.properties["items"].details.is_empty());
}

#[test]
fn test_nested_arrays() {
    let node = parse(json!({
        "type": "array",
        "items": {"type": "array", "items": {"type": "string", "format": "uuid"}}
    }));
    assert_eq!(node.type_info, "array<array<string<uuid>>>");
}

#[test]
fn test_tuple_items() {
    let node = parse(json!({
        "type": "array",
        "items": [{"type": "string"}, {"type": "integer"}]
    }));
    assert_eq!(node.type_info, "array<string, integer>");
    let keys: Vec<&str> = node.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["items[0]", "items[1]"]);
}

#[test]
fn test_array_ignores_properties() {
    let node = parse(json!({
        "type": "array",
        "items": {"type": "string"},
        "properties": {"a": {"type": "string"}}
    }));
    let keys: Vec<&str> = node.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["items"]);
}

#[test]
fn test_string_format() {
    let node = parse(json!({"type": "string", "format": "uuid"}));
    assert_eq!(node.type_info, "string<uuid>");

    let node = parse(json!({"type": "integer", "format": "int64"}));
    assert_eq!(node.type_info, "integer");
}

#[test]
fn test_type_union() {
    let node = parse(json!({"type": ["string", "null"]}));
    assert_eq!(node.type_info, "string|null");
}

#[test]
fn test_missing_type() {
    let node = parse(json!({"description": "anything"}));
    assert_eq!(node.type_info, "");
    assert!(node.properties.is_empty());
}

#[test]
fn test_property_order_preserved() {
    let document: Value = serde_json::from_str(
        r#"{"type": "object", "properties": {"c": {}, "a": {}, "b": {}}}"#,
    )
    .unwrap();
    let node = parse(document);
    let keys: Vec<&str> = node.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["c", "a", "b"]);
}

#[test]
fn test_additional_properties_variants() {
    assert_eq!(parse(json!({})).additional_properties, AdditionalProperties::Unset);
    assert_eq!(
        parse(json!({"additionalProperties": false})).additional_properties,
        AdditionalProperties::Allowed(false)
    );
    assert_eq!(
        parse(json!({"additionalProperties": "nope"})).additional_properties,
        AdditionalProperties::Unset
    );

    let node = parse(json!({"additionalProperties": {"type": "integer"}}));
    let schema = node.additional_properties.as_schema().unwrap();
    assert_eq!(schema.type_info, "integer");
}

#[test]
fn test_pattern_properties_and_definitions() {
    let node = parse(json!({
        "type": "object",
        "patternProperties": {"^x-": {"type": "string"}},
        "definitions": {"Id": {"type": "string", "format": "uuid"}}
    }));

    let patterns = node.pattern_properties.as_ref().unwrap();
    assert_eq!(patterns["^x-"].type_info, "string");

    let definitions = node.definitions.as_ref().unwrap();
    assert_eq!(definitions["Id"].type_info, "string<uuid>");

    let bare = parse(json!({"type": "object"}));
    assert!(bare.pattern_properties.is_none());
    assert!(bare.definitions.is_none());
}

#[test]
fn test_internal_ref_is_leaf() {
    let node = parse(json!({"$ref": "#/definitions/Foo", "title": "ignored", "type": "object"}));
    assert_eq!(node.type_info, "");
    assert_eq!(node.name, None);
    assert_eq!(node.reference(), Some("#/definitions/Foo"));
    assert!(!node.has_children());
}

#[test]
fn test_remote_ref_is_leaf() {
    let node = parse(json!({"$ref": "http://example.com/s.json"}));
    assert_eq!(node.type_info, "");
    assert_eq!(node.details["$ref"], json!("http://example.com/s.json"));
    assert!(node.properties.is_empty());
}

#[test]
fn test_non_string_ref_is_parsed_normally() {
    let node = parse(json!({"$ref": 5, "type": "string"}));
    assert_eq!(node.type_info, "string");
}

#[test]
fn test_details_round_trip() {
    let document = json!({
        "title": "Pet",
        "type": "object",
        "description": "A pet",
        "minimum": 3,
        "enum": ["a", "b"],
        "properties": {"name": {"type": "string"}},
        "definitions": {"X": {}}
    });
    let node = parse(document.clone());
    assert_eq!(Value::Object(node.details.clone()), document);
    assert_eq!(
        Value::Object(node.properties["name"].details.clone()),
        json!({"type": "string"})
    );
}

#[test]
fn test_not_an_object() {
    let err = SchemaLoader::new()
        .parse(&json!({"properties": {"a": true}}), ".")
        .unwrap_err();
    match err {
        SchemaError::NotAnObject { location, found } => {
            assert_eq!(location, "#/properties/a");
            assert_eq!(found, "a boolean");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_draft_uses_draft4() {
    let node = parse(json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "string",
        "format": "date"
    }));
    assert_eq!(node.type_info, "string<date>");
}

#[test]
fn test_loader_registry() {
    let loader = SchemaLoader::new().with_registry(DraftRegistry::new());
    assert!(loader.registry().supports(DRAFT_04));
}

#[test]
fn test_empty_format_is_absent() {
    let node = parse(json!({"type": "string", "format": ""}));
    assert_eq!(node.type_info, "string");
}

const TAGGING_DRAFT: &str = "urn:schemaview:tagging-draft";

/// Prefixes every type with `tagged:` and recurses into `properties`.
struct TaggingDraft;

impl DraftParser for TaggingDraft {
    fn identifier(&self) -> &'static str {
        TAGGING_DRAFT
    }

    fn parse_object(
        &self,
        ctx: &ParseContext<'_>,
        object: &Map<String, Value>,
    ) -> Result<SchemaNode, SchemaError> {
        let kind = object.get("type").and_then(Value::as_str).unwrap_or("");
        let mut properties = SchemaMap::new();
        if let Some(Value::Object(children)) = object.get("properties") {
            for (key, value) in children {
                let child = ctx.descend(self.identifier(), &format!("properties/{key}"));
                properties.insert(key.clone(), child.parse(value)?);
            }
        }
        Ok(SchemaNode {
            type_info: format!("tagged:{kind}"),
            properties,
            details: object.clone(),
            ..SchemaNode::default()
        })
    }
}

#[test]
fn test_custom_draft_is_inherited_but_not_across_files() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("id.json"),
        r#"{"type": "string", "format": "uuid"}"#,
    )
    .unwrap();

    let mut registry = DraftRegistry::new();
    registry.register(Arc::new(TaggingDraft));
    let loader = SchemaLoader::new().with_registry(registry);

    let document = json!({
        "$schema": format!("{TAGGING_DRAFT}#"),
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "id": {"$ref": "id.json"}
        }
    });
    let root = loader.parse(&document, temp.path()).unwrap();

    assert_eq!(root.type_info, "tagged:object");
    assert_eq!(root.properties["name"].type_info, "tagged:string");
    assert_eq!(root.properties["id"].type_info, "string<uuid>");
}
