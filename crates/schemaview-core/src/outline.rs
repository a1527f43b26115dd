//! Display outline for a schema tree.
//!
//! Flattens a [`SchemaNode`] tree into an arena of rows: one row per schema,
//! plus synthetic group rows for `properties`, `additionalProperties`,
//! `patternProperties` and `definitions`. Expansion state lives on the rows,
//! so the outline is everything a front end needs to draw and navigate.

use serde_json::Value;

use crate::config::ViewConfig;
use crate::schema::{AdditionalProperties, SchemaMap, SchemaNode};

/// Keys that are shown as children rather than in the details listing.
pub const STRUCTURAL_KEYS: &[&str] = &[
    "definitions",
    "properties",
    "patternProperties",
    "additionalProperties",
    "items",
];

/// Value column text for unresolved references.
pub const REF_MARKER: &str = "$ref";

/// Category of a synthetic group row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Properties,
    AdditionalProperties,
    PatternProperties,
    Definitions,
}

impl GroupKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::AdditionalProperties => "additionalProperties",
            Self::PatternProperties => "patternProperties",
            Self::Definitions => "definitions",
        }
    }
}

/// What a row stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Schema,
    Group(GroupKind),
}

/// One field of a schema shown in the details pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub key: String,
    pub value: String,
}

/// A row in the outline.
#[derive(Debug, Clone)]
pub struct OutlineRow {
    pub label: String,
    /// Type column text.
    pub value: String,
    pub kind: RowKind,
    /// Rendered bold (schemas that have properties).
    pub emphasized: bool,
    pub required: bool,
    pub expanded: bool,
    pub depth: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub details: Vec<DetailEntry>,
}

impl OutlineRow {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, RowKind::Group(_))
    }
}

/// Tree of display rows built from a schema.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    rows: Vec<OutlineRow>,
}

/// Type column text: the type label, or the ref marker for unresolved refs.
pub fn display_type(node: &SchemaNode) -> String {
    if node.type_info.is_empty() && node.details.contains_key("$ref") {
        REF_MARKER.to_string()
    } else {
        node.type_info.clone()
    }
}

/// Render a raw schema value for the details pane.
///
/// Strings are shown without quotes, arrays and objects as compact JSON.
pub fn format_detail(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Details listing for a node: every raw key except the structural ones.
pub fn detail_entries(node: &SchemaNode) -> Vec<DetailEntry> {
    node.details
        .iter()
        .filter(|(key, _)| !STRUCTURAL_KEYS.contains(&key.as_str()))
        .map(|(key, value)| DetailEntry {
            key: key.clone(),
            value: format_detail(value),
        })
        .collect()
}

impl Outline {
    /// Build the outline for a root schema.
    pub fn build(root: &SchemaNode, config: &ViewConfig) -> Self {
        let mut outline = Self::default();
        let mut builder = Builder {
            outline: &mut outline,
            config,
        };
        let label = root.name.clone().unwrap_or_default();
        builder.add_schema(None, label, false, root);
        outline
    }

    pub fn rows(&self) -> &[OutlineRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&OutlineRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of top-level rows.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.parent.is_none())
            .map(|(index, _)| index)
    }

    /// Row indices in display order, skipping children of collapsed rows.
    pub fn visible_rows(&self) -> Vec<usize> {
        let mut visible = Vec::with_capacity(self.rows.len());
        for root in self.roots() {
            self.collect_visible(root, &mut visible);
        }
        visible
    }

    fn collect_visible(&self, index: usize, out: &mut Vec<usize>) {
        out.push(index);
        let row = &self.rows[index];
        if row.expanded {
            for &child in &row.children {
                self.collect_visible(child, out);
            }
        }
    }

    /// Set the expansion state of a row. Returns whether anything changed.
    pub fn set_expanded(&mut self, index: usize, expanded: bool) -> bool {
        match self.rows.get_mut(index) {
            Some(row) if row.has_children() && row.expanded != expanded => {
                row.expanded = expanded;
                true
            }
            _ => false,
        }
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        match self.rows.get(index).map(|row| row.expanded) {
            Some(expanded) => self.set_expanded(index, !expanded),
            None => false,
        }
    }

    /// Expand or collapse every row.
    pub fn set_all_expanded(&mut self, expanded: bool) {
        for row in &mut self.rows {
            if row.has_children() {
                row.expanded = expanded;
            }
        }
    }

    /// Plain-text rendering of the whole outline, ignoring expansion state.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for root in self.roots() {
            self.write_text(root, &mut out);
        }
        out
    }

    fn write_text(&self, index: usize, out: &mut String) {
        let row = &self.rows[index];
        let indent = "  ".repeat(row.depth);
        let label = if row.is_group() {
            format!("[{}]", row.label)
        } else {
            row.label.clone()
        };
        if row.value.is_empty() {
            out.push_str(&format!("{indent}{label}\n"));
        } else {
            out.push_str(&format!("{indent}{label}: {}\n", row.value));
        }
        for &child in &row.children {
            self.write_text(child, out);
        }
    }
}

struct Builder<'a> {
    outline: &'a mut Outline,
    config: &'a ViewConfig,
}

impl Builder<'_> {
    fn push(&mut self, parent: Option<usize>, row: OutlineRow) -> usize {
        let index = self.outline.rows.len();
        self.outline.rows.push(row);
        if let Some(parent) = parent {
            self.outline.rows[parent].children.push(index);
        }
        index
    }

    fn depth_below(&self, parent: Option<usize>) -> usize {
        parent.map_or(0, |p| self.outline.rows[p].depth + 1)
    }

    fn add_schema(
        &mut self,
        parent: Option<usize>,
        label: String,
        required: bool,
        node: &SchemaNode,
    ) -> usize {
        let label = if required {
            format!("{label}{}", self.config.required_marker)
        } else {
            label
        };

        let row = OutlineRow {
            label,
            value: display_type(node),
            kind: RowKind::Schema,
            emphasized: !node.properties.is_empty(),
            required,
            expanded: true,
            depth: self.depth_below(parent),
            parent,
            children: Vec::new(),
            details: detail_entries(node),
        };
        let index = self.push(parent, row);

        if !node.properties.is_empty() {
            let group = self.add_group(index, GroupKind::Properties, String::new(), true);
            for (key, child) in &node.properties {
                self.add_schema(Some(group), key.clone(), node.is_required(key), child);
            }
        }

        match &node.additional_properties {
            AdditionalProperties::Unset => {}
            AdditionalProperties::Allowed(allowed) => {
                self.add_group(index, GroupKind::AdditionalProperties, allowed.to_string(), true);
            }
            AdditionalProperties::Schema(schema) => {
                let group =
                    self.add_group(index, GroupKind::AdditionalProperties, String::new(), true);
                let label = schema.name.clone().unwrap_or_default();
                self.add_schema(Some(group), label, false, schema);
            }
        }

        if let Some(patterns) = &node.pattern_properties {
            self.add_keyed_group(index, GroupKind::PatternProperties, patterns, true);
        }

        if let Some(definitions) = &node.definitions {
            let expanded = self.config.expand_definitions;
            self.add_keyed_group(index, GroupKind::Definitions, definitions, expanded);
        }

        index
    }

    fn add_group(
        &mut self,
        parent: usize,
        kind: GroupKind,
        value: String,
        expanded: bool,
    ) -> usize {
        let row = OutlineRow {
            label: kind.label().to_string(),
            value,
            kind: RowKind::Group(kind),
            emphasized: false,
            required: false,
            expanded,
            depth: self.depth_below(Some(parent)),
            parent: Some(parent),
            children: Vec::new(),
            details: Vec::new(),
        };
        self.push(Some(parent), row)
    }

    fn add_keyed_group(
        &mut self,
        parent: usize,
        kind: GroupKind,
        entries: &SchemaMap,
        expanded: bool,
    ) {
        let group = self.add_group(parent, kind, String::new(), expanded);
        for (key, child) in entries {
            self.add_schema(Some(group), key.clone(), false, child);
        }
    }
}
