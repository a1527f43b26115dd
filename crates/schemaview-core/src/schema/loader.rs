//! Schema loading and `$ref` resolution.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::error::SchemaError;
use super::node::SchemaNode;
use super::reference::SchemaRef;
use super::registry::DraftRegistry;
use crate::config::{ModelConfig, DEFAULT_TITLE_SUFFIX};

/// Builds [`SchemaNode`] trees from JSON documents.
pub struct SchemaLoader {
    registry: DraftRegistry,
    title_suffix: String,
}

impl SchemaLoader {
    /// Create a loader with the built-in drafts and default options.
    pub fn new() -> Self {
        Self {
            registry: DraftRegistry::new(),
            title_suffix: DEFAULT_TITLE_SUFFIX.to_string(),
        }
    }

    /// Create a loader from the `[model]` config section.
    pub fn with_config(config: &ModelConfig) -> Self {
        let mut registry = DraftRegistry::new();
        if !registry.set_default(&config.default_draft) {
            tracing::warn!(
                draft = %config.default_draft,
                "configured default draft is not supported"
            );
        }

        tracing::debug!(drafts = ?registry.identifiers(), "draft registry ready");

        Self {
            registry,
            title_suffix: config.title_suffix.clone(),
        }
    }

    /// Replace the draft registry.
    pub fn with_registry(mut self, registry: DraftRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &DraftRegistry {
        &self.registry
    }

    /// Parse an already decoded document. Relative file `$ref`s resolve
    /// against `base_dir`.
    pub fn parse(
        &self,
        document: &Value,
        base_dir: impl AsRef<Path>,
    ) -> Result<SchemaNode, SchemaError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        ParseContext::root(self, base_dir, "#".to_string()).parse(document)
    }

    /// Load, decode and parse a schema file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<SchemaNode, SchemaError> {
        ParseContext::root(self, PathBuf::new(), String::new())
            .resolve_file(path.as_ref(), None)
    }
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and decode a JSON document.
pub fn read_document(path: &Path) -> Result<Value, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| SchemaError::json(path, e))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A file currently being resolved, with the pointer selected from it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Visit {
    path: PathBuf,
    pointer: String,
}

/// State carried through one recursive parse.
///
/// Each sub-schema gets its own context: the base directory for relative
/// `$ref`s, the draft inherited from the parent, the location used in error
/// messages, and the chain of files being resolved (for cycle detection).
#[derive(Clone)]
pub struct ParseContext<'l> {
    loader: &'l SchemaLoader,
    base_dir: PathBuf,
    draft: Option<String>,
    location: String,
    visiting: Vec<Visit>,
}

impl<'l> ParseContext<'l> {
    fn root(loader: &'l SchemaLoader, base_dir: PathBuf, location: String) -> Self {
        Self {
            loader,
            base_dir,
            draft: None,
            location,
            visiting: Vec::new(),
        }
    }

    /// Suffix stripped from object titles.
    pub fn title_suffix(&self) -> &str {
        &self.loader.title_suffix
    }

    /// Context for a sub-schema reached through `segment`, parsed with `draft`.
    pub fn descend(&self, draft: &str, segment: &str) -> Self {
        Self {
            loader: self.loader,
            base_dir: self.base_dir.clone(),
            draft: Some(draft.to_string()),
            location: format!("{}/{}", self.location, segment),
            visiting: self.visiting.clone(),
        }
    }

    /// Parse a schema value, resolving file `$ref`s and dispatching to the
    /// draft strategy.
    pub fn parse(&self, value: &Value) -> Result<SchemaNode, SchemaError> {
        let object = value.as_object().ok_or_else(|| SchemaError::NotAnObject {
            location: self.location.clone(),
            found: value_kind(value),
        })?;

        if let Some(Value::String(reference)) = object.get("$ref") {
            match SchemaRef::classify(reference) {
                SchemaRef::File { path, pointer } => {
                    let target = self.base_dir.join(path);
                    return self.resolve_file(&target, pointer);
                }
                SchemaRef::Internal(_) | SchemaRef::Remote(_) => {
                    tracing::debug!(
                        reference = %reference,
                        location = %self.location,
                        "leaving $ref unresolved"
                    );
                    return Ok(SchemaNode::unresolved(object.clone()));
                }
            }
        }

        let draft = object
            .get("$schema")
            .and_then(Value::as_str)
            .or(self.draft.as_deref());
        let parser = self.loader.registry.resolve(draft);

        tracing::trace!(location = %self.location, draft = parser.identifier(), "parsing schema");
        parser.parse_object(self, object)
    }

    /// Load `path`, optionally select `pointer` inside it, and parse the
    /// result with the file's own directory as base.
    pub fn resolve_file(
        &self,
        path: &Path,
        pointer: Option<&str>,
    ) -> Result<SchemaNode, SchemaError> {
        let canonical = std::fs::canonicalize(path).map_err(|e| SchemaError::io(path, e))?;
        let pointer = pointer.unwrap_or_default();

        let visit = Visit {
            path: canonical.clone(),
            pointer: pointer.to_string(),
        };
        if self.visiting.contains(&visit) {
            let mut chain: Vec<PathBuf> = self.visiting.iter().map(|v| v.path.clone()).collect();
            chain.push(canonical);
            return Err(SchemaError::RefCycle { chain });
        }

        tracing::debug!(path = %canonical.display(), pointer, "resolving $ref");
        let document = read_document(&canonical)?;
        let target = if pointer.is_empty() {
            &document
        } else {
            document
                .pointer(pointer)
                .ok_or_else(|| SchemaError::PointerNotFound {
                    path: canonical.clone(),
                    pointer: pointer.to_string(),
                })?
        };

        let mut visiting = self.visiting.clone();
        visiting.push(visit);

        let ctx = Self {
            loader: self.loader,
            base_dir: canonical.parent().map(Path::to_path_buf).unwrap_or_default(),
            draft: None,
            location: format!("{}#{}", canonical.display(), pointer),
            visiting,
        };
        ctx.parse(target)
    }
}
