//! Draft registry mapping `$schema` identifiers to parsing strategies.

use std::collections::HashMap;
use std::sync::Arc;

use super::draft::{Draft4Parser, DraftParser};

/// Registry of draft parsers.
///
/// Maps `$schema` identifiers to their parsing strategy. Identifiers are
/// compared with any trailing `#` removed, so `.../draft-04/schema` and
/// `.../draft-04/schema#` select the same strategy. Lookups that miss fall
/// back to the default strategy (draft-04 unless changed).
pub struct DraftRegistry {
    /// Normalized identifier to parser mapping.
    parsers: HashMap<String, Arc<dyn DraftParser>>,
    fallback: Arc<dyn DraftParser>,
}

fn normalize(identifier: &str) -> &str {
    identifier.trim().trim_end_matches('#')
}

impl DraftRegistry {
    /// Create a new registry with all built-in drafts.
    pub fn new() -> Self {
        let draft4: Arc<dyn DraftParser> = Arc::new(Draft4Parser::new());
        let mut registry = Self {
            parsers: HashMap::new(),
            fallback: Arc::clone(&draft4),
        };

        registry.register(draft4);

        registry
    }

    /// Register a parser under its identifier.
    pub fn register(&mut self, parser: Arc<dyn DraftParser>) {
        self.parsers
            .insert(normalize(parser.identifier()).to_string(), parser);
    }

    /// Make the parser registered under `identifier` the fallback.
    ///
    /// Returns `false` and leaves the fallback unchanged if no such parser exists.
    pub fn set_default(&mut self, identifier: &str) -> bool {
        match self.get(identifier) {
            Some(parser) => {
                self.fallback = parser;
                true
            }
            None => false,
        }
    }

    /// Get the parser registered for an identifier, without falling back.
    pub fn get(&self, identifier: &str) -> Option<Arc<dyn DraftParser>> {
        self.parsers.get(normalize(identifier)).cloned()
    }

    /// Pick the parser for an (optional) identifier, falling back to the default.
    pub fn resolve(&self, identifier: Option<&str>) -> Arc<dyn DraftParser> {
        match identifier.and_then(|id| self.get(id)) {
            Some(parser) => parser,
            None => {
                if let Some(id) = identifier {
                    tracing::debug!(
                        draft = id,
                        fallback = self.fallback.identifier(),
                        "unknown schema draft"
                    );
                }
                Arc::clone(&self.fallback)
            }
        }
    }

    /// Check whether a draft identifier is known.
    pub fn supports(&self, identifier: &str) -> bool {
        self.parsers.contains_key(normalize(identifier))
    }

    /// List all registered identifiers.
    pub fn identifiers(&self) -> Vec<&'static str> {
        self.parsers.values().map(|p| p.identifier()).collect()
    }
}

impl Default for DraftRegistry {
    fn default() -> Self {
        Self::new()
    }
}
