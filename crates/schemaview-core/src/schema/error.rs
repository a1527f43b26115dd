//! Schema loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or parsing a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not valid JSON.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A schema position holds something other than a JSON object.
    #[error("Expected a schema object at {location}, found {found}")]
    NotAnObject { location: String, found: &'static str },

    /// A file `$ref` points back into a file that is still being resolved.
    #[error("Circular $ref: {}", format_chain(chain))]
    RefCycle { chain: Vec<PathBuf> },

    /// A file `$ref` fragment does not select anything in the target document.
    #[error("JSON pointer {pointer} not found in {}", path.display())]
    PointerNotFound { path: PathBuf, pointer: String },
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl SchemaError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SchemaError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        SchemaError::Json {
            path: path.into(),
            source,
        }
    }
}
