//! JSON Schema model.
//!
//! Normalizes a JSON Schema document into a tree of [`SchemaNode`]s:
//! - Derived type labels (`array<Pet>`, `string<uuid>`, object titles)
//! - Ordered `properties`, `patternProperties` and `definitions`
//! - `additionalProperties` as a three-way [`AdditionalProperties`]
//! - Relative file `$ref`s resolved against the referring file's directory
//!
//! Drafts are chosen through a [`DraftRegistry`]; only draft-04 ships.

mod draft;
mod error;
mod loader;
mod node;
mod reference;
mod registry;

pub use draft::{Draft4Parser, DraftParser};
pub use error::SchemaError;
pub use loader::{read_document, ParseContext, SchemaLoader};
pub use node::{AdditionalProperties, SchemaMap, SchemaNode};
pub use reference::SchemaRef;
pub use registry::DraftRegistry;
