pub mod config;
pub mod outline;
pub mod schema;

pub use config::{Config, ConfigError, LoggingConfig, ModelConfig, ViewConfig};
pub use outline::{DetailEntry, GroupKind, Outline, OutlineRow, RowKind};
pub use schema::{
    AdditionalProperties, Draft4Parser, DraftParser, DraftRegistry, SchemaError, SchemaLoader,
    SchemaMap, SchemaNode, SchemaRef,
};
