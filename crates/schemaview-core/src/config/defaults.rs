//! Default values for schemaview configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Model Defaults
// ============================================================================

/// Suffix stripped from object titles when they are used as type labels.
pub const DEFAULT_TITLE_SUFFIX: &str = "Representation";

/// Draft identifier for JSON Schema draft-04.
pub const DRAFT_04: &str = "http://json-schema.org/draft-04/schema#";

/// Draft used when a document does not declare `$schema`.
pub const DEFAULT_DRAFT: &str = DRAFT_04;

// ============================================================================
// View Defaults
// ============================================================================

/// Marker appended to the labels of required properties.
pub const DEFAULT_REQUIRED_MARKER: &str = " *";

/// Whether the Type column is displayed at startup.
pub const DEFAULT_SHOW_TYPE_COLUMN: bool = true;

/// Width of the details pane as a percentage of the screen.
pub const DEFAULT_DETAILS_WIDTH_PERCENT: u16 = 35;

/// Whether `definitions` groups start expanded.
pub const DEFAULT_EXPAND_DEFINITIONS: bool = false;

// ============================================================================
// Logging Defaults
// ============================================================================

/// Default log level filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// File Locations
// ============================================================================

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "schemaview.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "schemaview";

/// File name under the user config dir.
pub const USER_CONFIG_FILE: &str = "config.toml";
