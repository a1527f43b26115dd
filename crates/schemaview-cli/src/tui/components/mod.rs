//! UI components.

pub mod details;
pub mod tree;
