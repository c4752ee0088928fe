//! Configuration model for exam-prompt.
//!
//! This module defines the Config struct read from a YAML file. It supports
//! forward-compatible YAML parsing (unknown fields are ignored), sensible
//! defaults for every field, and validation of limits and templates.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::CONFIG_ENV_VAR;
pub use types::PromptTemplates;
