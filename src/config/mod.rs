//! Configuration module for Keystone
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (KEYSTONE_*)
//! 3. Workspace config (.keystone/config.toml)
//! 4. User config (~/.config/keystone/config.toml)
//! 5. Built-in defaults (lowest priority)

mod keys;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub(crate) use keys::deserialize_with_warnings;
pub use loader::WORKSPACE_CONFIG;
pub use types::{Config, ConventionsConfig, LayoutConfig, OutputConfig, Verbosity};
