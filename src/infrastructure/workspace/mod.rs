//! Workspace discovery from TOML manifests

mod manifest;
mod toml_source;

pub use toml_source::{TomlWorkspaceSource, MANIFEST_FILE, MODULE_FILE};
