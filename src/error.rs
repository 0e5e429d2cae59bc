//! Error types for Keystone
//!
//! Uses `thiserror` for library errors; the binary adds context with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::errors::ConfigurationError;
use crate::domain::ports::WorkspaceError;

/// Result type alias for Keystone operations
pub type KeystoneResult<T> = Result<T, KeystoneError>;

/// Main error type for Keystone operations
#[derive(Error, Debug)]
pub enum KeystoneError {
    /// A module or the whole run failed configuration
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Workspace discovery failed
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// No release version from the command line, environment or manifest
    #[error(
        "no release version for workspace '{workspace}'\n  → Fix: pass --release-version, set KEYSTONE_RELEASE_VERSION, or add `version` to [workspace]"
    )]
    MissingReleaseVersion { workspace: String },

    /// Module asked for on the command line is not in the workspace
    #[error("module '{module}' is not part of the workspace")]
    UnknownModule { module: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
