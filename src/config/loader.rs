//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{KeystoneError, KeystoneResult};

use super::keys::deserialize_with_warnings;
use super::types::{Config, Verbosity};

/// Workspace-level config, relative to the workspace root
pub const WORKSPACE_CONFIG: &str = ".keystone/config.toml";

const CONFIG_KEYS: &[&str] = &[
    "conventions",
    "test_prefix",
    "layout",
    "build_dir",
    "artifact_dir",
    "artifact_extension",
    "main_output_dir",
    "test_output_dir",
    "plan_file",
    "output",
    "verbosity",
];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> KeystoneResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    deserialize_with_warnings(&content, path, CONFIG_KEYS).map_err(|source| KeystoneError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load from workspace config, user config, or defaults
///
/// The first file found wins; files are not merged. Unreadable files are
/// logged and skipped.
pub fn load_or_default(workspace_root: Option<&Path>) -> Config {
    let candidates = workspace_root
        .map(|root| root.join(WORKSPACE_CONFIG))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in warnings {
                    tracing::warn!("{}", warning);
                }
                tracing::debug!(path = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(err) => tracing::warn!(path = %path.display(), "ignoring config: {}", err),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (KEYSTONE_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // KEYSTONE_TEST_PREFIX
    if let Ok(prefix) = std::env::var("KEYSTONE_TEST_PREFIX") {
        if !prefix.trim().is_empty() {
            config.conventions.test_prefix = prefix;
        }
    }

    // KEYSTONE_BUILD_DIR
    if let Ok(dir) = std::env::var("KEYSTONE_BUILD_DIR") {
        if !dir.trim().is_empty() {
            config.layout.build_dir = PathBuf::from(dir);
        }
    }

    // KEYSTONE_PLAN_FILE
    if let Ok(file) = std::env::var("KEYSTONE_PLAN_FILE") {
        if !file.trim().is_empty() {
            config.layout.plan_file = PathBuf::from(file);
        }
    }

    // KEYSTONE_VERBOSITY
    if let Ok(verbosity) = std::env::var("KEYSTONE_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // KEYSTONE_RELEASE_VERSION
    if let Ok(version) = std::env::var("KEYSTONE_RELEASE_VERSION") {
        if !version.trim().is_empty() {
            config.release_version = Some(version);
        }
    }

    config
}

/// `~/.config/keystone/config.toml`, honouring `XDG_CONFIG_HOME`
fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("keystone/config.toml"))
}
