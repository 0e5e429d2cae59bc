//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::DEFAULT_TEST_PREFIX;
use crate::domain::value_objects::{BuildLayout, ConfigWarning};
use crate::error::KeystoneResult;

use super::loader;

/// Module classification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionsConfig {
    /// Name prefix that marks a module as test-only
    #[serde(default = "default_test_prefix")]
    pub test_prefix: String,
}

impl Default for ConventionsConfig {
    fn default() -> Self {
        Self {
            test_prefix: default_test_prefix(),
        }
    }
}

fn default_test_prefix() -> String {
    DEFAULT_TEST_PREFIX.to_string()
}

/// Where the external executor puts its outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,

    #[serde(default = "default_artifact_extension")]
    pub artifact_extension: String,

    #[serde(default = "default_main_output_dir")]
    pub main_output_dir: PathBuf,

    #[serde(default = "default_test_output_dir")]
    pub test_output_dir: PathBuf,

    /// Plan file written by `keystone plan`, relative to the workspace root
    #[serde(default = "default_plan_file")]
    pub plan_file: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
            artifact_dir: default_artifact_dir(),
            artifact_extension: default_artifact_extension(),
            main_output_dir: default_main_output_dir(),
            test_output_dir: default_test_output_dir(),
            plan_file: default_plan_file(),
        }
    }
}

impl LayoutConfig {
    pub fn build_layout(&self) -> BuildLayout {
        BuildLayout {
            build_dir: self.build_dir.clone(),
            artifact_dir: self.artifact_dir.clone(),
            artifact_extension: self.artifact_extension.clone(),
            main_output_dir: self.main_output_dir.clone(),
            test_output_dir: self.test_output_dir.clone(),
        }
    }
}

fn default_build_dir() -> PathBuf {
    BuildLayout::default().build_dir
}

fn default_artifact_dir() -> PathBuf {
    BuildLayout::default().artifact_dir
}

fn default_artifact_extension() -> String {
    BuildLayout::default().artifact_extension
}

fn default_main_output_dir() -> PathBuf {
    BuildLayout::default().main_output_dir
}

fn default_test_output_dir() -> PathBuf {
    BuildLayout::default().test_output_dir
}

fn default_plan_file() -> PathBuf {
    PathBuf::from("build/keystone-plan.json")
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default `tracing` filter directive for this level.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub conventions: ConventionsConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Release version from the environment; never read from a file
    #[serde(skip)]
    pub release_version: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> KeystoneResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> KeystoneResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from workspace config, user config, or defaults
    pub fn load_or_default(workspace_root: Option<&Path>) -> Self {
        loader::load_or_default(workspace_root)
    }

    /// Apply environment variable overrides (KEYSTONE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
