//! Resolved configuration entity
//!
//! The per-module object handed to the external build executor.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{BoundDependencies, ClasspathSpec};
use crate::domain::value_objects::{ConventionSet, ModuleName, Role, Version};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfiguration {
    pub module: ModuleName,
    pub role: Role,
    pub version: Version,
    pub directory: PathBuf,
    pub conventions: ConventionSet,
    pub dependencies: BoundDependencies,
    /// Whether the executor should package this module at all.
    pub produces_artifact: bool,
    /// Only present for test-only modules once their artifact is built.
    pub classpath: Option<ClasspathSpec>,
}
