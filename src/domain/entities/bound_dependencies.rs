//! Bound dependency entities
//!
//! The concrete result of binding a module's declared edges: externals
//! carry their pinned version, internal edges are expanded to the target's
//! export surface.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DependencyKind, ModuleName, Version};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ResolvedTarget {
    External { coordinates: String, version: Version },
    Module { module: ModuleName },
}

impl ResolvedTarget {
    /// `group:artifact:version` for externals, `project:<name>` for modules.
    pub fn notation(&self) -> String {
        match self {
            ResolvedTarget::External {
                coordinates,
                version,
            } => format!("{}:{}", coordinates, version),
            ResolvedTarget::Module { module } => format!("project:{}", module),
        }
    }

    /// Identity used for de-duplication. Externals are keyed by coordinates
    /// alone, so the first pinned version of a library wins.
    pub(crate) fn identity(&self) -> (&'static str, &str) {
        match self {
            ResolvedTarget::External { coordinates, .. } => ("external", coordinates),
            ResolvedTarget::Module { module } => ("module", module.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    pub kind: DependencyKind,
    pub target: ResolvedTarget,
    /// Declared internal dependency whose export surface contributed this
    /// entry; `None` when the entry was declared directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<ModuleName>,
}

/// Export scope and test scope kept apart so test edges never leak into
/// another module's API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundDependencies {
    pub export: Vec<ResolvedDependency>,
    pub test: Vec<ResolvedDependency>,
}

impl BoundDependencies {
    /// Everything a module's tests see at runtime: export scope first, then
    /// test scope, each in declaration order.
    pub fn test_runtime(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.export.iter().chain(self.test.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.export.is_empty() && self.test.is_empty()
    }
}
