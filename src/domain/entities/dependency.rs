//! Dependency edge entity
//!
//! An edge is owned by the consuming module; the consumer is implicit.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DependencyKind, ModuleName};

/// What a declared edge points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DependencyTarget {
    /// A third-party library. `version_key` names the registry entry that pins it.
    External {
        coordinates: String,
        version_key: String,
    },
    /// Another module of the same workspace.
    Internal { module: ModuleName },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub kind: DependencyKind,
    pub target: DependencyTarget,
}

impl DependencyEdge {
    pub fn external(
        kind: DependencyKind,
        coordinates: impl Into<String>,
        version_key: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            target: DependencyTarget::External {
                coordinates: coordinates.into(),
                version_key: version_key.into(),
            },
        }
    }

    pub fn internal(kind: DependencyKind, module: impl Into<ModuleName>) -> Self {
        Self {
            kind,
            target: DependencyTarget::Internal {
                module: module.into(),
            },
        }
    }

    /// The internal module this edge points at, if any.
    pub fn internal_target(&self) -> Option<&ModuleName> {
        match &self.target {
            DependencyTarget::Internal { module } => Some(module),
            DependencyTarget::External { .. } => None,
        }
    }
}
