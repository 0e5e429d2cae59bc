//! Dependency kind value object
//!
//! The vocabulary modules use when declaring edges:
//! - `export`: compile + runtime, visible to consumers of the module's API
//! - `testOnly`: compile-time in test scope, not transitive
//! - `testRuntimeOnly`: runtime-only in test scope, not transitive

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyKind {
    Export,
    TestOnly,
    TestRuntimeOnly,
}

impl DependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::Export => "export",
            DependencyKind::TestOnly => "testOnly",
            DependencyKind::TestRuntimeOnly => "testRuntimeOnly",
        }
    }

    /// Test-scoped edges never leak into another module's export surface.
    pub fn is_test_scope(&self) -> bool {
        !self.is_export()
    }

    pub fn is_export(&self) -> bool {
        matches!(self, DependencyKind::Export)
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
