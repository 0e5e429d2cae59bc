//! Convention value objects
//!
//! A convention is a named bundle of build policy. Conventions are plain
//! data here; the external executor decides what each one means.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// Formatting, static analysis and test defaults shared by every subproject
    Common,
    /// Per-module coverage instrumentation
    Coverage,
    /// Named module descriptor / export checks
    Module,
    /// API documentation generation
    Documentation,
    /// Artifact publishing
    Publishing,
    /// Aggregate coverage report (root only)
    CoverageReport,
    /// Release staging repository (root only)
    ReleaseStaging,
}

impl Convention {
    pub fn id(&self) -> &'static str {
        match self {
            Convention::Common => "common",
            Convention::Coverage => "coverage",
            Convention::Module => "module",
            Convention::Documentation => "documentation",
            Convention::Publishing => "publishing",
            Convention::CoverageReport => "coverage-report",
            Convention::ReleaseStaging => "release-staging",
        }
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Ordered, duplicate-free set of conventions applied to one module.
///
/// Order is application order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConventionSet(Vec<Convention>);

impl ConventionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a convention; returns false if it was already present.
    pub fn insert(&mut self, convention: Convention) -> bool {
        if self.contains(convention) {
            return false;
        }
        self.0.push(convention);
        true
    }

    pub fn contains(&self, convention: Convention) -> bool {
        self.0.contains(&convention)
    }

    pub fn iter(&self) -> impl Iterator<Item = Convention> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Convention> for ConventionSet {
    fn from_iter<I: IntoIterator<Item = Convention>>(iter: I) -> Self {
        let mut set = ConventionSet::new();
        for convention in iter {
            set.insert(convention);
        }
        set
    }
}

impl std::fmt::Display for ConventionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<&str> = self.0.iter().map(Convention::id).collect();
        f.write_str(&ids.join(", "))
    }
}
