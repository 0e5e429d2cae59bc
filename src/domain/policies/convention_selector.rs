//! Convention Selector
//!
//! Pure classification of a module into a role and the conventions that
//! role receives. No hidden state: the same name and declared role always
//! yield the same set.

use crate::domain::entities::Module;
use crate::domain::value_objects::{Convention, ConventionSet, ModuleName, Role};

/// Name prefix reserved for test-only modules.
pub const DEFAULT_TEST_PREFIX: &str = "test-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionSelector {
    test_prefix: String,
}

impl Default for ConventionSelector {
    fn default() -> Self {
        Self::new(DEFAULT_TEST_PREFIX)
    }
}

impl ConventionSelector {
    pub fn new(test_prefix: impl Into<String>) -> Self {
        Self {
            test_prefix: test_prefix.into(),
        }
    }

    pub fn test_prefix(&self) -> &str {
        &self.test_prefix
    }

    /// Effective role: an explicit `root` wins, then the naming predicate.
    ///
    /// A name matching the reserved prefix is test-only even when the module
    /// declares `standard`; the exemption cannot be overridden per module.
    pub fn classify(&self, name: &ModuleName, declared: Role) -> Role {
        match declared {
            Role::Root => Role::Root,
            _ if name.has_prefix(&self.test_prefix) => Role::TestOnly,
            other => other,
        }
    }

    /// Conventions applied to a role, in application order.
    pub fn conventions_for(&self, role: Role) -> ConventionSet {
        let conventions: &[Convention] = match role {
            Role::Root => &[Convention::CoverageReport, Convention::ReleaseStaging],
            Role::Standard => &[
                Convention::Common,
                Convention::Coverage,
                Convention::Module,
                Convention::Documentation,
                Convention::Publishing,
            ],
            Role::TestOnly => &[Convention::Common, Convention::Coverage],
        };
        conventions.iter().copied().collect()
    }

    pub fn select(&self, module: &Module) -> (Role, ConventionSet) {
        let role = self.classify(&module.name, module.declared_role);
        (role, self.conventions_for(role))
    }
}
