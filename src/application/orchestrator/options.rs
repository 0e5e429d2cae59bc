//! Orchestrator Options

use crate::domain::policies::DEFAULT_TEST_PREFIX;
use crate::domain::value_objects::BuildLayout;

/// Options for the orchestrator use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorOptions {
    /// Name prefix that marks a module as test-only
    pub test_prefix: String,
    /// Where the executor places artifacts and outputs
    pub layout: BuildLayout,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            test_prefix: DEFAULT_TEST_PREFIX.to_string(),
            layout: BuildLayout::default(),
        }
    }
}

impl OrchestratorOptions {
    pub fn with_test_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.test_prefix = prefix.into();
        self
    }

    pub fn with_layout(mut self, layout: BuildLayout) -> Self {
        self.layout = layout;
        self
    }
}
