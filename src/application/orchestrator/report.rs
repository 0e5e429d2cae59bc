//! Orchestrator Results

use crate::domain::entities::ResolvedConfiguration;
use crate::domain::errors::ConfigurationError;
use crate::domain::ports::ModuleStage;
use crate::domain::value_objects::{ModuleName, Version};

/// Where one module ended up after configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleReport {
    pub module: ModuleName,
    pub stage: ModuleStage,
    /// Committed only for `Ready` and `AwaitingArtifact` modules.
    pub configuration: Option<ResolvedConfiguration>,
    pub error: Option<ConfigurationError>,
}

impl ModuleReport {
    pub(super) fn committed(configuration: ResolvedConfiguration, stage: ModuleStage) -> Self {
        Self {
            module: configuration.module.clone(),
            stage,
            configuration: Some(configuration),
            error: None,
        }
    }

    pub(super) fn failed(module: ModuleName, error: ConfigurationError) -> Self {
        Self {
            module,
            stage: ModuleStage::Failed,
            configuration: None,
            error: Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.stage == ModuleStage::Failed
    }
}

/// Result of a configuration pass, in declaration order (root first).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationReport {
    pub version: Version,
    pub modules: Vec<ModuleReport>,
}

impl ConfigurationReport {
    pub fn get(&self, module: &ModuleName) -> Option<&ModuleReport> {
        self.modules.iter().find(|m| &m.module == module)
    }

    pub(super) fn get_mut(&mut self, module: &ModuleName) -> Option<&mut ModuleReport> {
        self.modules.iter_mut().find(|m| &m.module == module)
    }

    pub fn configuration(&self, module: &ModuleName) -> Option<&ResolvedConfiguration> {
        self.get(module).and_then(|m| m.configuration.as_ref())
    }

    pub fn configurations(&self) -> impl Iterator<Item = &ResolvedConfiguration> {
        self.modules.iter().filter_map(|m| m.configuration.as_ref())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ModuleName, &ConfigurationError)> {
        self.modules
            .iter()
            .filter_map(|m| m.error.as_ref().map(|err| (&m.module, err)))
    }

    pub fn in_stage(&self, stage: ModuleStage) -> impl Iterator<Item = &ModuleName> {
        self.modules
            .iter()
            .filter(move |m| m.stage == stage)
            .map(|m| &m.module)
    }

    pub fn failed_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_failed()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFailure {
    pub module: ModuleName,
    pub reason: String,
}

/// Result of handing configured modules to the build executor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Modules the executor ran, in order
    pub executed: Vec<ModuleName>,
    /// Modules that failed configuration, packaging, composition or execution
    pub failed: Vec<ModuleFailure>,
    /// Modules never handed over because a dependency failed: (module, dependency)
    pub skipped: Vec<(ModuleName, ModuleName)>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}
