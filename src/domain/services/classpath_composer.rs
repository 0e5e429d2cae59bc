//! Classpath composer
//!
//! Test-only modules are consumed as a packaged artifact rather than as
//! compiled output, so their test runtime classpath is assembled by hand:
//! the artifact first, then the module's own test output, then the test
//! runtime dependencies (export scope, then test scope).

use crate::domain::entities::{
    ClasspathEntry, ClasspathSpec, ModuleGraph, ResolvedConfiguration, ResolvedTarget,
};
use crate::domain::errors::ConfigurationError;
use crate::domain::ports::ArtifactStore;
use crate::domain::value_objects::BuildLayout;

pub struct ClasspathComposer<'a> {
    graph: &'a ModuleGraph,
    layout: &'a BuildLayout,
    artifacts: &'a dyn ArtifactStore,
}

impl<'a> ClasspathComposer<'a> {
    pub fn new(
        graph: &'a ModuleGraph,
        layout: &'a BuildLayout,
        artifacts: &'a dyn ArtifactStore,
    ) -> Self {
        Self {
            graph,
            layout,
            artifacts,
        }
    }

    /// Composes the classpath of a bound test-only module.
    ///
    /// Fails with `ArtifactNotBuilt` until the executor has packaged the
    /// module; calling again afterwards succeeds. Nothing is built here.
    pub fn compose(
        &self,
        config: &ResolvedConfiguration,
    ) -> Result<ClasspathSpec, ConfigurationError> {
        if !config.role.is_test_only() {
            return Err(ConfigurationError::ClasspathNotApplicable {
                module: config.module.clone(),
                role: config.role,
            });
        }

        let expected =
            self.layout
                .artifact_path(&config.directory, &config.module, &config.version);
        let artifact = self
            .artifacts
            .built_artifact(&config.module, &expected)
            .ok_or_else(|| ConfigurationError::ArtifactNotBuilt {
                module: config.module.clone(),
                artifact: expected,
            })?;

        let mut spec = ClasspathSpec::new();
        spec.push(ClasspathEntry::PackagedArtifact { path: artifact });
        spec.push(ClasspathEntry::TestOutput {
            path: self.layout.test_output(&config.directory),
        });

        for dep in config.dependencies.test_runtime() {
            let entry = match &dep.target {
                ResolvedTarget::External { .. } => ClasspathEntry::External {
                    notation: dep.target.notation(),
                },
                ResolvedTarget::Module { module } => {
                    let target = self.graph.get(module).ok_or_else(|| {
                        ConfigurationError::ModuleNotFound {
                            module: module.clone(),
                        }
                    })?;
                    ClasspathEntry::Module {
                        module: module.clone(),
                        path: self.layout.main_output(&target.directory),
                    }
                }
            };
            spec.push(entry);
        }

        tracing::debug!(module = %config.module, entries = spec.len(), "composed classpath");
        Ok(spec)
    }
}
