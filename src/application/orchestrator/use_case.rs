//! Orchestrator Use Case
//!
//! Configuration is a single breadth-wise pass:
//! 1. Discover every module (root first)
//! 2. Assign versions down the parent chain
//! 3. Select conventions for every module
//! 4. Bind export scopes in export-topological order, then all test scopes
//! 5. Propagate failures to every module referencing a failed one
//! 6. Commit drafts of modules that survived
//!
//! Test-only modules stop at `AwaitingArtifact` until their packaged
//! artifact exists; `compose_classpath` moves them to `Ready`.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{
    BoundDependencies, ClasspathSpec, Module, ModuleGraph, ResolvedConfiguration,
    ResolvedDependency, VersionRegistry,
};
use crate::domain::errors::ConfigurationError;
use crate::domain::policies::ConventionSelector;
use crate::domain::ports::{
    ArtifactStore, BuildExecutor, ConfigurationEvent, ConfigurationEventSink, ModuleStage,
    NoopEventSink,
};
use crate::domain::services::{execution_order, export_order, ClasspathComposer, DependencyBinder};
use crate::domain::value_objects::{ConventionSet, ModuleName, Role, Version};

use super::options::OrchestratorOptions;
use super::report::{ConfigurationReport, ModuleFailure, ModuleReport, RunOutcome};

/// Per-module state while a configuration pass is running. Nothing here is
/// visible outside the pass until the draft is committed.
struct Draft<'g> {
    module: &'g Module,
    version: Version,
    role: Role,
    conventions: ConventionSet,
    export: Option<Vec<ResolvedDependency>>,
    test: Option<Vec<ResolvedDependency>>,
}

impl<'g> Draft<'g> {
    fn discover(module: &'g Module, version: &Version) -> Self {
        Self {
            module,
            version: version.clone(),
            role: module.declared_role,
            conventions: ConventionSet::new(),
            export: None,
            test: None,
        }
    }

    fn commit(self) -> ResolvedConfiguration {
        let produces_artifact = self.module.has_main_sources || self.role.is_test_only();
        ResolvedConfiguration {
            module: self.module.name.clone(),
            role: self.role,
            version: self.version,
            directory: self.module.directory.clone(),
            conventions: self.conventions,
            dependencies: BoundDependencies {
                export: self.export.unwrap_or_default(),
                test: self.test.unwrap_or_default(),
            },
            produces_artifact,
            classpath: None,
        }
    }
}

pub struct Orchestrator {
    selector: ConventionSelector,
    options: OrchestratorOptions,
    events: Arc<dyn ConfigurationEventSink>,
}

impl Orchestrator {
    pub fn new(options: OrchestratorOptions) -> Self {
        Self {
            selector: ConventionSelector::new(options.test_prefix.clone()),
            options,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn ConfigurationEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn options(&self) -> &OrchestratorOptions {
        &self.options
    }

    /// Configures every module of the graph with the supplied release version.
    ///
    /// A failing module never stops its siblings; the report carries one
    /// entry per module either way.
    pub fn configure(
        &self,
        graph: &ModuleGraph,
        registry: &VersionRegistry,
        version: &Version,
    ) -> ConfigurationReport {
        let span = tracing::info_span!("configure", modules = graph.len(), version = %version);
        let _enter = span.enter();

        self.events.on_event(ConfigurationEvent::Started {
            module_count: graph.len(),
            version: version.clone(),
        });

        let mut drafts: Vec<Draft<'_>> = graph
            .iter()
            .map(|module| Draft::discover(module, version))
            .collect();
        self.stage_completed(drafts.iter().map(|d| &d.module.name), ModuleStage::Discovered);

        self.assign_versions(&mut drafts, version);
        self.stage_completed(drafts.iter().map(|d| &d.module.name), ModuleStage::VersionAssigned);

        for draft in &mut drafts {
            let (role, conventions) = self.selector.select(draft.module);
            tracing::debug!(module = %draft.module.name, %role, %conventions, "selected conventions");
            draft.role = role;
            draft.conventions = conventions;
        }
        self.stage_completed(
            drafts.iter().map(|d| &d.module.name),
            ModuleStage::ConventionsSelected,
        );

        let mut failures = self.bind_all(graph, registry, &mut drafts);
        propagate_failures(graph, &drafts, &mut failures);

        let mut modules = Vec::with_capacity(drafts.len());
        for (draft, failure) in drafts.into_iter().zip(failures) {
            let name = draft.module.name.clone();
            match failure {
                Some(error) => {
                    tracing::warn!(module = %name, code = error.code(), "{}", error);
                    self.events.on_event(ConfigurationEvent::ModuleFailed {
                        module: name.clone(),
                        error: error.clone(),
                    });
                    modules.push(ModuleReport::failed(name, error));
                }
                None => {
                    self.stage_completed([&name], ModuleStage::DependenciesBound);
                    let configuration = draft.commit();
                    let stage = if configuration.role.is_test_only() {
                        ModuleStage::AwaitingArtifact
                    } else {
                        ModuleStage::Ready
                    };
                    self.stage_completed([&name], stage);
                    modules.push(ModuleReport::committed(configuration, stage));
                }
            }
        }

        let report = ConfigurationReport {
            version: version.clone(),
            modules,
        };
        let failed = report.failed_count();
        tracing::info!(failed, "configuration finished");
        self.events.on_event(ConfigurationEvent::Completed {
            ready: report.modules.len() - failed,
            failed,
        });
        report
    }

    /// Composes the classpath of one test-only module and marks it `Ready`.
    ///
    /// Fails with `ArtifactNotBuilt` while the artifact is missing; the module
    /// stays `AwaitingArtifact` so the call can be repeated.
    pub fn compose_classpath(
        &self,
        report: &mut ConfigurationReport,
        graph: &ModuleGraph,
        artifacts: &dyn ArtifactStore,
        module: &ModuleName,
    ) -> Result<ClasspathSpec, ConfigurationError> {
        let entry = report
            .get_mut(module)
            .ok_or_else(|| ConfigurationError::ModuleNotFound {
                module: module.clone(),
            })?;
        if let Some(error) = &entry.error {
            return Err(error.clone());
        }
        let Some(configuration) = entry.configuration.as_mut() else {
            return Err(ConfigurationError::ModuleNotFound {
                module: module.clone(),
            });
        };
        if let Some(classpath) = &configuration.classpath {
            return Ok(classpath.clone());
        }

        let composer = ClasspathComposer::new(graph, &self.options.layout, artifacts);
        let classpath = composer.compose(configuration)?;
        configuration.classpath = Some(classpath.clone());
        entry.stage = ModuleStage::Ready;

        self.stage_completed([module], ModuleStage::ClasspathComposed);
        self.stage_completed([module], ModuleStage::Ready);
        Ok(classpath)
    }

    /// Tries every module still awaiting its artifact; returns the ones that
    /// are still not composable.
    pub fn compose_classpaths(
        &self,
        report: &mut ConfigurationReport,
        graph: &ModuleGraph,
        artifacts: &dyn ArtifactStore,
    ) -> Vec<ConfigurationError> {
        let awaiting: Vec<ModuleName> = report
            .in_stage(ModuleStage::AwaitingArtifact)
            .cloned()
            .collect();
        awaiting
            .iter()
            .filter_map(|module| {
                self.compose_classpath(report, graph, artifacts, module)
                    .err()
            })
            .collect()
    }

    /// Hands configured modules to the executor in execution order.
    ///
    /// Test-only modules are packaged, composed, then executed. Modules that
    /// reference a failed module are never handed over.
    pub fn run(
        &self,
        report: &mut ConfigurationReport,
        graph: &ModuleGraph,
        executor: &dyn BuildExecutor,
        artifacts: &dyn ArtifactStore,
    ) -> RunOutcome {
        let span = tracing::info_span!("run", modules = graph.len());
        let _enter = span.enter();

        let mut outcome = RunOutcome::default();
        let mut failed: HashSet<ModuleName> = HashSet::new();

        for name in execution_order(graph) {
            let Some(entry) = report.get(&name) else {
                continue;
            };
            if let Some(error) = &entry.error {
                outcome.failed.push(ModuleFailure {
                    module: name.clone(),
                    reason: error.to_string(),
                });
                failed.insert(name);
                continue;
            }

            let failed_dependency = graph
                .get(&name)
                .and_then(|m| m.internal_targets().find(|t| failed.contains(*t)))
                .cloned();
            if let Some(dependency) = failed_dependency {
                tracing::warn!(module = %name, %dependency, "skipped: dependency failed");
                self.events.on_event(ConfigurationEvent::Skipped {
                    module: name.clone(),
                    dependency: dependency.clone(),
                });
                outcome.skipped.push((name.clone(), dependency));
                failed.insert(name);
                continue;
            }

            match self.execute_module(report, graph, executor, artifacts, &name) {
                Ok(()) => {
                    self.events.on_event(ConfigurationEvent::Executed {
                        module: name.clone(),
                    });
                    outcome.executed.push(name);
                }
                Err(reason) => {
                    tracing::warn!(module = %name, "{}", reason);
                    self.events.on_event(ConfigurationEvent::ExecutionFailed {
                        module: name.clone(),
                        message: reason.clone(),
                    });
                    outcome.failed.push(ModuleFailure {
                        module: name.clone(),
                        reason,
                    });
                    failed.insert(name);
                }
            }
        }

        tracing::info!(
            executed = outcome.executed.len(),
            failed = outcome.failed.len(),
            skipped = outcome.skipped.len(),
            "run finished"
        );
        outcome
    }

    fn execute_module(
        &self,
        report: &mut ConfigurationReport,
        graph: &ModuleGraph,
        executor: &dyn BuildExecutor,
        artifacts: &dyn ArtifactStore,
        name: &ModuleName,
    ) -> Result<(), String> {
        let is_test_only = report
            .configuration(name)
            .map(|c| c.role.is_test_only())
            .unwrap_or(false);

        if is_test_only {
            let configuration = report
                .configuration(name)
                .ok_or_else(|| format!("module '{}' has no configuration", name))?;
            let artifact = executor
                .package(configuration)
                .map_err(|err| err.to_string())?;
            artifacts.record_built(name, artifact);
            self.compose_classpath(report, graph, artifacts, name)
                .map_err(|err| err.to_string())?;
        }

        let configuration = report
            .configuration(name)
            .ok_or_else(|| format!("module '{}' has no configuration", name))?;
        executor.execute(configuration).map_err(|err| err.to_string())
    }

    fn assign_versions(&self, drafts: &mut [Draft<'_>], version: &Version) {
        for idx in 0..drafts.len() {
            // Parents are always earlier in the list.
            let inherited = drafts[idx]
                .module
                .parent
                .as_ref()
                .and_then(|parent| drafts[..idx].iter().find(|d| &d.module.name == parent))
                .map(|parent| parent.version.clone())
                .unwrap_or_else(|| version.clone());
            drafts[idx].version = inherited;
        }
    }

    /// Both binding phases. Returns one failure slot per draft.
    fn bind_all(
        &self,
        graph: &ModuleGraph,
        registry: &VersionRegistry,
        drafts: &mut [Draft<'_>],
    ) -> Vec<Option<ConfigurationError>> {
        let mut failures: Vec<Option<ConfigurationError>> = vec![None; drafts.len()];
        let position = |name: &ModuleName| graph.position(name);

        let order = export_order(graph);
        for (module, cycle) in &order.cycles {
            if let Some(idx) = position(module) {
                failures[idx] = Some(ConfigurationError::CyclicDependency {
                    module: module.clone(),
                    cycle: cycle.clone(),
                });
            }
        }

        let mut binder = DependencyBinder::new(graph, registry);
        for name in &order.sorted {
            let Some(idx) = position(name) else {
                continue;
            };
            match binder.bind_export_scope(drafts[idx].module) {
                Ok(scope) => drafts[idx].export = Some(scope),
                Err(error) => failures[idx] = Some(error),
            }
        }
        for name in &order.blocked {
            let Some(idx) = position(name) else {
                continue;
            };
            let module = drafts[idx].module;
            let dependency = module
                .export_targets()
                .find(|target| binder.surface(target).is_none())
                .unwrap_or(&module.name)
                .clone();
            failures[idx] = Some(ConfigurationError::DependencyFailed {
                module: module.name.clone(),
                dependency,
            });
        }

        for (idx, draft) in drafts.iter_mut().enumerate() {
            if failures[idx].is_some() {
                continue;
            }
            let result = match draft.export.as_deref() {
                Some(export) => binder.bind_test_scope(draft.module, export),
                None => continue,
            };
            match result {
                Ok(scope) => draft.test = Some(scope),
                Err(error) => failures[idx] = Some(error),
            }
        }

        failures
    }

    fn stage_completed<'n>(&self, modules: impl IntoIterator<Item = &'n ModuleName>, stage: ModuleStage) {
        if !self.events.wants_detailed_events() {
            return;
        }
        for module in modules {
            self.events.on_event(ConfigurationEvent::StageCompleted {
                module: module.clone(),
                stage,
            });
        }
    }
}

/// Fails every module with an internal edge of any kind to a failed module,
/// until nothing changes.
fn propagate_failures(
    graph: &ModuleGraph,
    drafts: &[Draft<'_>],
    failures: &mut [Option<ConfigurationError>],
) {
    loop {
        let mut changed = false;
        for (idx, draft) in drafts.iter().enumerate() {
            if failures[idx].is_some() {
                continue;
            }
            let failed_dependency = draft
                .module
                .internal_targets()
                .find(|target| {
                    graph
                        .position(target)
                        .is_some_and(|pos| failures[pos].is_some())
                })
                .cloned();
            if let Some(dependency) = failed_dependency {
                failures[idx] = Some(ConfigurationError::DependencyFailed {
                    module: draft.module.name.clone(),
                    dependency,
                });
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}
