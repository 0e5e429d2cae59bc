//! Dependency binder
//!
//! Turns declared edges into concrete dependencies. Externals are pinned
//! through the version registry; internal edges expand to the target's
//! export surface (the target itself plus its export scope, never its test
//! scope).
//!
//! Binding is two-phase. Export scopes are bound in export-topological
//! order, each one recording the module's surface. Test scopes are bound
//! afterwards, once every surface exists, which is what makes test-scope
//! loops legal.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{
    BoundDependencies, DependencyEdge, DependencyTarget, Module, ModuleGraph, ResolvedDependency,
    ResolvedTarget, VersionRegistry,
};
use crate::domain::errors::ConfigurationError;
use crate::domain::value_objects::ModuleName;

pub struct DependencyBinder<'a> {
    graph: &'a ModuleGraph,
    registry: &'a VersionRegistry,
    surfaces: HashMap<ModuleName, Vec<ResolvedDependency>>,
}

impl<'a> DependencyBinder<'a> {
    pub fn new(graph: &'a ModuleGraph, registry: &'a VersionRegistry) -> Self {
        Self {
            graph,
            registry,
            surfaces: HashMap::new(),
        }
    }

    /// Export scope of a module whose export dependencies were bound already.
    ///
    /// On success the module's export surface is recorded for its consumers.
    pub fn bind_export_scope(
        &mut self,
        module: &Module,
    ) -> Result<Vec<ResolvedDependency>, ConfigurationError> {
        let edges = module.dependencies.iter().filter(|e| e.kind.is_export());
        let scope = self.expand(module, edges, &HashSet::new())?;
        tracing::debug!(module = %module.name, entries = scope.len(), "bound export scope");
        self.surfaces.insert(module.name.clone(), scope.clone());
        Ok(scope)
    }

    /// Test scope of a module, excluding anything its export scope already has
    /// and the module itself.
    pub fn bind_test_scope(
        &self,
        module: &Module,
        export: &[ResolvedDependency],
    ) -> Result<Vec<ResolvedDependency>, ConfigurationError> {
        let mut exclude: HashSet<(&'static str, String)> = export
            .iter()
            .map(|dep| owned_identity(&dep.target))
            .collect();
        exclude.insert(("module", module.name.as_str().to_string()));

        let edges = module.dependencies.iter().filter(|e| e.kind.is_test_scope());
        let scope = self.expand(module, edges, &exclude)?;
        tracing::debug!(module = %module.name, entries = scope.len(), "bound test scope");
        Ok(scope)
    }

    /// Both phases for one module.
    pub fn bind(&mut self, module: &Module) -> Result<BoundDependencies, ConfigurationError> {
        let export = self.bind_export_scope(module)?;
        let test = self.bind_test_scope(module, &export)?;
        Ok(BoundDependencies { export, test })
    }

    /// Recorded export surface entries of a bound module (excluding itself).
    pub fn surface(&self, module: &ModuleName) -> Option<&[ResolvedDependency]> {
        self.surfaces.get(module).map(Vec::as_slice)
    }

    fn expand<'e>(
        &self,
        module: &Module,
        edges: impl Iterator<Item = &'e DependencyEdge>,
        exclude: &HashSet<(&'static str, String)>,
    ) -> Result<Vec<ResolvedDependency>, ConfigurationError> {
        let mut seen = exclude.clone();
        let mut scope = Vec::new();
        let mut push = |dep: ResolvedDependency, scope: &mut Vec<ResolvedDependency>| {
            if seen.insert(owned_identity(&dep.target)) {
                scope.push(dep);
            }
        };

        for edge in edges {
            match &edge.target {
                DependencyTarget::External {
                    coordinates,
                    version_key,
                } => {
                    let version = self
                        .registry
                        .get(version_key)
                        .map_err(|err| err.for_module(&module.name))?;
                    push(
                        ResolvedDependency {
                            kind: edge.kind,
                            target: ResolvedTarget::External {
                                coordinates: coordinates.clone(),
                                version: version.clone(),
                            },
                            via: None,
                        },
                        &mut scope,
                    );
                }
                DependencyTarget::Internal { module: target } => {
                    if !self.graph.contains(target) {
                        return Err(ConfigurationError::UnknownModule {
                            module: module.name.clone(),
                            target: target.clone(),
                        });
                    }
                    let surface = if target == &module.name {
                        &[][..]
                    } else {
                        self.surface(target)
                            .ok_or_else(|| ConfigurationError::DependencyFailed {
                                module: module.name.clone(),
                                dependency: target.clone(),
                            })?
                    };

                    push(
                        ResolvedDependency {
                            kind: edge.kind,
                            target: ResolvedTarget::Module {
                                module: target.clone(),
                            },
                            via: None,
                        },
                        &mut scope,
                    );
                    for inherited in surface {
                        push(
                            ResolvedDependency {
                                kind: edge.kind,
                                target: inherited.target.clone(),
                                via: Some(target.clone()),
                            },
                            &mut scope,
                        );
                    }
                }
            }
        }
        Ok(scope)
    }
}

fn owned_identity(target: &ResolvedTarget) -> (&'static str, String) {
    let (kind, key) = target.identity();
    (kind, key.to_string())
}
