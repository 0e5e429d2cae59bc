//! Property tests for release version propagation.

use proptest::prelude::*;

use keystone::domain::entities::{DependencyEdge, Module, ModuleGraph, VersionRegistry};
use keystone::domain::value_objects::{DependencyKind, ModuleName, Role, Version};
use keystone::{Orchestrator, OrchestratorOptions};

/// Parent seed, export seeds (to earlier modules) and test seeds (to any module).
type Spec = (Option<usize>, Vec<usize>, Vec<usize>);

fn specs() -> impl Strategy<Value = Vec<Spec>> {
    let spec = (
        proptest::option::of(0usize..16),
        proptest::collection::vec(0usize..16, 0..=3),
        proptest::collection::vec(0usize..16, 0..=3),
    );
    proptest::collection::vec(spec, 1..=8)
}

fn name(idx: usize) -> String {
    format!("m{}", idx)
}

/// Export edges only point backwards, so the export graph is acyclic; test
/// edges may point anywhere, including loops and the module itself.
fn build(specs: &[Spec]) -> ModuleGraph {
    let mut modules = vec![Module::root("root")];
    for (idx, (parent, exports, tests)) in specs.iter().enumerate() {
        let mut module = Module::new(name(idx).as_str(), Role::Standard);
        if idx > 0 {
            if let Some(parent) = parent {
                module = module.with_parent(name(parent % idx).as_str());
            }
            for target in exports {
                module = module.with_dependency(DependencyEdge::internal(
                    DependencyKind::Export,
                    name(target % idx).as_str(),
                ));
            }
        }
        for target in tests {
            module = module.with_dependency(DependencyEdge::internal(
                DependencyKind::TestOnly,
                name(target % specs.len()).as_str(),
            ));
        }
        modules.push(module);
    }
    ModuleGraph::new(modules).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every module's effective version equals the root's.
    #[test]
    fn property_every_module_gets_the_root_version(
        specs in specs(),
        version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}(-SNAPSHOT)?",
    ) {
        let graph = build(&specs);
        let version = Version::new(version);

        let report = Orchestrator::new(OrchestratorOptions::default()).configure(
            &graph,
            &VersionRegistry::default(),
            &version,
        );

        prop_assert!(report.is_success(), "{:?}", report.failures().collect::<Vec<_>>());
        prop_assert_eq!(report.configurations().count(), graph.len());
        let root = report.configuration(&ModuleName::new("root")).unwrap();
        prop_assert_eq!(&root.version, &version);
        for configuration in report.configurations() {
            prop_assert_eq!(&configuration.version, &root.version);
        }
    }

    /// PROPERTY: test edges never leak into a module's export scope.
    #[test]
    fn property_export_scope_holds_only_export_edges(specs in specs()) {
        let graph = build(&specs);

        let report = Orchestrator::new(OrchestratorOptions::default()).configure(
            &graph,
            &VersionRegistry::default(),
            &Version::new("1.0.0"),
        );

        for configuration in report.configurations() {
            prop_assert!(configuration
                .dependencies
                .export
                .iter()
                .all(|dep| dep.kind.is_export()));
        }
    }
}
