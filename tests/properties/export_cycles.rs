//! Property tests for export cycle detection.

use proptest::prelude::*;

use keystone::domain::entities::{DependencyEdge, Module, ModuleGraph, VersionRegistry};
use keystone::domain::value_objects::{DependencyKind, ModuleName, Role, Version};
use keystone::{ConfigurationError, Orchestrator, OrchestratorOptions};

/// `c0 -> c1 -> ... -> c{len-1} -> c0` over export edges, plus `tail`
/// export-depending on the ring and `free` depending on nothing.
fn ring(len: usize, entry: usize) -> ModuleGraph {
    let mut modules = vec![Module::root("root"), Module::new("free", Role::Standard)];
    for idx in 0..len {
        modules.push(
            Module::new(format!("c{}", idx).as_str(), Role::Standard).with_dependency(
                DependencyEdge::internal(
                    DependencyKind::Export,
                    format!("c{}", (idx + 1) % len).as_str(),
                ),
            ),
        );
    }
    modules.push(
        Module::new("tail", Role::Standard).with_dependency(DependencyEdge::internal(
            DependencyKind::Export,
            format!("c{}", entry % len).as_str(),
        )),
    );
    ModuleGraph::new(modules).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every module on an export cycle fails with CyclicDependency
    /// naming itself; dependents fail, unrelated modules configure.
    #[test]
    fn property_export_cycles_are_reported(len in 2usize..=6, entry in 0usize..6) {
        let graph = ring(len, entry);

        let report = Orchestrator::new(OrchestratorOptions::default()).configure(
            &graph,
            &VersionRegistry::default(),
            &Version::new("1.0.0"),
        );

        for idx in 0..len {
            let module = ModuleName::new(format!("c{}", idx).as_str());
            let error = report.get(&module).and_then(|r| r.error.clone());
            match error {
                Some(ConfigurationError::CyclicDependency { module: m, cycle }) => {
                    prop_assert_eq!(&m, &module);
                    prop_assert_eq!(cycle.len(), len);
                    prop_assert_eq!(cycle.first(), Some(&module));
                }
                other => prop_assert!(false, "expected cycle for {}, got {:?}", module, other),
            }
        }

        let tail = report.get(&ModuleName::new("tail")).unwrap();
        let tail_failed_on_ring = matches!(
            &tail.error,
            Some(ConfigurationError::DependencyFailed { .. })
        );
        prop_assert!(tail_failed_on_ring);
        prop_assert!(!report.get(&ModuleName::new("free")).unwrap().is_failed());
        prop_assert!(!report.get(&ModuleName::new("root")).unwrap().is_failed());
    }
}
