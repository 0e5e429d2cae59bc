//! Scenario: Broken Dependency Declaration
//!
//! Journey: a developer adds an external dependency without pinning it.
//!
//! Steps:
//! 1. `check` names the module and the missing pin
//! 2. `plan` still writes the plan for healthy modules and exits 1
//! 3. Pinning the version fixes both commands
//!
//! Success Criteria:
//! - The failure is attributed to the module that declared the edge
//! - Dependents are reported, not silently dropped

use crate::common::*;
use crate::{assert_exists, assert_output_contains, assert_success};

const UTIL_WITH_BASE_LIB: &str = r#"
[[dependencies]]
kind = "export"
external = "org.example:base-lib"
"#;

/// SCENARIO: unpinned dependency fails, then gets fixed
#[test]
fn scenario_unpinned_dependency_is_reported_then_fixed() {
    let env = simple_workspace()
        .with_module("util", UTIL_WITH_BASE_LIB)
        .build();

    // Step 1
    let result = env.run(&["check"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "Configuration failed for 2 of 3 modules");
    assert_output_contains!(result, "'base-lib'");

    // Step 2
    let result = env.run(&["plan"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "Plan incomplete");
    assert_output_contains!(result, "Failed (2):");
    assert_exists!(env, "build/keystone-plan.json");

    // Step 3
    let manifest = SIMPLE_MANIFEST.replace(
        "junit = \"5.11.4\"",
        "junit = \"5.11.4\"\nbase-lib = \"0.9.0\"",
    );
    env.write_file("keystone.toml", &manifest);
    let result = env.run(&["check"]);
    assert_success!(result);
    assert_output_contains!(result, "Configured 3 modules at 1.2.3");

    let result = env.run(&["--json", "versions"]);
    assert_success!(result);
    let versions = result.json_lines().pop().unwrap();
    assert_eq!(versions["versions"]["base-lib"], "0.9.0");
}
