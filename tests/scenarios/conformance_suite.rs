//! Scenario: Conformance Suite Verified From Outside
//!
//! Journey: a library team ships shared checks and verifies the packaged jar
//! from a separate test-only module.
//!
//! Steps:
//! 1. `check` configures every module and marks `test-unnamed` test-only
//! 2. `plan` packages `test-unnamed` before executing it
//! 3. `classpath` refuses to compose before the jar exists
//! 4. After packaging, `classpath` lists the jar first
//!
//! Success Criteria:
//! - Test-only modules are never published
//! - The packaged artifact shadows the raw test output

use crate::common::*;
use crate::{assert_output_contains, assert_success};

/// SCENARIO: configure, plan, package and compose the conformance suite
#[test]
fn scenario_conformance_suite_complete_journey() {
    let env = creek_workspace().build();

    // Step 1: configuration succeeds for root plus four members
    let result = env.run(&["check"]);
    assert_success!(result);
    assert_output_contains!(result, "Configured 5 modules at 1.2.3");
    let suite = result
        .stdout
        .lines()
        .find(|l| l.contains("test-unnamed"))
        .expect("test-unnamed line");
    assert!(suite.contains("test-only"), "Step 1: {suite}");
    assert!(!suite.contains("publishing"), "Step 1: {suite}");

    // Step 2: the plan packages the suite before running it
    let result = env.run(&["plan"]);
    assert_success!(result);
    let plan: serde_json::Value =
        serde_json::from_str(&env.read_file("build/keystone-plan.json")).unwrap();
    let steps: Vec<(String, String)> = plan["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| {
            (
                s["action"].as_str().unwrap().to_string(),
                s["module"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    let package = steps
        .iter()
        .position(|(a, m)| a == "package" && m == "test-unnamed")
        .expect("Step 2: suite is packaged");
    let execute = steps
        .iter()
        .position(|(a, m)| a == "execute" && m == "test-unnamed")
        .expect("Step 2: suite is executed");
    assert!(package < execute, "Step 2: {steps:?}");
    let conformity = steps
        .iter()
        .position(|(a, m)| a == "execute" && m == "conformity")
        .unwrap();
    assert!(conformity < execute, "Step 2: dependency runs first");

    // Step 3: nothing packaged yet
    let result = env.run(&["classpath", "test-unnamed"]);
    assert_eq!(result.exit_code, 1, "Step 3: {}", result.combined_output());
    assert_output_contains!(result, "has not been built");

    // Step 4: package the suite and compose
    env.package(TEST_UNNAMED_JAR);
    let result = env.run(&["classpath", "test-unnamed"]);
    assert_success!(result);
    let entries: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(entries.first(), Some(&TEST_UNNAMED_JAR));
    assert_eq!(entries.get(1), Some(&"test-unnamed/build/classes/test"));
    assert!(entries.contains(&"conformity/build/classes/main"));
    // hamcrest is only a test dependency of conformity and must not leak
    assert!(!entries.iter().any(|e| e.contains("hamcrest")), "{entries:?}");
}
