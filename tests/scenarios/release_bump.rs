//! Scenario: Release Version Bump
//!
//! Journey: CI builds a release candidate without editing the manifest.
//!
//! Steps:
//! 1. Default build uses the manifest version
//! 2. CI exports `KEYSTONE_RELEASE_VERSION`
//! 3. A developer overrides with `--release-version`
//!
//! Success Criteria:
//! - Every module carries exactly the root's version
//! - Artifact names follow the version

use crate::common::*;
use crate::assert_success;

fn planned_versions(env: &TestEnv) -> Vec<String> {
    let plan: serde_json::Value =
        serde_json::from_str(&env.read_file("build/keystone-plan.json")).unwrap();
    plan["steps"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["action"] == "execute")
        .map(|s| s["version"].as_str().unwrap().to_string())
        .collect()
}

/// SCENARIO: the release version follows flag, then environment, then manifest
#[test]
fn scenario_release_version_bump() {
    let env = simple_workspace().build();

    // Step 1: manifest version
    assert_success!(env.run(&["plan"]));
    assert_eq!(planned_versions(&env), vec!["1.2.3"; 3]);

    // Step 2: environment override
    let result = env.run_with_env(&["plan"], &[("KEYSTONE_RELEASE_VERSION", "2.0.0-rc1")]);
    assert_success!(result);
    assert_eq!(planned_versions(&env), vec!["2.0.0-rc1"; 3]);
    let plan = env.read_file("build/keystone-plan.json");
    assert!(plan.contains("test-foo-2.0.0-rc1.jar"), "{plan}");

    // Step 3: the flag beats the environment
    let result = env.run_with_env(
        &["--release-version", "2.0.0", "plan"],
        &[("KEYSTONE_RELEASE_VERSION", "2.0.0-rc1")],
    );
    assert_success!(result);
    assert_eq!(planned_versions(&env), vec!["2.0.0"; 3]);
}
