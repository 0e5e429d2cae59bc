//! Test fixtures - reusable manifest constants for tests.

use super::env::{TestEnv, TestEnvBuilder};

/// Two members: a library and a test-only suite, release version 1.2.3.
pub const SIMPLE_MANIFEST: &str = r#"
[workspace]
name = "demo"
version = "1.2.3"
members = ["util", "test-foo"]

[versions]
junit = "5.11.4"

[[defaults.dependencies]]
kind = "testOnly"
external = "org.junit.jupiter:junit-jupiter-api"
version = "junit"
"#;

/// `test-foo` runs its tests against `util`.
pub const TEST_FOO_MODULE: &str = r#"
[[dependencies]]
kind = "testOnly"
project = "util"
"#;

/// A conformance suite laid out like a real multi-module test library:
/// `util` is shared, `hamcrest` matchers export it, `conformity` checks use
/// it, and `test-unnamed` verifies the packaged checks from outside.
pub const CREEK_MANIFEST: &str = r#"
[workspace]
name = "creek-test"
version = "1.2.3"
members = ["util", "hamcrest", "conformity", "test-unnamed"]

[versions]
junit = "5.11.4"
hamcrest = "3.0"
spotBugs = "4.8.6"

[[defaults.dependencies]]
kind = "testOnly"
external = "org.junit.jupiter:junit-jupiter-api"
version = "junit"

[[defaults.dependencies]]
kind = "testRuntimeOnly"
external = "org.junit.jupiter:junit-jupiter-engine"
version = "junit"
"#;

pub const CREEK_UTIL: &str = r#"
[[dependencies]]
kind = "export"
external = "com.github.spotbugs:spotbugs-annotations"
version = "spotBugs"
"#;

pub const CREEK_HAMCREST: &str = r#"
[[dependencies]]
kind = "export"
external = "org.hamcrest:hamcrest-core"
version = "hamcrest"

[[dependencies]]
kind = "export"
project = "util"
"#;

pub const CREEK_CONFORMITY: &str = r#"
[[dependencies]]
kind = "export"
project = "util"

[[dependencies]]
kind = "testOnly"
project = "hamcrest"
"#;

pub const CREEK_TEST_UNNAMED: &str = r#"
[[dependencies]]
kind = "testOnly"
project = "conformity"
"#;

/// Packaged artifact path of `test-unnamed` under the default layout.
pub const TEST_UNNAMED_JAR: &str = "test-unnamed/build/libs/test-unnamed-1.2.3.jar";

/// Builder pre-populated with the simple two-member workspace.
pub fn simple_workspace() -> TestEnvBuilder {
    TestEnv::builder()
        .with_manifest(SIMPLE_MANIFEST)
        .with_main_sources("util")
        .with_module("test-foo", TEST_FOO_MODULE)
        .with_test_sources("test-foo")
}

/// Builder pre-populated with the conformance suite workspace.
pub fn creek_workspace() -> TestEnvBuilder {
    TestEnv::builder()
        .with_manifest(CREEK_MANIFEST)
        .with_main_sources("util")
        .with_module("util", CREEK_UTIL)
        .with_main_sources("hamcrest")
        .with_module("hamcrest", CREEK_HAMCREST)
        .with_main_sources("conformity")
        .with_module("conformity", CREEK_CONFORMITY)
        .with_module("test-unnamed", CREEK_TEST_UNNAMED)
        .with_test_sources("test-unnamed")
}
