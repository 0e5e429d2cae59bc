//! Test environment builder for isolated Keystone testing.
//!
//! Provides `TestEnv` - a workspace in a temp directory with its own config
//! home, plus helpers to run the Keystone CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every run so the
/// developer's shell cannot leak into a test.
const KEYSTONE_VARS: &[&str] = &[
    "KEYSTONE_TEST_PREFIX",
    "KEYSTONE_BUILD_DIR",
    "KEYSTONE_PLAN_FILE",
    "KEYSTONE_VERBOSITY",
    "KEYSTONE_RELEASE_VERSION",
    "RUST_LOG",
];

/// Result of running a Keystone CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Non-empty stdout lines parsed as JSON (NDJSON events, then the result)
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON: {l}\n{e}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated workspace with temp directories.
pub struct TestEnv {
    /// Temporary directory holding the workspace
    pub workspace: TempDir,
    /// Temporary directory used as XDG_CONFIG_HOME
    pub config_home: TempDir,
    keystone_bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to the workspace root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    /// Run keystone from the workspace root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run keystone from the workspace root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.workspace.path(), args, env_vars)
    }

    /// Run keystone from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.keystone_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path());
        for var in KEYSTONE_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute keystone");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file relative to the workspace root
    pub fn write_file(&self, relative: &str, content: &str) {
        write_file(self.workspace.path(), relative, content);
    }

    /// Read a file relative to the workspace root
    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Create an empty stand-in for a packaged artifact
    pub fn package(&self, relative: &str) {
        self.write_file(relative, "PK");
    }
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    manifest: Option<String>,
    files: Vec<(String, String)>,
    user_config: Option<String>,
}

impl TestEnvBuilder {
    /// Create a new builder with an empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `keystone.toml` content
    pub fn with_manifest(mut self, toml: &str) -> Self {
        self.manifest = Some(toml.to_string());
        self
    }

    /// Add a file relative to the workspace root
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Add `module.toml` for a member
    pub fn with_module(self, member: &str, toml: &str) -> Self {
        self.with_file(&format!("{}/module.toml", member), toml)
    }

    /// Give a member main sources so it produces an artifact
    pub fn with_main_sources(self, member: &str) -> Self {
        self.with_file(&format!("{}/src/main/java/Main.java", member), "class Main {}")
    }

    /// Give a member test sources only
    pub fn with_test_sources(self, member: &str) -> Self {
        self.with_file(&format!("{}/src/test/java/MainTest.java", member), "class MainTest {}")
    }

    /// Set `.keystone/config.toml` in the workspace
    pub fn with_workspace_config(self, toml: &str) -> Self {
        self.with_file(".keystone/config.toml", toml)
    }

    /// Set the user config (`$XDG_CONFIG_HOME/keystone/config.toml`)
    pub fn with_user_config(mut self, toml: &str) -> Self {
        self.user_config = Some(toml.to_string());
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let workspace = TempDir::new().expect("Failed to create workspace temp dir");
        let config_home = TempDir::new().expect("Failed to create config temp dir");

        if let Some(manifest) = &self.manifest {
            write_file(workspace.path(), "keystone.toml", manifest);
        }
        for (relative, content) in &self.files {
            write_file(workspace.path(), relative, content);
        }
        if let Some(config) = &self.user_config {
            write_file(config_home.path(), "keystone/config.toml", config);
        }

        TestEnv {
            workspace,
            config_home,
            keystone_bin: PathBuf::from(env!("CARGO_BIN_EXE_keystone")),
        }
    }
}
