//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a file exists relative to the workspace root.
///
/// # Example
/// ```ignore
/// assert_exists!(env, "build/keystone-plan.json");
/// ```
#[macro_export]
macro_rules! assert_exists {
    ($env:expr, $path:expr) => {
        let full_path = $env.path($path);
        assert!(
            full_path.exists(),
            "Expected file at '{}', but it doesn't exist.\n\
             Workspace: {:?}\n\
             Files found:\n  {}",
            $path,
            $env.workspace.path(),
            $crate::common::list_all_files($env.workspace.path()).join("\n  ")
        );
    };
}

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Configured 3 modules");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that output does NOT contain a pattern.
///
/// # Example
/// ```ignore
/// assert_output_not_contains!(result, "warning");
/// ```
#[macro_export]
macro_rules! assert_output_not_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            !$result.stdout.contains($pattern) && !$result.stderr.contains($pattern),
            "Expected output to NOT contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command succeeded, showing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success, got exit code {}\nstdout:\n{}\nstderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}
