//! Common test utilities for Keystone CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated workspace in a temp directory plus a CLI runner
//! - Assertion macros: `assert_output_contains!`, `assert_exists!`, etc.
//! - Fixtures: Reusable manifest constants

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
