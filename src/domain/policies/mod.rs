//! Domain Policies
//!
//! Business rules that decide what applies to a module.
//! These are pure functions over domain entities.

mod convention_selector;

pub use convention_selector::{ConventionSelector, DEFAULT_TEST_PREFIX};
