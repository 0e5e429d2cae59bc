//! Build executor implementations

mod plan_file;

pub use plan_file::{BuildPlan, PlanFileExecutor, PlanStep};
