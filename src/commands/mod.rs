//! Command handlers for the `keystone` binary

mod check;
mod classpath;
mod context;
mod plan;
mod versions;

pub use check::cmd_check;
pub use classpath::cmd_classpath;
pub use context::CommandContext;
pub use plan::cmd_plan;
pub use versions::cmd_versions;
