use std::path::Path;

use anyhow::{Context, Result};

use keystone::infrastructure::{InMemoryArtifactStore, PlanFileExecutor};

use super::CommandContext;

/// Configures the workspace, drives the plan executor over it and writes
/// the resulting plan. A partial plan is still written when modules fail.
pub fn cmd_plan(ctx: &CommandContext, out: Option<&Path>) -> Result<()> {
    let use_case = ctx.use_case("plan");
    let mut configured = use_case
        .configure()
        .with_context(|| format!("Failed to configure workspace at {}", ctx.root.display()))?;

    let executor = PlanFileExecutor::new(ctx.layout());
    let artifacts = InMemoryArtifactStore::new();
    let outcome = use_case.orchestrator().run(
        &mut configured.report,
        &configured.workspace.graph,
        &executor,
        &artifacts,
    );

    let workspace = configured.workspace.graph.root().name.to_string();
    let plan = executor.into_plan(workspace, configured.version.clone());
    let path = ctx.plan_path(out);
    plan.write_to(&path)
        .with_context(|| format!("Failed to write plan to {}", path.display()))?;

    println!("{}", ctx.renderer().outcome(&outcome, &path));

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
