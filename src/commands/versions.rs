use anyhow::{Context, Result};

use super::CommandContext;

/// Prints the release version every module receives and the pinned
/// dependency versions of this registration pass.
pub fn cmd_versions(ctx: &CommandContext) -> Result<()> {
    let use_case = ctx.use_case("versions");
    let workspace = use_case
        .load()
        .with_context(|| format!("Failed to load workspace at {}", ctx.root.display()))?;
    let version = use_case.resolve_version(&workspace)?;

    println!("{}", ctx.renderer().versions(&version, &workspace.registry));
    Ok(())
}
