use anyhow::{Context, Result};

use keystone::domain::value_objects::ModuleName;
use keystone::infrastructure::FsArtifactStore;
use keystone::KeystoneError;

use super::CommandContext;

/// Composes the classpath of one test-only module from artifacts already
/// on disk. Fails with `ArtifactNotBuilt` until the module is packaged.
pub fn cmd_classpath(ctx: &CommandContext, module: &str) -> Result<()> {
    let use_case = ctx.use_case("classpath");
    let mut configured = use_case
        .configure()
        .with_context(|| format!("Failed to configure workspace at {}", ctx.root.display()))?;

    let name = ModuleName::new(module);
    if !configured.workspace.graph.contains(&name) {
        return Err(KeystoneError::UnknownModule {
            module: module.to_string(),
        }
        .into());
    }

    let artifacts = FsArtifactStore::new(&ctx.root);
    let classpath = use_case
        .orchestrator()
        .compose_classpath(
            &mut configured.report,
            &configured.workspace.graph,
            &artifacts,
            &name,
        )
        .map_err(KeystoneError::from)?;

    println!("{}", ctx.renderer().classpath(&name, &classpath));
    Ok(())
}
