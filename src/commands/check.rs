use anyhow::{Context, Result};

use super::CommandContext;

/// Configures every module; exits non-zero when any module failed.
pub fn cmd_check(ctx: &CommandContext) -> Result<()> {
    let configured = ctx
        .use_case("check")
        .configure()
        .with_context(|| format!("Failed to configure workspace at {}", ctx.root.display()))?;

    println!("{}", ctx.renderer().report(&configured.report));

    // Determine exit status
    if !configured.report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
