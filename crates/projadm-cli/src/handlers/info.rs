//! Info workflow handler: existence and size of per-project databases.

use anyhow::Result;

use projadm_core::InfoStatus;

use crate::bootstrap::CliContext;

/// Execute the info workflow for the given projects.
pub async fn execute(ctx: &CliContext, projects: &[String]) -> Result<()> {
    for report in ctx.admin().info(projects).await {
        match report.status {
            InfoStatus::Present(size) => println!("{}: {size}", report.project),
            InfoStatus::Missing => println!("{}: does not exist", report.project),
            InfoStatus::Unavailable(e) => println!("{}: cannot determine ({e})", report.project),
        }
    }
    Ok(())
}
