//! Delete workflow handler: per-table row deletion, then database drop.
//!
//! The cascade is not transactional; every table reports its own outcome
//! and the drop is attempted regardless.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the delete workflow for the given projects.
pub async fn execute(ctx: &CliContext, projects: &[String]) -> Result<()> {
    println!(
        "deleting project rows in database '{}'",
        ctx.profile.database
    );
    for report in ctx.admin().delete(projects).await {
        println!("project '{}':", report.project);
        for outcome in report.tables {
            match outcome.rows {
                Ok(rows) => println!("  {}: {rows} deleted", outcome.table),
                Err(e) => println!("  {}: {e}", outcome.table),
            }
        }
        match report.dropped {
            Ok(()) => println!("  database '{}': dropped", report.project),
            Err(e) => println!("  database '{}': not dropped ({e})", report.project),
        }
    }
    Ok(())
}
