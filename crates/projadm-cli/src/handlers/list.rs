//! List workflow handler: row counts per managed table, no mutation.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the list workflow for the given projects.
pub async fn execute(ctx: &CliContext, projects: &[String]) -> Result<()> {
    println!(
        "listing project rows in database '{}'",
        ctx.profile.database
    );
    for report in ctx.admin().list_rows(projects).await {
        println!("project '{}':", report.project);
        for outcome in report.tables {
            match outcome.rows {
                Ok(rows) => println!("  {}: {rows} rows", outcome.table),
                Err(e) => println!("  {}: {e}", outcome.table),
            }
        }
    }
    Ok(())
}
