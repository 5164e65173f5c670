//! CLI entry point: parse, gate, pre-flight, dispatch.
//!
//! Dry-run short-circuits before the store is even built, so no connection
//! is ever opened. Otherwise a pre-flight existence check of the shared
//! database runs before any project is touched.

use clap::Parser;

use projadm_cli::{Cli, CliError, bootstrap, handlers};
use projadm_core::{ExecutionGate, Mode};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{e}");
        let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

async fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging from the counted -v flag; RUST_LOG wins when set
    init_tracing(cli.verbose);

    // Load environment variables (PGPASSWORD and friends)
    dotenvy::dotenv().ok();

    let projects = cli.project_list();
    if projects.is_empty() {
        return Err(CliError::EmptyProjects.into());
    }

    let mode = Mode::from(cli.mode);
    let gate = ExecutionGate::new(cli.dryrun);
    if let Some(plan) = gate.plan(mode, &projects) {
        println!("{plan}");
        return Ok(());
    }

    // Bootstrap the store and orchestrator (composition root)
    let ctx = bootstrap(cli.profile());

    // Abort before touching any project if the shared database is unreachable
    ctx.admin()
        .preflight(&ctx.profile.database)
        .await
        .map_err(|e| CliError::Preflight(e.to_string()))?;

    match mode {
        Mode::List => handlers::list::execute(&ctx, &projects).await,
        Mode::Delete => handlers::delete::execute(&ctx, &projects).await,
        Mode::Info => handlers::info::execute(&ctx, &projects).await,
    }
}

fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_projects_is_fatal_with_exit_code_one() {
        let cli = Cli::parse_from(["projadm", "--mode", "delete", "--projects", ""]);
        assert!(cli.project_list().is_empty());
        assert_eq!(CliError::EmptyProjects.exit_code(), 1);
    }

    #[test]
    fn dry_run_plan_precedes_any_store_construction() {
        let cli = Cli::parse_from([
            "projadm", "--mode", "delete", "--projects", "acme,ghost", "--dryrun",
        ]);
        let gate = ExecutionGate::new(cli.dryrun);
        let plan = gate.plan(Mode::from(cli.mode), &cli.project_list()).unwrap();
        assert!(plan.contains("delete"));
        assert!(plan.contains("acme,ghost"));
    }
}
