//! Main CLI parser and argument surface.

use clap::{ArgAction, Parser, ValueEnum};

use projadm_core::{ConnectionProfile, Mode};

/// Command-line interface for the project administration tool.
#[derive(Parser)]
#[command(name = "projadm")]
#[command(about = "Administer project rows and per-project databases in a shared PostgreSQL instance")]
#[command(version)]
pub struct Cli {
    /// Workflow to run
    #[arg(long, value_enum)]
    pub mode: ModeArg,

    /// Hostname running the database
    #[arg(long, env = "PROJADM_HOST", default_value = "localhost")]
    pub host: String,

    /// Port the database is listening on
    #[arg(long, env = "PROJADM_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database user (authentication comes from the environment, e.g. ~/.pgpass)
    #[arg(long, env = "PROJADM_USER", default_value = "postgres")]
    pub user: String,

    /// Shared database holding the managed project tables
    #[arg(long, env = "PROJADM_DATABASE", default_value = "sthpw")]
    pub database: String,

    /// Comma-separated list of project codes
    #[arg(long, default_value = "")]
    pub projects: String,

    /// Verbosity level (repeatable; diagnostics only, never alters behavior)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Print intended actions without connecting or mutating anything
    #[arg(long)]
    pub dryrun: bool,
}

impl Cli {
    /// Project identifiers in input order. Whitespace is trimmed and empty
    /// entries dropped; duplicates are kept as supplied.
    pub fn project_list(&self) -> Vec<String> {
        self.projects
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Connection profile from the parsed arguments.
    pub fn profile(&self) -> ConnectionProfile {
        ConnectionProfile::new(
            self.host.clone(),
            self.port,
            self.user.clone(),
            self.database.clone(),
        )
    }
}

/// Workflow argument, mirrored onto the core `Mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Delete,
    List,
    Info,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Delete => Self::Delete,
            ModeArg::List => Self::List,
            ModeArg::Info => Self::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn connection_defaults() {
        let cli = Cli::parse_from(["projadm", "--mode", "list"]);
        assert_eq!(cli.host, "localhost");
        assert_eq!(cli.port, 5432);
        assert_eq!(cli.user, "postgres");
        assert_eq!(cli.database, "sthpw");
        assert!(!cli.dryrun);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn mode_is_required() {
        assert!(Cli::try_parse_from(["projadm"]).is_err());
    }

    #[test]
    fn projects_split_in_input_order() {
        let cli = Cli::parse_from(["projadm", "--mode", "delete", "--projects", "p50_sfr, dw_dev,p47_molly"]);
        assert_eq!(cli.project_list(), ["p50_sfr", "dw_dev", "p47_molly"]);
    }

    #[test]
    fn empty_projects_value_yields_empty_list() {
        let cli = Cli::parse_from(["projadm", "--mode", "info", "--projects", ""]);
        assert!(cli.project_list().is_empty());

        let cli = Cli::parse_from(["projadm", "--mode", "info", "--projects", " , ,"]);
        assert!(cli.project_list().is_empty());
    }

    #[test]
    fn duplicates_are_not_deduplicated() {
        let cli = Cli::parse_from(["projadm", "--mode", "list", "--projects", "acme,acme"]);
        assert_eq!(cli.project_list(), ["acme", "acme"]);
    }

    #[test]
    fn verbose_is_counted() {
        let cli = Cli::parse_from(["projadm", "--mode", "list", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn mode_maps_onto_core() {
        let cli = Cli::parse_from(["projadm", "--mode", "delete"]);
        assert_eq!(Mode::from(cli.mode), Mode::Delete);
    }

    #[test]
    fn profile_carries_the_arguments() {
        let cli = Cli::parse_from([
            "projadm", "--mode", "info", "--host", "db1", "--port", "5433", "--user", "ops",
            "--database", "assets",
        ]);
        let profile = cli.profile();
        assert_eq!(profile.host, "db1");
        assert_eq!(profile.port, 5433);
        assert_eq!(profile.user, "ops");
        assert_eq!(profile.database, "assets");
    }
}
