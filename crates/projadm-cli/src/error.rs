//! CLI-specific error types and exit-code mapping.
//!
//! Only two conditions are fatal to the whole invocation; every other
//! failure is reported as a status line by its workflow and leaves the exit
//! code untouched.

use thiserror::Error;

/// Fatal CLI-level failures.
#[derive(Debug, Error)]
pub enum CliError {
    /// `--projects` resolved to an empty list; nothing to do.
    #[error("please provide a project list (--projects a,b,c)")]
    EmptyProjects,

    /// Pre-flight existence check of the shared database failed.
    #[error("pre-flight check failed: {0}")]
    Preflight(String),
}

impl CliError {
    /// Exit code for this failure. Both fatal conditions exit with 1;
    /// success is 0.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyProjects | Self::Preflight(_) => 1,
        }
    }
}
