//! CLI adapter for projadm.
//!
//! Argument parsing, the composition root, and one handler per workflow.
//! Handlers receive the fully-composed context and never touch the database
//! driver directly.

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod parser;

pub use bootstrap::{CliContext, bootstrap};
pub use error::CliError;
pub use parser::{Cli, ModeArg};
