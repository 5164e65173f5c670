//! Domain types: connection profile, managed table set, workflow reports.

pub mod profile;
pub mod report;
pub mod tables;

pub use profile::{
    CONTROL_DATABASE, ConnectionProfile, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_USER,
};
pub use report::{InfoStatus, ProjectDeletion, ProjectInfo, ProjectRows, TableOutcome};
pub use tables::{KeyColumn, MANAGED_TABLES, ManagedTable};
