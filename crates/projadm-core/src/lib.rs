//! Core domain types, ports and orchestration for projadm.
//!
//! This crate knows nothing about PostgreSQL drivers or command-line
//! parsing. It defines the connection profile, the managed table set, the
//! store port the database adapter implements, and the orchestrator that
//! drives the three administrative workflows (list, delete, info).

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ConnectionProfile, InfoStatus, KeyColumn, MANAGED_TABLES, ManagedTable, ProjectDeletion,
    ProjectInfo, ProjectRows, TableOutcome,
};
pub use ports::{ProjectStorePort, StoreError};
pub use services::{ExecutionGate, Mode, ProjectAdmin};
