//! Project store port definition.
//!
//! The store exposes database-level operations (existence, size, create,
//! drop) and row-level operations (delete, count, truncate) against the
//! databases named in its connection profile.
//!
//! # Design
//!
//! - Every operation opens and closes its own connection; nothing is pooled
//!   or kept alive across calls.
//! - Database-level operations run against the control database, because a
//!   connection cannot drop the database it is currently connected to.
//! - Row-level operations run against the shared database holding the
//!   managed tables and bind the project value - the implementation must
//!   never interpolate it into statement text.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::ManagedTable;

/// Port for the relational store holding project rows and databases.
///
/// Implemented by `projadm-db` and injected into the orchestrator.
#[async_trait]
pub trait ProjectStorePort: Send + Sync {
    /// Whether a non-template database with this name exists.
    ///
    /// An `Err` means existence could not be determined, which callers must
    /// treat as "unknown", not as "absent".
    async fn database_exists(&self, name: &str) -> Result<bool, StoreError>;

    /// Human-readable size of the named database.
    async fn database_size(&self, name: &str) -> Result<String, StoreError>;

    /// Create a dedicated database with this name.
    async fn create_database(&self, name: &str) -> Result<(), StoreError>;

    /// Drop the named database. Fails if the database does not exist or is
    /// in use.
    async fn drop_database(&self, name: &str) -> Result<(), StoreError>;

    /// Delete the project's rows from one managed table. Returns the number
    /// of rows deleted; `Ok(0)` when nothing matched.
    async fn delete_rows(&self, project: &str, table: ManagedTable) -> Result<u64, StoreError>;

    /// Count the project's rows in one managed table without mutating.
    async fn count_rows(&self, project: &str, table: ManagedTable) -> Result<u64, StoreError>;

    /// Remove all rows from a table, regardless of project.
    async fn truncate_table(&self, table: &str) -> Result<(), StoreError>;
}
