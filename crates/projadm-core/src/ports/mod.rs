//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Errors are structured variants; callers never match on message text

pub mod project_store;

use thiserror::Error;

pub use project_store::ProjectStorePort;

/// Errors surfaced by the project store.
///
/// This abstracts away driver details and mirrors the three failure classes
/// the workflows care about. All three are recovered per operation and
/// turned into status lines; none abort the run by themselves.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Could not establish a connection (bad host/port/credentials/missing
    /// database). Carries the attempted connection target.
    #[error("connection failed: {0}")]
    Connection(String),

    /// A data-manipulation statement failed. Zero affected or matching rows
    /// is a success, never this variant.
    #[error("query failed: {0}")]
    Query(String),

    /// CREATE/DROP/TRUNCATE failed (database in use, insufficient
    /// privilege, already exists / does not exist).
    #[error("ddl failed: {0}")]
    Ddl(String),
}
