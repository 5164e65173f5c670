//! Per-workflow report types.
//!
//! Workflows never abort on a per-operation failure; they accumulate one
//! outcome per table (or per project) and the caller turns each into a
//! status line. Zero affected rows is `Ok(0)`, distinct from failure.

use crate::ports::StoreError;

/// Outcome of one row-level operation against one managed table.
#[derive(Debug, Clone)]
pub struct TableOutcome {
    /// Table the operation ran against.
    pub table: &'static str,
    /// Rows affected or matched; `Err` only on a genuine failure.
    pub rows: Result<u64, StoreError>,
}

/// Row counts for one project across the managed table set, in set order.
#[derive(Debug, Clone)]
pub struct ProjectRows {
    pub project: String,
    pub tables: Vec<TableOutcome>,
}

/// Result of the delete cascade for one project.
#[derive(Debug, Clone)]
pub struct ProjectDeletion {
    pub project: String,
    /// One outcome per managed table, in set order. Earlier deletes stay
    /// committed when a later table fails - there is no rollback.
    pub tables: Vec<TableOutcome>,
    /// Drop of the project's dedicated database, attempted after the table
    /// loop regardless of per-table outcomes.
    pub dropped: Result<(), StoreError>,
}

/// Existence/size report for one project's dedicated database.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub project: String,
    pub status: InfoStatus,
}

/// What the info workflow found out, queried fresh on each call.
#[derive(Debug, Clone)]
pub enum InfoStatus {
    /// The dedicated database does not exist; no size query was issued.
    Missing,
    /// The database exists; human-readable size from the engine.
    Present(String),
    /// Existence or size could not be determined. Not fatal - the next
    /// project is still processed.
    Unavailable(StoreError),
}
