//! Project lifecycle orchestrator.
//!
//! Drives the store through one of three workflows over an ordered project
//! list. Projects are processed strictly in input order, tables strictly in
//! managed-set order, and each project's database drop happens after its
//! table loop - never interleaved with another project.

use std::sync::Arc;

use crate::domain::{
    InfoStatus, MANAGED_TABLES, ProjectDeletion, ProjectInfo, ProjectRows, TableOutcome,
};
use crate::ports::{ProjectStorePort, StoreError};

/// Orchestrates the administrative workflows against an injected store.
pub struct ProjectAdmin {
    store: Arc<dyn ProjectStorePort>,
}

impl ProjectAdmin {
    pub fn new(store: Arc<dyn ProjectStorePort>) -> Self {
        Self { store }
    }

    /// Verify the shared database is reachable before any workflow runs.
    ///
    /// The only store failure that is fatal to the whole invocation.
    pub async fn preflight(&self, database: &str) -> Result<(), StoreError> {
        if self.store.database_exists(database).await? {
            tracing::debug!(database, "pre-flight check passed");
            Ok(())
        } else {
            Err(StoreError::Connection(format!(
                "database '{database}' does not exist"
            )))
        }
    }

    /// Count each project's rows per managed table. Read-only.
    ///
    /// A failed count is recorded in the outcome and the walk continues.
    pub async fn list_rows(&self, projects: &[String]) -> Vec<ProjectRows> {
        let mut reports = Vec::with_capacity(projects.len());
        for project in projects {
            tracing::debug!(%project, "listing rows");
            let mut tables = Vec::with_capacity(MANAGED_TABLES.len());
            for table in MANAGED_TABLES {
                let rows = self.store.count_rows(project, table).await;
                tables.push(TableOutcome {
                    table: table.name,
                    rows,
                });
            }
            reports.push(ProjectRows {
                project: project.clone(),
                tables,
            });
        }
        reports
    }

    /// Delete each project's rows table by table, then drop its dedicated
    /// database.
    ///
    /// The cascade is intentionally non-atomic: each table delete commits on
    /// its own, a failed table does not stop the remaining tables, and the
    /// drop is attempted after the loop no matter how the tables fared. One
    /// project's failure never prevents the next project from being
    /// processed.
    pub async fn delete(&self, projects: &[String]) -> Vec<ProjectDeletion> {
        let mut reports = Vec::with_capacity(projects.len());
        for project in projects {
            tracing::debug!(%project, "deleting project rows");
            let mut tables = Vec::with_capacity(MANAGED_TABLES.len());
            for table in MANAGED_TABLES {
                let rows = self.store.delete_rows(project, table).await;
                if let Err(ref e) = rows {
                    tracing::warn!(%project, table = table.name, error = %e, "table delete failed");
                }
                tables.push(TableOutcome {
                    table: table.name,
                    rows,
                });
            }
            let dropped = self.store.drop_database(project).await;
            reports.push(ProjectDeletion {
                project: project.clone(),
                tables,
                dropped,
            });
        }
        reports
    }

    /// Report existence and size of each project's dedicated database.
    ///
    /// When the database is absent no size query is issued. When existence
    /// cannot be determined the project is reported as unavailable and the
    /// loop moves on.
    pub async fn info(&self, projects: &[String]) -> Vec<ProjectInfo> {
        let mut reports = Vec::with_capacity(projects.len());
        for project in projects {
            let status = match self.store.database_exists(project).await {
                Ok(false) => InfoStatus::Missing,
                Ok(true) => match self.store.database_size(project).await {
                    Ok(size) => InfoStatus::Present(size),
                    Err(e) => InfoStatus::Unavailable(e),
                },
                Err(e) => InfoStatus::Unavailable(e),
            };
            reports.push(ProjectInfo {
                project: project.clone(),
                status,
            });
        }
        reports
    }
}
