//! PostgreSQL implementation of the `ProjectStorePort` trait.
//!
//! Every operation opens a fresh connection and closes it before returning,
//! on success and on query failure alike. There is no pool and no reuse
//! across calls, which keeps the load on the shared database bounded and
//! deterministic.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, Executor};

use projadm_core::{ConnectionProfile, ManagedTable, ProjectStorePort, StoreError};

use crate::sql;

/// PostgreSQL-backed project store.
///
/// Row-level operations target the profile's shared database; existence,
/// size, create and drop target the control database, since a connection
/// cannot drop the database it is currently connected to.
pub struct PgProjectStore {
    profile: ConnectionProfile,
}

impl PgProjectStore {
    pub fn new(profile: ConnectionProfile) -> Self {
        Self { profile }
    }

    fn options(&self, database: &str) -> PgConnectOptions {
        // Password intentionally not set here: sqlx falls back to the
        // libpq-style environment (PGPASSWORD, ~/.pgpass).
        PgConnectOptions::new()
            .host(&self.profile.host)
            .port(self.profile.port)
            .username(&self.profile.user)
            .database(database)
    }

    /// Open a fresh connection to the given database. Never pooled.
    async fn connect(&self, database: &str) -> Result<PgConnection, StoreError> {
        PgConnection::connect_with(&self.options(database))
            .await
            .map_err(|e| {
                StoreError::Connection(format!(
                    "{}@{}:{}/{database}: {e}",
                    self.profile.user, self.profile.host, self.profile.port
                ))
            })
    }
}

/// Close a connection gracefully; a failed goodbye is logged, not surfaced.
async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "connection close failed");
    }
}

#[async_trait]
impl ProjectStorePort for PgProjectStore {
    async fn database_exists(&self, name: &str) -> Result<bool, StoreError> {
        let mut conn = self.connect(&self.profile.control_database).await?;
        tracing::trace!(sql = sql::DATABASE_EXISTS, name, "checking existence");
        let row = sqlx::query(sql::DATABASE_EXISTS)
            .bind(name)
            .fetch_optional(&mut conn)
            .await;
        close(conn).await;
        Ok(row.map_err(|e| StoreError::Query(e.to_string()))?.is_some())
    }

    async fn database_size(&self, name: &str) -> Result<String, StoreError> {
        let mut conn = self.connect(&self.profile.control_database).await?;
        tracing::trace!(sql = sql::DATABASE_SIZE, name, "querying size");
        let size = sqlx::query_scalar::<_, String>(sql::DATABASE_SIZE)
            .bind(name)
            .fetch_one(&mut conn)
            .await;
        close(conn).await;
        size.map_err(|e| StoreError::Query(e.to_string()))
    }

    async fn create_database(&self, name: &str) -> Result<(), StoreError> {
        let stmt = sql::create_database(name)?;
        let mut conn = self.connect(&self.profile.control_database).await?;
        tracing::trace!(sql = %stmt, "creating database");
        // Simple query protocol: CREATE DATABASE cannot run inside a
        // transaction block, so the statement executes in autocommit.
        let res = conn.execute(stmt.as_str()).await;
        close(conn).await;
        res.map(|_| ()).map_err(|e| StoreError::Ddl(e.to_string()))
    }

    async fn drop_database(&self, name: &str) -> Result<(), StoreError> {
        let stmt = sql::drop_database(name)?;
        let mut conn = self.connect(&self.profile.control_database).await?;
        tracing::trace!(sql = %stmt, "dropping database");
        // Same autocommit requirement as create.
        let res = conn.execute(stmt.as_str()).await;
        close(conn).await;
        res.map(|_| ()).map_err(|e| StoreError::Ddl(e.to_string()))
    }

    async fn delete_rows(&self, project: &str, table: ManagedTable) -> Result<u64, StoreError> {
        let stmt = sql::delete_rows(table.name, table.key_column);
        let mut conn = self.connect(&self.profile.database).await?;
        tracing::trace!(sql = %stmt, project, "deleting rows");
        let res = sqlx::query(&stmt).bind(project).execute(&mut conn).await;
        close(conn).await;
        res.map(|done| done.rows_affected())
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    async fn count_rows(&self, project: &str, table: ManagedTable) -> Result<u64, StoreError> {
        let stmt = sql::count_rows(table.name, table.key_column);
        let mut conn = self.connect(&self.profile.database).await?;
        tracing::trace!(sql = %stmt, project, "counting rows");
        let count = sqlx::query_scalar::<_, i64>(&stmt)
            .bind(project)
            .fetch_one(&mut conn)
            .await;
        close(conn).await;
        count
            .map(|n| u64::try_from(n).unwrap_or(0))
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    async fn truncate_table(&self, table: &str) -> Result<(), StoreError> {
        let stmt = sql::truncate(table);
        let mut conn = self.connect(&self.profile.database).await?;
        tracing::trace!(sql = %stmt, "truncating table");
        let res = conn.execute(stmt.as_str()).await;
        close(conn).await;
        res.map(|_| ()).map_err(|e| StoreError::Ddl(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ConnectionProfile {
        ConnectionProfile::new(
            "db.example.org".to_string(),
            5433,
            "admin".to_string(),
            "sthpw".to_string(),
        )
    }

    #[test]
    fn options_target_the_requested_database() {
        let store = PgProjectStore::new(profile());
        let opts = store.options("template1");
        assert_eq!(opts.get_host(), "db.example.org");
        assert_eq!(opts.get_port(), 5433);
        assert_eq!(opts.get_username(), "admin");
        assert_eq!(opts.get_database(), Some("template1"));
    }

    #[tokio::test]
    async fn connection_failure_names_the_target() {
        // Port 1 on localhost refuses immediately; no server required.
        let store = PgProjectStore::new(ConnectionProfile::new(
            "127.0.0.1".to_string(),
            1,
            "postgres".to_string(),
            "sthpw".to_string(),
        ));
        let err = store.connect("sthpw").await.unwrap_err();
        match err {
            StoreError::Connection(msg) => {
                assert!(msg.contains("127.0.0.1:1/sthpw"), "got: {msg}");
            }
            other => panic!("expected connection error, got {other:?}"),
        }
    }
}
