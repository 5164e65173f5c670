//! SQL text builders for the PostgreSQL store.
//!
//! Row-level statements bind the project value as `$1`; only the table and
//! key-column names - which come from the static managed table set, never
//! from user input - are spliced into the text. Database-level DDL cannot
//! bind identifiers, so names are validated and quoted here instead.

use projadm_core::{KeyColumn, StoreError};

/// Matches non-template databases with the bound name.
pub const DATABASE_EXISTS: &str =
    "SELECT datname FROM pg_database WHERE datistemplate = false AND datname = $1";

/// Human-readable size of the bound database name.
pub const DATABASE_SIZE: &str = "SELECT pg_size_pretty(pg_database_size($1))";

/// Delete a project's rows from one managed table.
pub fn delete_rows(table: &str, key_column: KeyColumn) -> String {
    format!("DELETE FROM {table} WHERE {} = $1", key_column.as_str())
}

/// Count a project's rows in one managed table.
pub fn count_rows(table: &str, key_column: KeyColumn) -> String {
    format!(
        "SELECT COUNT(*) FROM {table} WHERE {} = $1",
        key_column.as_str()
    )
}

/// Remove all rows from a table.
pub fn truncate(table: &str) -> String {
    format!("TRUNCATE {table}")
}

/// CREATE DATABASE statement with a quoted identifier.
pub fn create_database(name: &str) -> Result<String, StoreError> {
    Ok(format!("CREATE DATABASE {}", quote_ident(name)?))
}

/// DROP DATABASE statement with a quoted identifier.
pub fn drop_database(name: &str) -> Result<String, StoreError> {
    Ok(format!("DROP DATABASE {}", quote_ident(name)?))
}

/// Quote a database identifier, doubling embedded double quotes.
fn quote_ident(name: &str) -> Result<String, StoreError> {
    if name.is_empty() {
        return Err(StoreError::Ddl("empty database name".to_string()));
    }
    if name.contains('\0') {
        return Err(StoreError::Ddl(
            "database name contains a NUL byte".to_string(),
        ));
    }
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use projadm_core::MANAGED_TABLES;

    #[test]
    fn project_table_predicate_uses_code() {
        let project = MANAGED_TABLES.iter().find(|t| t.name == "project").unwrap();
        assert_eq!(
            delete_rows(project.name, project.key_column),
            "DELETE FROM project WHERE code = $1"
        );
    }

    #[test]
    fn other_tables_predicate_uses_project_code() {
        for table in MANAGED_TABLES.iter().filter(|t| t.name != "project") {
            let stmt = count_rows(table.name, table.key_column);
            assert_eq!(
                stmt,
                format!("SELECT COUNT(*) FROM {} WHERE project_code = $1", table.name)
            );
        }
    }

    #[test]
    fn row_statements_bind_the_project_value() {
        // The project value never appears in the statement text - a quote in
        // a project code cannot alter statement structure.
        for table in MANAGED_TABLES {
            assert!(delete_rows(table.name, table.key_column).ends_with("= $1"));
            assert!(count_rows(table.name, table.key_column).ends_with("= $1"));
        }
    }

    #[test]
    fn database_ddl_quotes_identifiers() {
        assert_eq!(drop_database("p50_sfr").unwrap(), "DROP DATABASE \"p50_sfr\"");
        assert_eq!(
            create_database("dw_dev").unwrap(),
            "CREATE DATABASE \"dw_dev\""
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let stmt = drop_database("odd\"name").unwrap();
        assert_eq!(stmt, "DROP DATABASE \"odd\"\"name\"");
    }

    #[test]
    fn empty_database_name_is_rejected() {
        assert!(matches!(drop_database(""), Err(StoreError::Ddl(_))));
        assert!(matches!(create_database(""), Err(StoreError::Ddl(_))));
    }

    #[test]
    fn truncate_targets_the_whole_table() {
        assert_eq!(truncate("file"), "TRUNCATE file");
    }
}
