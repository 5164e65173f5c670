//! The managed table set: shared tables known to hold project-scoped rows.

/// Column used to select a project's rows within a managed table.
///
/// The `project` table holds the project's own row and keys it on `code`;
/// every other table references the owning project through `project_code`.
/// Using the wrong column does not fail - it silently matches zero rows -
/// so the mapping is fixed per table in [`MANAGED_TABLES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyColumn {
    /// Primary key of the `project` table.
    Code,
    /// Foreign reference carried by every other managed table.
    ProjectCode,
}

impl KeyColumn {
    /// Column name as it appears in SQL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::ProjectCode => "project_code",
        }
    }
}

/// A table known to hold project-scoped rows, paired with its key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagedTable {
    /// Table name in the shared database.
    pub name: &'static str,
    /// Column that selects a project's rows in this table.
    pub key_column: KeyColumn,
}

/// The fixed, ordered set of tables processed per project.
///
/// Order is significant: workflows walk the set front to back, and the
/// `project` table's own row goes last.
pub const MANAGED_TABLES: [ManagedTable; 7] = [
    ManagedTable { name: "file", key_column: KeyColumn::ProjectCode },
    ManagedTable { name: "snapshot", key_column: KeyColumn::ProjectCode },
    ManagedTable { name: "task", key_column: KeyColumn::ProjectCode },
    ManagedTable { name: "note", key_column: KeyColumn::ProjectCode },
    ManagedTable { name: "wdg_settings", key_column: KeyColumn::ProjectCode },
    ManagedTable { name: "pref_setting", key_column: KeyColumn::ProjectCode },
    ManagedTable { name: "project", key_column: KeyColumn::Code },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_table_keys_on_code_all_others_on_project_code() {
        for table in MANAGED_TABLES {
            if table.name == "project" {
                assert_eq!(table.key_column, KeyColumn::Code);
            } else {
                assert_eq!(table.key_column, KeyColumn::ProjectCode);
            }
        }
    }

    #[test]
    fn table_order_is_stable() {
        let names: Vec<&str> = MANAGED_TABLES.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            [
                "file",
                "snapshot",
                "task",
                "note",
                "wdg_settings",
                "pref_setting",
                "project"
            ]
        );
    }

    #[test]
    fn key_column_sql_names() {
        assert_eq!(KeyColumn::Code.as_str(), "code");
        assert_eq!(KeyColumn::ProjectCode.as_str(), "project_code");
    }
}
