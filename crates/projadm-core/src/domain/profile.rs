//! Connection profile for the PostgreSQL instance.
//!
//! Constructed once from the CLI arguments and passed by value into the
//! store adapter - there is no ambient configuration state. Credentials are
//! deliberately absent: authentication comes from the environment
//! (`PGPASSWORD`, `~/.pgpass`), never from an argument.

/// Default database host.
pub const DEFAULT_HOST: &str = "localhost";
/// Default PostgreSQL port.
pub const DEFAULT_PORT: u16 = 5432;
/// Default database user.
pub const DEFAULT_USER: &str = "postgres";
/// Default shared database holding the managed tables.
pub const DEFAULT_DATABASE: &str = "sthpw";
/// Bootstrap database used when creating or dropping other databases.
///
/// A connection cannot drop the database it is currently connected to, so
/// database-level DDL always runs from here.
pub const CONTROL_DATABASE: &str = "template1";

/// Where and as whom the store connects.
///
/// One profile per store instance; immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    /// Hostname running the database.
    pub host: String,
    /// Port the database is listening on.
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Shared database that physically holds the project tables.
    pub database: String,
    /// Connection target for database-level DDL and catalog queries.
    pub control_database: String,
}

impl ConnectionProfile {
    /// Build a profile with the conventional control database.
    pub fn new(host: String, port: u16, user: String, database: String) -> Self {
        Self {
            host,
            port,
            user,
            database,
            control_database: CONTROL_DATABASE.to_string(),
        }
    }
}

impl Default for ConnectionProfile {
    fn default() -> Self {
        Self::new(
            DEFAULT_HOST.to_string(),
            DEFAULT_PORT,
            DEFAULT_USER.to_string(),
            DEFAULT_DATABASE.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_non_empty() {
        let profile = ConnectionProfile::default();
        assert_eq!(profile.host, "localhost");
        assert_eq!(profile.port, 5432);
        assert_eq!(profile.user, "postgres");
        assert_eq!(profile.database, "sthpw");
        assert_eq!(profile.control_database, "template1");
    }

    #[test]
    fn control_database_is_fixed_regardless_of_target() {
        let profile = ConnectionProfile::new(
            "db.example.org".to_string(),
            5433,
            "admin".to_string(),
            "assets".to_string(),
        );
        assert_eq!(profile.control_database, "template1");
    }
}
