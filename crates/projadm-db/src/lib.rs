//! PostgreSQL implementation of the projadm store port.
//!
//! Connections are short-lived by design: every store operation opens its
//! own connection and closes it on every exit path. Row-level statements run
//! against the shared database; database-level statements run against the
//! control database.
#![deny(unsafe_code)]

pub mod factory;
pub mod sql;
pub mod store;

// Re-export for convenient access
pub use factory::StoreFactory;
pub use store::PgProjectStore;
