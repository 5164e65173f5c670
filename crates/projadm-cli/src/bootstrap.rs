//! CLI bootstrap - the composition root.
//!
//! The only place where infrastructure is wired together: the PostgreSQL
//! store is built here and injected into the orchestrator. Handlers receive
//! the fully-composed context.

use projadm_core::{ConnectionProfile, ProjectAdmin};
use projadm_db::StoreFactory;

/// Fully composed application context for CLI handlers.
pub struct CliContext {
    admin: ProjectAdmin,
    /// Profile the store was built from, kept for operator-facing output.
    pub profile: ConnectionProfile,
}

impl CliContext {
    /// Access the orchestrator.
    pub fn admin(&self) -> &ProjectAdmin {
        &self.admin
    }
}

/// Wire the PostgreSQL store and orchestrator from a connection profile.
///
/// Opens no connections: the store connects per operation, so an invocation
/// that never dispatches a workflow stays fully offline.
pub fn bootstrap(profile: ConnectionProfile) -> CliContext {
    tracing::debug!(
        host = %profile.host,
        port = profile.port,
        user = %profile.user,
        database = %profile.database,
        "composing PostgreSQL store"
    );
    let store = StoreFactory::build_store(profile.clone());
    CliContext {
        admin: ProjectAdmin::new(store),
        profile,
    }
}
